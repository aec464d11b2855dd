use conceptmap_core::{ConceptMap, ParseAccumulator, ParseErrorKind, PropositionParser};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn concept_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][a-z0-9]{0,6}", 1..4)
}

fn predicate_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z]{0,6}", 1..4)
}

fn parse(text: &str) -> Result<ParseAccumulator, conceptmap_core::ParseError> {
    PropositionParser::new().parse(text, ParseAccumulator::new())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn valid_lines_reconstruct_exactly(
        left in concept_words(),
        predicate in predicate_words(),
        right in concept_words(),
        gap in " {1,3}",
    ) {
        let line = [left.join(&gap), predicate.join(&gap), right.join(&gap)].join(&gap);
        let acc = parse(&line).unwrap_or_else(|e| panic!("parse failed: {e}"));

        let p = &acc.propositions()[0];
        prop_assert_eq!(&acc.concept(p.left).unwrap().label, &left.join(" "));
        prop_assert_eq!(p.predicate.as_str(), predicate.join(" "));
        prop_assert_eq!(&acc.concept(p.right).unwrap().label, &right.join(" "));
    }

    #[test]
    fn lines_without_lowercase_words_miss_the_predicate(words in concept_words()) {
        let err = parse(&words.join(" ")).unwrap_err();
        prop_assert_eq!(err.kind, ParseErrorKind::MissingPredicate);
    }

    #[test]
    fn lowercase_after_right_concept_is_rejected(
        left in concept_words(),
        predicate in predicate_words(),
        right in concept_words(),
        trailing in "[a-z]{1,6}",
    ) {
        let line = format!("{} {} {} {}", left.join(" "), predicate.join(" "), right.join(" "), trailing);
        let err = parse(&line).unwrap_err();
        prop_assert_eq!(err.kind, ParseErrorKind::UnexpectedLowercaseWord(trailing));
    }

    #[test]
    fn concepts_stay_unique_by_key(lines in prop::collection::vec(
        (concept_words(), predicate_words(), concept_words()), 1..8,
    )) {
        let text = lines
            .iter()
            .map(|(l, p, r)| format!("{} {} {}", l.join(" "), p.join(" "), r.join(" ")))
            .collect::<Vec<_>>()
            .join("\n");
        let acc = parse(&text).unwrap_or_else(|e| panic!("parse failed: {e}"));

        let mut keys: Vec<String> = acc.concepts().iter().map(|c| c.key()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
        prop_assert_eq!(acc.propositions().len(), lines.len());
        for p in acc.propositions() {
            prop_assert!(acc.concept(p.left).is_some());
            prop_assert!(acc.concept(p.right).is_some());
        }
    }
}

#[test]
fn test_concept_identity_is_reused_across_lines() {
    let acc = parse("Rain causes Flooding\nRain causes Erosion").unwrap();

    assert_eq!(acc.concepts().len(), 3);
    assert_eq!(acc.propositions()[0].left, acc.propositions()[1].left);
}

#[test]
fn test_connecting_returns_only_propositions_joining_both() {
    let map = ConceptMap::builder("Water")
        .propositions(
            "Rain causes Flooding\n\
             Flooding causes Rain\n\
             Rain causes Erosion\n\
             Sun dries Flooding",
        )
        .unwrap()
        .build();

    let rain = map.concept_by_label("Rain").unwrap();
    let flooding = map.concept_by_label("Flooding").unwrap();
    let connecting: Vec<String> = map
        .propositions_connecting(&[rain, flooding])
        .iter()
        .map(|p| p.to_string())
        .collect();

    assert_eq!(connecting, vec!["Rain causes Flooding", "Flooding causes Rain"]);
}

#[test]
fn test_key_concept_summary_example() {
    let mut builder = ConceptMap::builder("Letters")
        .propositions("A relates to B\nA relates to C")
        .unwrap();
    builder.mark_key_concept("A");
    let map = builder.build();

    assert!(map.propositions_connecting(&map.key_concepts()).is_empty());
}

#[test]
fn test_failed_parse_has_no_partial_result() {
    let err = ConceptMap::builder("Broken")
        .propositions("Rain causes Flooding\nRain Flooding")
        .unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::MissingPredicate);
    assert_eq!(err.line_number, Some(2));
    assert_eq!(err.code(), conceptmap_core::error_codes::MISSING_PREDICATE);
}
