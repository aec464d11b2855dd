//! Proposition parsing.
//!
//! A proposition is written as a single line of text: one or more capitalised
//! words naming the left concept, one or more lowercase words forming the
//! predicate, then one or more capitalised words naming the right concept.
//!
//! ```
//! use conceptmap_core::{ParseAccumulator, PropositionParser};
//!
//! let parser = PropositionParser::new();
//! let acc = parser
//!     .parse("Rain causes Flooding\nRain causes Erosion", ParseAccumulator::new())
//!     .unwrap();
//!
//! assert_eq!(acc.concepts().len(), 3);
//! assert_eq!(acc.propositions().len(), 2);
//! ```

use std::collections::HashMap;

use crate::concept::{Concept, ConceptId};
use crate::error::{ParseError, ParseErrorKind};
use crate::identity::normalize;
use crate::proposition::{Predicate, Proposition};

/// Concepts and propositions gathered so far by a parse.
///
/// The accumulator is moved into each parse call and handed back on success,
/// so a failed parse never leaves a half-updated map behind.
#[derive(Debug, Clone, Default)]
pub struct ParseAccumulator {
    concepts: Vec<Concept>,
    propositions: Vec<Proposition>,
    by_key: HashMap<String, ConceptId>,
}

impl ParseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn propositions(&self) -> &[Proposition] {
        &self.propositions
    }

    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id.0)
    }

    pub fn find(&self, label: &str) -> Option<ConceptId> {
        self.by_key.get(&normalize(label)).copied()
    }

    pub(crate) fn concept_mut(&mut self, id: ConceptId) -> Option<&mut Concept> {
        self.concepts.get_mut(id.0)
    }

    /// Return the concept with the same identity as `label`, creating it if
    /// this is the first time it has been seen.
    pub fn resolve_concept(&mut self, label: &str) -> ConceptId {
        let key = normalize(label);
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }

        let id = ConceptId(self.concepts.len());
        self.concepts.push(Concept::new(label));
        self.by_key.insert(key, id);
        id
    }

    pub fn push_proposition(&mut self, proposition: Proposition) {
        self.propositions.push(proposition);
    }

    pub fn into_parts(self) -> (Vec<Concept>, Vec<Proposition>) {
        (self.concepts, self.propositions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    LeftConcept,
    Predicate,
    RightConcept,
}

/// Parses proposition text into an accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct PropositionParser;

impl PropositionParser {
    pub fn new() -> Self {
        PropositionParser
    }

    /// Parse a block of newline separated propositions.
    ///
    /// Blank lines are skipped. The first line that fails to parse aborts the
    /// whole block and its error carries the 1-based line number.
    pub fn parse(&self, text: &str, mut acc: ParseAccumulator) -> Result<ParseAccumulator, ParseError> {
        let text = text.replace("\r\n", "\n");

        for (index, line) in text.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            acc = self
                .parse_line(line, acc)
                .map_err(|err| err.at_line(index + 1))?;
        }

        Ok(acc)
    }

    /// Parse a single proposition and add it, and any new concepts, to `acc`.
    pub fn parse_line(&self, line: &str, mut acc: ParseAccumulator) -> Result<ParseAccumulator, ParseError> {
        let mut state = State::LeftConcept;
        let mut left_words = Vec::new();
        let mut predicate_words = Vec::new();
        let mut right_words = Vec::new();

        for word in line.split_whitespace() {
            let lowercase = starts_with_lowercase(word);

            match state {
                State::LeftConcept => {
                    if lowercase {
                        predicate_words.push(word);
                        state = State::Predicate;
                    } else {
                        left_words.push(word);
                    }
                }
                State::Predicate => {
                    if lowercase {
                        predicate_words.push(word);
                    } else {
                        right_words.push(word);
                        state = State::RightConcept;
                    }
                }
                State::RightConcept => {
                    if lowercase {
                        return Err(ParseError::new(
                            ParseErrorKind::UnexpectedLowercaseWord(word.to_string()),
                            line,
                        ));
                    }
                    right_words.push(word);
                }
            }
        }

        if left_words.is_empty() {
            return Err(ParseError::new(ParseErrorKind::MissingLeftConcept, line));
        }
        if predicate_words.is_empty() {
            return Err(ParseError::new(ParseErrorKind::MissingPredicate, line));
        }
        if right_words.is_empty() {
            return Err(ParseError::new(ParseErrorKind::MissingRightConcept, line));
        }

        let left_label = left_words.join(" ");
        let right_label = right_words.join(" ");

        for label in [&left_label, &right_label] {
            if normalize(label).is_empty() {
                return Err(ParseError::new(ParseErrorKind::EmptyConceptKey(label.clone()), line));
            }
        }

        let left = acc.resolve_concept(&left_label);
        let right = acc.resolve_concept(&right_label);

        acc.push_proposition(Proposition {
            left,
            predicate: Predicate(predicate_words.join(" ")),
            right,
        });

        Ok(acc)
    }
}

fn starts_with_lowercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<ParseAccumulator, ParseError> {
        PropositionParser::new().parse(text, ParseAccumulator::new())
    }

    fn labels(acc: &ParseAccumulator) -> Vec<&str> {
        acc.concepts().iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_parse_simple_proposition() {
        let acc = parse("Rain causes Flooding").unwrap();

        assert_eq!(labels(&acc), vec!["Rain", "Flooding"]);
        assert_eq!(acc.propositions().len(), 1);

        let p = &acc.propositions()[0];
        assert_eq!(acc.concept(p.left).unwrap().label, "Rain");
        assert_eq!(p.predicate.as_str(), "causes");
        assert_eq!(acc.concept(p.right).unwrap().label, "Flooding");
    }

    #[test]
    fn test_multi_word_parts_are_joined_with_single_spaces() {
        let acc = parse("  Heavy   Rain  can  cause   Flash Flooding ").unwrap();
        let p = &acc.propositions()[0];

        assert_eq!(acc.concept(p.left).unwrap().label, "Heavy Rain");
        assert_eq!(p.predicate.as_str(), "can cause");
        assert_eq!(acc.concept(p.right).unwrap().label, "Flash Flooding");
    }

    #[test]
    fn test_numbers_and_symbols_belong_to_concepts() {
        let acc = parse("Route 66 is a US Highway").unwrap();
        let p = &acc.propositions()[0];

        assert_eq!(acc.concept(p.left).unwrap().label, "Route 66");
        assert_eq!(p.predicate.as_str(), "is a");
        assert_eq!(acc.concept(p.right).unwrap().label, "US Highway");
    }

    #[test]
    fn test_concepts_are_reused_across_lines() {
        let acc = parse("Rain causes Flooding\nRain causes Erosion").unwrap();

        assert_eq!(labels(&acc), vec!["Rain", "Flooding", "Erosion"]);
        let (first, second) = (&acc.propositions()[0], &acc.propositions()[1]);
        assert_eq!(first.left, second.left);
        assert_ne!(first.right, second.right);
    }

    #[test]
    fn test_concepts_are_reused_by_key() {
        let acc = parse("Rain causes Flooding\nRAIN feeds Rivers").unwrap();

        assert_eq!(labels(&acc), vec!["Rain", "Flooding", "Rivers"]);
        assert_eq!(acc.propositions()[0].left, acc.propositions()[1].left);
    }

    #[test]
    fn test_right_concept_can_be_reused_as_left() {
        let acc = parse("Rain causes Flooding\nFlooding damages Houses").unwrap();

        assert_eq!(acc.propositions()[0].right, acc.propositions()[1].left);
        assert_eq!(acc.concepts().len(), 3);
    }

    #[test]
    fn test_blank_lines_and_crlf_are_skipped() {
        let acc = parse("\r\nRain causes Flooding\r\n   \r\n\r\nSun causes Drought\r\n").unwrap();
        assert_eq!(acc.propositions().len(), 2);
    }

    #[test]
    fn test_empty_input_is_ok() {
        let acc = parse("").unwrap();
        assert!(acc.concepts().is_empty());
        assert!(acc.propositions().is_empty());
    }

    #[test]
    fn test_missing_predicate() {
        let err = parse("Rain Flooding").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingPredicate);
        assert_eq!(err.line, "Rain Flooding");
    }

    #[test]
    fn test_missing_left_concept() {
        let err = parse("causes Flooding").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingLeftConcept);
    }

    #[test]
    fn test_missing_right_concept() {
        let err = parse("Rain causes").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingRightConcept);
    }

    #[test]
    fn test_lowercase_word_after_right_concept() {
        let err = parse("Rain causes Flooding sometimes").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedLowercaseWord("sometimes".to_string())
        );
    }

    #[test]
    fn test_symbol_only_concept_is_rejected() {
        let err = parse("-- causes Flooding").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyConceptKey("--".to_string()));
    }

    #[test]
    fn test_error_reports_line_number_and_discards_progress() {
        let err = parse("Rain causes Flooding\n\nSun Drought").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingPredicate);
        assert_eq!(err.line_number, Some(3));
    }

    #[test]
    fn test_parse_line_appends_to_existing_accumulator() {
        let parser = PropositionParser::new();
        let acc = parser.parse_line("Rain causes Flooding", ParseAccumulator::new()).unwrap();
        let acc = parser.parse_line("Flooding damages Houses", acc).unwrap();

        assert_eq!(labels(&acc), vec!["Rain", "Flooding", "Houses"]);
        assert_eq!(acc.find("flooding"), Some(ConceptId(1)));
        assert_eq!(acc.find("Snow"), None);
    }

    #[test]
    fn test_starts_with_lowercase() {
        assert!(starts_with_lowercase("causes"));
        assert!(starts_with_lowercase("ändert"));
        assert!(!starts_with_lowercase("Rain"));
        assert!(!starts_with_lowercase("42"));
        assert!(!starts_with_lowercase("-"));
        assert!(!starts_with_lowercase(""));
    }
}
