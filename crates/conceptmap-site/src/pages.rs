//! Markdown page rendering.
//!
//! Links are relative to the page being rendered: map pages sit at
//! `<slug>/summary.md` and `<slug>/detail.md`, concept pages at
//! `<slug>/concepts/<key>.md`.

use conceptmap_core::{Concept, ConceptMap};

/// `index.md`: one entry per map
pub fn render_index_page(maps: &[ConceptMap]) -> String {
    let mut out = String::new();
    out.push_str("# Concept Maps\n");

    for map in maps {
        out.push_str(&format!("\n## [{}](./{}/summary.md)\n", map.title(), map.slug()));
        push_paragraph(&mut out, map.description());
    }

    out
}

/// `<slug>/summary.md`. Lists the key concepts if there are any, else every
/// concept.
pub fn render_summary_page(map: &ConceptMap, diagram: &str) -> String {
    let mut out = String::new();
    push_map_header(&mut out, map);

    if map.has_key_concepts() {
        out.push_str(
            "\n> This is a summary of the key concepts in this map. \
             You might also like to [view the map in its entirety](detail.md).\n",
        );
    }

    push_diagram(&mut out, map.title(), diagram);

    let concepts: Vec<&Concept> = if map.has_key_concepts() {
        map.key_concepts()
    } else {
        map.concepts().iter().collect()
    };
    out.push_str("\n## Concepts\n");
    push_concepts(&mut out, map, &concepts, "concepts/");

    out
}

/// `<slug>/detail.md`: every concept
pub fn render_detail_page(map: &ConceptMap, diagram: &str) -> String {
    let mut out = String::new();
    push_map_header(&mut out, map);

    out.push_str(
        "\n> This is a detailed view of this map. \
         You might also like to [view a summary of the key concepts](summary.md).\n",
    );

    push_diagram(&mut out, map.title(), diagram);

    let concepts: Vec<&Concept> = map.concepts().iter().collect();
    out.push_str("\n## Concepts\n");
    push_concepts(&mut out, map, &concepts, "concepts/");

    out
}

/// `<slug>/concepts/<key>.md`
pub fn render_concept_page(map: &ConceptMap, concept: &Concept, diagram: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("### Concept Map: [{}](../summary.md)\n", map.title()));
    out.push_str(&format!("# Concept: {}\n", concept.label));
    push_paragraph(&mut out, &concept.description);

    push_diagram(&mut out, &concept.label, diagram);

    out.push_str("\n## Related Concepts\n");
    push_concepts(&mut out, map, &map.related_concepts(&[concept]), "");

    out
}

fn push_map_header(out: &mut String, map: &ConceptMap) {
    out.push_str(&format!("# Concept Map: {}\n", map.title()));
    push_paragraph(out, map.description());
}

fn push_paragraph(out: &mut String, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        out.push_str(text);
        out.push('\n');
    }
}

fn push_diagram(out: &mut String, alt: &str, diagram: &str) {
    out.push_str("\n## Diagram\n");
    out.push_str(&format!("![{}]({})\n", alt, diagram));
}

/// A heading per concept with its description and the propositions it is in.
/// The other end of each proposition links to that concept's page.
fn push_concepts(out: &mut String, map: &ConceptMap, concepts: &[&Concept], link_prefix: &str) {
    for concept in concepts {
        out.push_str(&format!(
            "\n### [{}]({}{}.md)\n",
            concept.label,
            link_prefix,
            concept.key()
        ));
        push_paragraph(out, &concept.description);

        for p in map.propositions_involving(&[*concept]) {
            if p.left.same_as(concept) {
                out.push_str(&format!(
                    "- {} {} [{}]({}{}.md)\n",
                    p.left.label,
                    p.predicate,
                    p.right.label,
                    link_prefix,
                    p.right.key()
                ));
            } else {
                out.push_str(&format!(
                    "- [{}]({}{}.md) {} {}\n",
                    p.left.label,
                    link_prefix,
                    p.left.key(),
                    p.predicate,
                    p.right.label
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptmap_test_utils::builders::{map_with_key_concepts, weather_map};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_page() {
        let maps = vec![weather_map(), map_with_key_concepts("Animals", "Dog is a Mammal", &[])];

        assert_eq!(
            render_index_page(&maps),
            "# Concept Maps\n\
             \n## [Weather](./weather/summary.md)\n\
             How weather works\n\
             \n## [Animals](./animals/summary.md)\n"
        );
    }

    #[test]
    fn test_summary_page_without_key_concepts_lists_everything() {
        let page = render_summary_page(&weather_map(), "images/weather-summary.svg");

        assert_eq!(
            page,
            "# Concept Map: Weather\n\
             How weather works\n\
             \n## Diagram\n\
             ![Weather](images/weather-summary.svg)\n\
             \n## Concepts\n\
             \n### [Rain](concepts/rain.md)\n\
             Water falling from clouds\n\
             - Rain causes [Flooding](concepts/flooding.md)\n\
             - Rain causes [Erosion](concepts/erosion.md)\n\
             \n### [Flooding](concepts/flooding.md)\n\
             Water where it should not be\n\
             - [Rain](concepts/rain.md) causes Flooding\n\
             - Flooding damages [Houses](concepts/houses.md)\n\
             \n### [Erosion](concepts/erosion.md)\n\
             - [Rain](concepts/rain.md) causes Erosion\n\
             \n### [Houses](concepts/houses.md)\n\
             - [Flooding](concepts/flooding.md) damages Houses\n"
        );
    }

    #[test]
    fn test_summary_page_with_key_concepts() {
        let map = map_with_key_concepts(
            "Weather",
            "Rain causes Flooding\nFlooding damages Houses",
            &["Flooding"],
        );
        let page = render_summary_page(&map, "images/weather-summary.svg");

        assert!(page.contains("[view the map in its entirety](detail.md)"));
        assert!(page.contains("### [Flooding](concepts/flooding.md)"));
        assert!(!page.contains("### [Rain]"));
        assert!(!page.contains("### [Houses]"));
    }

    #[test]
    fn test_detail_page_lists_every_concept() {
        let map = map_with_key_concepts("Weather", "Rain causes Flooding", &["Rain"]);
        let page = render_detail_page(&map, "images/weather-detail.svg");

        assert!(page.contains("[view a summary of the key concepts](summary.md)"));
        assert!(page.contains("![Weather](images/weather-detail.svg)"));
        assert!(page.contains("### [Rain](concepts/rain.md)"));
        assert!(page.contains("### [Flooding](concepts/flooding.md)"));
    }

    #[test]
    fn test_concept_page() {
        let map = weather_map();
        let flooding = map.concept_by_label("Flooding").unwrap();

        assert_eq!(
            render_concept_page(&map, flooding, "../images/flooding.svg"),
            "### Concept Map: [Weather](../summary.md)\n\
             # Concept: Flooding\n\
             Water where it should not be\n\
             \n## Diagram\n\
             ![Flooding](../images/flooding.svg)\n\
             \n## Related Concepts\n\
             \n### [Rain](rain.md)\n\
             Water falling from clouds\n\
             - Rain causes [Flooding](flooding.md)\n\
             - Rain causes [Erosion](erosion.md)\n\
             \n### [Houses](houses.md)\n\
             - [Flooding](flooding.md) damages Houses\n"
        );
    }
}
