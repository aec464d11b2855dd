//! Ready-made concept maps.

use conceptmap_core::ConceptMap;

/// Build a map from propositions, marking `key_concepts` as key concepts.
///
/// Panics if the propositions do not parse.
pub fn map_with_key_concepts(title: &str, propositions: &str, key_concepts: &[&str]) -> ConceptMap {
    let mut builder = ConceptMap::builder(title)
        .propositions(propositions)
        .unwrap_or_else(|e| panic!("invalid test propositions: {e}"));

    for label in key_concepts {
        assert!(builder.mark_key_concept(label), "unknown key concept '{label}'");
    }
    builder.build()
}

/// Build a map from propositions with no key concepts.
pub fn map(title: &str, propositions: &str) -> ConceptMap {
    map_with_key_concepts(title, propositions, &[])
}

/// The weather map used across tests, with descriptions on two concepts
pub fn weather_map() -> ConceptMap {
    let mut builder = ConceptMap::builder("Weather")
        .description("How weather works")
        .propositions(
            "Rain causes Flooding\n\
             Rain causes Erosion\n\
             Flooding damages Houses",
        )
        .unwrap_or_else(|e| panic!("invalid test propositions: {e}"));

    builder.describe("Rain", "Water falling from clouds");
    builder.describe("Flooding", "Water where it should not be");
    builder.build()
}
