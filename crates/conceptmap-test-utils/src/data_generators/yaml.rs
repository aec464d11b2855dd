//! Sample YAML definition streams.

/// A two-map stream: "Weather" with descriptions and one key concept, and
/// "Animals" without key concepts.
pub fn create_weather_and_animals_yaml() -> String {
    r#"
title: Weather
description: How weather works
propositions: |
  Rain causes Flooding
  Rain causes Erosion
  Flooding damages Houses
  Sun causes Drought
concepts:
  Rain: Water falling from clouds
  Flooding:
    description: Water where it should not be
    isKeyConcept: true
  Sun:
    isKeyConcept: true
---
title: Animals
description: Some animals
propositions: |
  Dog is a Mammal
  Cat is an Animal
  Dog chases Cat
"#
    .to_string()
}

/// A single map with the given title and propositions
pub fn create_map_yaml(title: &str, propositions: &[&str]) -> String {
    let mut yaml = format!("title: {}\npropositions: |\n", title);
    for line in propositions {
        yaml.push_str("  ");
        yaml.push_str(line);
        yaml.push('\n');
    }
    yaml
}
