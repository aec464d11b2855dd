//! # Conceptmap DSL
//!
//! Concept maps are written as a stream of YAML documents, one map per
//! document:
//!
//! ```
//! use conceptmap_dsl::load_from_yaml_str;
//!
//! let yaml = r#"
//! title: Weather
//! description: How weather works
//! propositions: |
//!   Rain causes Flooding
//!   Rain causes Erosion
//! concepts:
//!   Rain: Water falling from clouds
//!   Flooding:
//!     description: Water where it should not be
//!     isKeyConcept: true
//! ---
//! title: Seasons
//! propositions: Summer follows Spring
//! "#;
//!
//! let maps = load_from_yaml_str(yaml).unwrap();
//! assert_eq!(maps.len(), 2);
//! assert!(maps[0].has_key_concepts());
//! ```

mod definition;
mod error;
mod loader;

pub mod validation;

pub use definition::{ConceptDefinition, ConceptMapDefinition};
pub use error::DslError;
pub use loader::{
    build_maps, load_from_yaml_file, load_from_yaml_reader, load_from_yaml_str, parse_definitions,
};
pub use validation::ValidationError;
