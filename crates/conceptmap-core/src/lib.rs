//! # Conceptmap Core
//!
//! Core model for concept maps: concepts identified by a normalised key,
//! propositions joining two concepts with a predicate, the line parser that
//! produces them and the map that owns them.
//!
//! ## Example
//!
//! ```
//! use conceptmap_core::ConceptMap;
//!
//! let mut builder = ConceptMap::builder("Weather")
//!     .description("How weather works")
//!     .propositions("Rain causes Flooding\nRain causes Erosion")
//!     .unwrap();
//! builder.describe("Rain", "Water falling from clouds");
//! let map = builder.build();
//!
//! let rain = map.concept_by_label("rain").unwrap();
//! assert_eq!(rain.description, "Water falling from clouds");
//! assert_eq!(map.related_concepts(&[rain]).len(), 2);
//! ```

mod concept;
mod concept_map;
mod error;
mod identity;
mod parser;
mod proposition;

pub use concept::{Concept, ConceptId};
pub use concept_map::{ConceptMap, ConceptMapBuilder};
pub use error::{error_codes, ParseError, ParseErrorKind};
pub use identity::normalize;
pub use parser::{ParseAccumulator, PropositionParser};
pub use proposition::{Predicate, Proposition, PropositionRef};

/// Returns the version of the conceptmap-core crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
