//! # Conceptmap Diagrams
//!
//! Turns concept map propositions into a deduplicated graph and hands the
//! graph to a render backend.
//!
//! ```
//! use conceptmap_core::ConceptMap;
//! use conceptmap_diagrams::{emit_script, GraphSynthesizer};
//!
//! let map = ConceptMap::builder("Weather")
//!     .propositions("Rain causes Flooding\nRain causes Erosion")
//!     .unwrap()
//!     .build();
//!
//! let ir = GraphSynthesizer::default()
//!     .synthesize(&map.propositions(), &[]);
//! assert_eq!(ir.nodes().len(), 4);
//! assert_eq!(ir.edges().len(), 3);
//!
//! let script = emit_script(&ir).unwrap();
//! assert!(script.contains("c-rain -> p-rain-causes"));
//! ```

mod backend;
mod d2;
mod direction;
mod error;
mod generator;
mod ir;
mod modifiers;
mod request;
mod synthesizer;

pub use backend::{
    create_backend, BackendKind, BackendOptions, D2CliBackend, D2ScriptBackend, JsonBackend,
    RenderBackend,
};
pub use d2::{emit_script, validate_identifier};
pub use direction::Direction;
pub use error::{DiagramError, RenderError, SynthesisError, UnknownOption};
pub use generator::{BackendDiagramGenerator, DiagramGenerator};
pub use ir::{ClassDefinition, Edge, GraphIr, Node, NodeKind, NodeStyle, Shape, StyleClass, CLASS_TABLE};
pub use modifiers::{GraphModifier, ModifierPhase};
pub use request::{diagram_requests, DiagramRequest};
pub use synthesizer::{GraphSynthesizer, SynthesisOptions};
