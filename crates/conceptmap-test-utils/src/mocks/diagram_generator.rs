//! Mock implementation of the DiagramGenerator trait.

use conceptmap_core::ConceptMap;
use conceptmap_diagrams::{DiagramError, DiagramGenerator, DiagramRequest};
use mockall::mock;
use std::path::Path;

mock! {
    pub DiagramGenerator {}

    impl DiagramGenerator for DiagramGenerator {
        fn file_extension(&self) -> &str;
        fn generate(&self, map: &ConceptMap, request: &DiagramRequest, file: &Path) -> Result<(), DiagramError>;
    }
}
