//! A diagram generator that writes placeholder files and remembers every call.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use conceptmap_core::ConceptMap;
use conceptmap_diagrams::{DiagramError, DiagramGenerator, DiagramRequest};

/// One call to [`RecordingDiagramGenerator::generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDiagram {
    pub map_slug: String,
    pub request: DiagramRequest,
    pub file: PathBuf,
}

#[derive(Debug, Default)]
pub struct RecordingDiagramGenerator {
    calls: RefCell<Vec<RecordedDiagram>>,
}

impl RecordingDiagramGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RecordedDiagram> {
        self.calls.borrow().clone()
    }

    /// Paths of every file written, in call order
    pub fn files(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|c| c.file.clone()).collect()
    }
}

impl DiagramGenerator for RecordingDiagramGenerator {
    fn file_extension(&self) -> &str {
        "svg"
    }

    fn generate(&self, map: &ConceptMap, request: &DiagramRequest, file: &Path) -> Result<(), DiagramError> {
        let io_error = |source| DiagramError::Io {
            path: file.to_path_buf(),
            source,
        };
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(file, format!("<svg><!-- {} {} --></svg>", map.slug(), request)).map_err(io_error)?;

        self.calls.borrow_mut().push(RecordedDiagram {
            map_slug: map.slug(),
            request: request.clone(),
            file: file.to_path_buf(),
        });
        Ok(())
    }
}
