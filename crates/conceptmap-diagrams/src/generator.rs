use std::fs;
use std::path::Path;
use tracing::{debug, info};

use conceptmap_core::ConceptMap;

use crate::backend::RenderBackend;
use crate::error::DiagramError;
use crate::ir::GraphIr;
use crate::modifiers::GraphModifier;
use crate::request::DiagramRequest;
use crate::synthesizer::GraphSynthesizer;

/// Produces diagram files for concept map views
pub trait DiagramGenerator {
    /// Extension of the files written by [`DiagramGenerator::generate`]
    fn file_extension(&self) -> &str;

    /// Draw `request` for `map` into `file`, creating parent directories.
    fn generate(&self, map: &ConceptMap, request: &DiagramRequest, file: &Path) -> Result<(), DiagramError>;
}

/// Synthesizes a graph for each request and hands it to a render backend
pub struct BackendDiagramGenerator {
    synthesizer: GraphSynthesizer,
    backend: Box<dyn RenderBackend>,
    link_base: Option<String>,
}

impl BackendDiagramGenerator {
    pub fn new(synthesizer: GraphSynthesizer, backend: Box<dyn RenderBackend>) -> Self {
        Self {
            synthesizer,
            backend,
            link_base: None,
        }
    }

    /// Link every concept node to `<base>/<map slug>/concepts/<key>.md`
    pub fn with_concept_links(mut self, base: impl Into<String>) -> Self {
        self.link_base = Some(base.into());
        self
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn synthesize(&self, map: &ConceptMap, request: &DiagramRequest) -> Result<GraphIr, DiagramError> {
        let propositions = request.propositions(map)?;
        let mut modifiers = request.modifiers(map)?;
        modifiers.extend(self.link_modifiers(map));

        Ok(self.synthesizer.synthesize(&propositions, &modifiers))
    }

    /// Render `request` to the backend's output bytes
    pub fn render(&self, map: &ConceptMap, request: &DiagramRequest) -> Result<Vec<u8>, DiagramError> {
        let ir = self.synthesize(map, request)?;
        Ok(self.backend.render(&ir)?)
    }

    fn link_modifiers(&self, map: &ConceptMap) -> Vec<GraphModifier> {
        let Some(base) = &self.link_base else {
            return Vec::new();
        };
        let base = base.trim_end_matches('/');
        let slug = map.slug();

        map.concepts()
            .iter()
            .map(|concept| {
                let key = concept.key();
                GraphModifier::Link {
                    url: format!("{}/{}/concepts/{}.md", base, slug, key),
                    key,
                }
            })
            .collect()
    }
}

impl DiagramGenerator for BackendDiagramGenerator {
    fn file_extension(&self) -> &str {
        self.backend.file_extension()
    }

    fn generate(&self, map: &ConceptMap, request: &DiagramRequest, file: &Path) -> Result<(), DiagramError> {
        debug!(map = %map.title(), view = %request, backend = self.backend.name(), "Generating diagram");
        let bytes = self.render(map, request)?;

        let io_error = |source| DiagramError::Io {
            path: file.to_path_buf(),
            source,
        };
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(file, &bytes).map_err(io_error)?;

        info!(path = %file.display(), bytes = bytes.len(), "Wrote diagram");
        Ok(())
    }
}
