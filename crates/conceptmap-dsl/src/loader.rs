//! Loading concept maps from multi-document YAML streams.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use conceptmap_core::ConceptMap;

use crate::definition::ConceptMapDefinition;
use crate::error::DslError;
use crate::validation::validate_definitions;

/// Read every definition in a YAML stream. Empty documents are skipped.
pub fn parse_definitions(yaml_str: &str) -> Result<Vec<ConceptMapDefinition>, DslError> {
    collect_definitions(serde_yaml::Deserializer::from_str(yaml_str))
}

fn collect_definitions<'de, I>(documents: I) -> Result<Vec<ConceptMapDefinition>, DslError>
where
    I: IntoIterator<Item = serde_yaml::Deserializer<'de>>,
{
    let mut definitions = Vec::new();

    for document in documents {
        if let Some(definition) = Option::<ConceptMapDefinition>::deserialize(document)? {
            definitions.push(definition);
        }
    }

    Ok(definitions)
}

/// Validate the definitions and build one concept map per definition.
pub fn build_maps(definitions: &[ConceptMapDefinition]) -> Result<Vec<ConceptMap>, DslError> {
    validate_definitions(definitions)?;

    definitions
        .iter()
        .map(|definition| {
            debug!(title = %definition.title, "Building concept map");
            definition.build()
        })
        .collect()
}

/// Load every concept map in a YAML string
pub fn load_from_yaml_str(yaml_str: &str) -> Result<Vec<ConceptMap>, DslError> {
    let maps = build_maps(&parse_definitions(yaml_str)?)?;
    info!(count = maps.len(), "Loaded concept maps");
    Ok(maps)
}

/// Load every concept map in a YAML reader
pub fn load_from_yaml_reader<R: Read>(reader: R) -> Result<Vec<ConceptMap>, DslError> {
    let definitions = collect_definitions(serde_yaml::Deserializer::from_reader(reader))?;
    let maps = build_maps(&definitions)?;
    info!(count = maps.len(), "Loaded concept maps");
    Ok(maps)
}

/// Load every concept map in a YAML file
pub fn load_from_yaml_file(path: impl AsRef<Path>) -> Result<Vec<ConceptMap>, DslError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading concept map definitions");

    let yaml = std::fs::read_to_string(path).map_err(|source| DslError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_yaml_str(&yaml)
}
