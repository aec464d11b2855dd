use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use conceptmap_core::{normalize, ConceptMap};

use crate::error::DslError;

/// One YAML document: the raw definition of a single concept map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptMapDefinition {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Newline separated propositions
    #[serde(default)]
    pub propositions: String,

    /// Extra information about concepts, keyed by label
    #[serde(default)]
    pub concepts: BTreeMap<String, ConceptDefinition>,
}

/// Extra information attached to a concept.
///
/// Either a plain description string or a mapping with a description and a
/// key-concept flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConceptDefinition {
    Description(String),
    Detailed {
        #[serde(default)]
        description: String,

        #[serde(default, rename = "isKeyConcept")]
        is_key_concept: bool,
    },
}

impl ConceptDefinition {
    pub fn description(&self) -> &str {
        match self {
            ConceptDefinition::Description(description) => description,
            ConceptDefinition::Detailed { description, .. } => description,
        }
    }

    pub fn is_key_concept(&self) -> bool {
        matches!(self, ConceptDefinition::Detailed { is_key_concept: true, .. })
    }
}

impl ConceptMapDefinition {
    pub fn slug(&self) -> String {
        normalize(&self.title)
    }

    /// Parse the propositions and attach concept information.
    ///
    /// Concept entries are matched to parsed concepts by key. Entries that name
    /// no concept in the map are logged and skipped.
    pub fn build(&self) -> Result<ConceptMap, DslError> {
        let mut builder = ConceptMap::builder(self.title.as_str())
            .description(self.description.as_str())
            .propositions(&self.propositions)
            .map_err(|source| DslError::Parse {
                title: self.title.clone(),
                source,
            })?;

        for (label, concept) in &self.concepts {
            if !builder.describe(label, concept.description()) {
                warn!(map = %self.title, concept = %label, "Concept does not appear in any proposition, ignoring");
                continue;
            }

            if concept.is_key_concept() {
                builder.mark_key_concept(label);
            }
        }

        Ok(builder.build())
    }
}
