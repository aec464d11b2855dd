//! Concepts: the nodes of a concept map.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identity::normalize;

/// Index of a concept inside the map that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptId(pub usize);

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the concept map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Label as first written in a proposition or declaration
    pub label: String,

    /// Free-text description, empty until one is attached
    #[serde(default)]
    pub description: String,

    /// Whether the concept shows up in the summary view of its map
    #[serde(default, rename = "isKeyConcept")]
    pub is_key_concept: bool,
}

impl Concept {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: String::new(),
            is_key_concept: false,
        }
    }

    /// Normalised key of the concept
    pub fn key(&self) -> String {
        normalize(&self.label)
    }

    /// True when both concepts normalise to the same key.
    pub fn same_as(&self, other: &Concept) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
