//! Propositions: two concepts joined by a predicate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::concept::{Concept, ConceptId};

/// Relationship phrase between two concepts, e.g. "is a" or "causes".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Predicate(pub String);

impl Predicate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Predicate {
    fn from(s: String) -> Self {
        Predicate(s)
    }
}

impl From<&str> for Predicate {
    fn from(s: &str) -> Self {
        Predicate(s.to_string())
    }
}

impl AsRef<str> for Predicate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phrase consisting of two concepts joined by a predicate.
///
/// The concepts are owned by the map the proposition was parsed into; the
/// proposition only holds their ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposition {
    pub left: ConceptId,
    pub predicate: Predicate,
    pub right: ConceptId,
}

/// A proposition with its concepts resolved against the owning map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropositionRef<'a> {
    pub left: &'a Concept,
    pub predicate: &'a Predicate,
    pub right: &'a Concept,
}

impl<'a> PropositionRef<'a> {
    /// True if either end of the proposition is `concept`.
    pub fn involves(&self, concept: &Concept) -> bool {
        self.left.same_as(concept) || self.right.same_as(concept)
    }

    /// The end of the proposition that is not `concept`, if `concept` is one of
    /// its ends. For a proposition joining a concept to itself that is the
    /// concept again.
    pub fn opposite(&self, concept: &Concept) -> Option<&'a Concept> {
        if self.left.same_as(concept) {
            Some(self.right)
        } else if self.right.same_as(concept) {
            Some(self.left)
        } else {
            None
        }
    }
}

impl fmt::Display for PropositionRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left.label, self.predicate, self.right.label)
    }
}
