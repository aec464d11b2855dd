use crate::ir::{GraphIr, StyleClass};

/// When a modifier runs relative to proposition emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierPhase {
    /// Before any proposition is emitted
    Structural,
    /// After nodes have their final labels
    Attribute,
}

/// Adjustments applied to a graph around proposition emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphModifier {
    /// Make sure a concept node exists even if no proposition mentions it
    EnsureConcept { key: String, label: String },
    /// Underline a concept node
    Emphasise { key: String },
    /// Attach a hyperlink to a concept node
    Link { key: String, url: String },
}

impl GraphModifier {
    pub fn phase(&self) -> ModifierPhase {
        match self {
            GraphModifier::EnsureConcept { .. } => ModifierPhase::Structural,
            GraphModifier::Emphasise { .. } | GraphModifier::Link { .. } => ModifierPhase::Attribute,
        }
    }

    /// Apply the modifier. Targets that are not in the graph are left alone.
    pub fn apply(&self, ir: &mut GraphIr) {
        match self {
            GraphModifier::EnsureConcept { key, label } => {
                if ir.concept(key).is_none() {
                    ir.upsert_concept(key, label, StyleClass::Concept);
                }
            }
            GraphModifier::Emphasise { key } => {
                if let Some(node) = ir.concept_mut(key) {
                    node.style.underline = Some(true);
                }
            }
            GraphModifier::Link { key, url } => {
                if let Some(node) = ir.concept_mut(key) {
                    node.link = Some(url.clone());
                }
            }
        }
    }
}
