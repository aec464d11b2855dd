//! Turns an ordered list of propositions into a deduplicated graph.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use conceptmap_core::{normalize, PropositionRef};

use crate::direction::Direction;
use crate::ir::{GraphIr, NodeKind, StyleClass};
use crate::modifiers::{GraphModifier, ModifierPhase};

/// Options that apply to every graph a synthesizer builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    pub direction: Direction,
    pub italic_predicates: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GraphSynthesizer {
    options: SynthesisOptions,
}

impl GraphSynthesizer {
    pub fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Build a graph from `propositions`, in order.
    ///
    /// Each concept becomes one node. Each distinct (left concept, predicate)
    /// pair becomes one predicate node with a single incoming edge from the
    /// left concept and an outgoing edge to every right concept it was used
    /// with. The left concept of an "is a"/"is an" proposition is drawn
    /// rounded when that proposition introduces it. Concept and predicate ids
    /// are separate, so a predicate id may equal a concept key.
    pub fn synthesize(
        &self,
        propositions: &[PropositionRef<'_>],
        modifiers: &[GraphModifier],
    ) -> GraphIr {
        let mut ir = GraphIr::new(self.options.direction);
        let mut seen_concepts = HashSet::new();
        let mut seen_predicate_edges = HashSet::new();
        let mut labels: HashMap<String, &str> = HashMap::new();

        for modifier in modifiers.iter().filter(|m| m.phase() == ModifierPhase::Structural) {
            modifier.apply(&mut ir);
        }

        for p in propositions {
            let predicate = p.predicate.as_str();
            let left_key = p.left.key();
            let right_key = p.right.key();

            let left_class = if is_class_relation(predicate) {
                StyleClass::ConceptRounded
            } else {
                StyleClass::Concept
            };

            if seen_concepts.insert(left_key.clone()) {
                ir.upsert_concept(&left_key, &p.left.label, left_class);
            }
            if seen_concepts.insert(right_key.clone()) {
                ir.upsert_concept(&right_key, &p.right.label, StyleClass::Concept);
            }
            labels.insert(left_key.clone(), &p.left.label);
            labels.insert(right_key.clone(), &p.right.label);

            let predicate_key = normalize(&format!("{} {}", left_key, predicate));
            ir.ensure_predicate(&predicate_key, predicate, self.options.italic_predicates);

            if seen_predicate_edges.insert((left_key.clone(), predicate_key.clone())) {
                ir.push_edge(NodeKind::Concept, &left_key, &predicate_key);
            }
            ir.push_edge(NodeKind::Predicate, &predicate_key, &right_key);
        }

        for (key, label) in labels {
            if let Some(node) = ir.concept_mut(&key) {
                node.label = label.to_string();
            }
        }

        for modifier in modifiers.iter().filter(|m| m.phase() == ModifierPhase::Attribute) {
            modifier.apply(&mut ir);
        }

        debug!(
            propositions = propositions.len(),
            nodes = ir.nodes().len(),
            edges = ir.edges().len(),
            "Synthesized graph"
        );

        ir
    }
}

// TODO: take the set of class-relation predicates from configuration instead of
// matching English articles.
fn is_class_relation(predicate: &str) -> bool {
    predicate == "is a" || predicate == "is an"
}
