//! The concept map model and its relationship queries.

use std::collections::HashSet;
use tracing::debug;

use crate::concept::{Concept, ConceptId};
use crate::error::ParseError;
use crate::identity::normalize;
use crate::parser::{ParseAccumulator, PropositionParser};
use crate::proposition::{Proposition, PropositionRef};

/// Builds a [`ConceptMap`]. The only place concepts can still change.
#[derive(Debug, Clone)]
pub struct ConceptMapBuilder {
    title: String,
    description: String,
    acc: ParseAccumulator,
    parser: PropositionParser,
}

impl ConceptMapBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            acc: ParseAccumulator::new(),
            parser: PropositionParser::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parse a block of propositions into the map.
    pub fn propositions(mut self, text: &str) -> Result<Self, ParseError> {
        self.acc = self.parser.parse(text, self.acc)?;
        Ok(self)
    }

    /// Declare a concept that may not (yet) appear in any proposition.
    pub fn declare_concept(mut self, label: &str) -> Self {
        self.acc.resolve_concept(label);
        self
    }

    /// Attach a description to the concept whose key matches `label`.
    ///
    /// Returns false when the map has no such concept.
    pub fn describe(&mut self, label: &str, description: impl Into<String>) -> bool {
        match self.acc.find(label).and_then(|id| self.acc.concept_mut(id)) {
            Some(concept) => {
                concept.description = description.into();
                true
            }
            None => false,
        }
    }

    /// Flag the concept whose key matches `label` as a key concept.
    ///
    /// Returns false when the map has no such concept.
    pub fn mark_key_concept(&mut self, label: &str) -> bool {
        match self.acc.find(label).and_then(|id| self.acc.concept_mut(id)) {
            Some(concept) => {
                concept.is_key_concept = true;
                true
            }
            None => false,
        }
    }

    pub fn build(self) -> ConceptMap {
        let (concepts, propositions) = self.acc.into_parts();
        debug!(
            title = %self.title,
            concepts = concepts.len(),
            propositions = propositions.len(),
            "Built concept map"
        );

        ConceptMap {
            title: self.title,
            description: self.description,
            concepts,
            propositions,
        }
    }
}

/// The main data structure that represents a concept map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptMap {
    title: String,
    description: String,
    concepts: Vec<Concept>,
    propositions: Vec<Proposition>,
}

impl ConceptMap {
    pub fn builder(title: impl Into<String>) -> ConceptMapBuilder {
        ConceptMapBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Slugified version of the title
    pub fn slug(&self) -> String {
        normalize(&self.title)
    }

    /// Concepts in the order they were first seen
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id.0)
    }

    pub fn concept_by_key(&self, key: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.key() == key)
    }

    pub fn concept_by_label(&self, label: &str) -> Option<&Concept> {
        self.concept_by_key(&normalize(label))
    }

    /// All propositions, resolved, in parse order
    pub fn propositions(&self) -> Vec<PropositionRef<'_>> {
        self.propositions.iter().map(|p| self.resolve(p)).collect()
    }

    pub fn proposition_count(&self) -> usize {
        self.propositions.len()
    }

    fn resolve<'a>(&'a self, p: &'a Proposition) -> PropositionRef<'a> {
        // Ids are only ever handed out by this map's own accumulator.
        PropositionRef {
            left: &self.concepts[p.left.0],
            predicate: &p.predicate,
            right: &self.concepts[p.right.0],
        }
    }

    fn filter<'a>(&'a self, pred: impl Fn(&PropositionRef<'a>) -> bool) -> Vec<PropositionRef<'a>> {
        self.propositions
            .iter()
            .map(|p| self.resolve(p))
            .filter(|p| pred(p))
            .collect()
    }

    /// Concepts at the other end of any proposition touching one of `concepts`.
    ///
    /// Each concept appears once, in the order it is first reached.
    pub fn related_concepts(&self, concepts: &[&Concept]) -> Vec<&Concept> {
        let keys = key_set(concepts);
        let mut seen = HashSet::new();
        let mut related = Vec::new();

        for p in self.propositions() {
            if keys.contains(&p.left.key()) && seen.insert(p.right.key()) {
                related.push(p.right);
            }
            if keys.contains(&p.right.key()) && seen.insert(p.left.key()) {
                related.push(p.left);
            }
        }

        related
    }

    pub fn has_key_concepts(&self) -> bool {
        self.concepts.iter().any(|c| c.is_key_concept)
    }

    /// Key concepts in declaration order
    pub fn key_concepts(&self) -> Vec<&Concept> {
        self.concepts.iter().filter(|c| c.is_key_concept).collect()
    }

    /// Propositions with either end in `concepts`, in parse order
    pub fn propositions_involving(&self, concepts: &[&Concept]) -> Vec<PropositionRef<'_>> {
        let keys = key_set(concepts);
        self.filter(|p| keys.contains(&p.left.key()) || keys.contains(&p.right.key()))
    }

    /// Propositions with both ends in `concepts`, in parse order
    pub fn propositions_connecting(&self, concepts: &[&Concept]) -> Vec<PropositionRef<'_>> {
        let keys = key_set(concepts);
        self.filter(|p| keys.contains(&p.left.key()) && keys.contains(&p.right.key()))
    }

    /// The propositions shown in the summary view: those joining two key
    /// concepts, or everything when the map declares no key concepts.
    pub fn summary_propositions(&self) -> Vec<PropositionRef<'_>> {
        if self.has_key_concepts() {
            self.propositions_connecting(&self.key_concepts())
        } else {
            self.propositions()
        }
    }
}

fn key_set(concepts: &[&Concept]) -> HashSet<String> {
    concepts.iter().map(|c| c.key()).collect()
}
