//! Graph intermediate representation handed to render backends.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::direction::Direction;

/// Style classes every diagram declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    Concept,
    ConceptRounded,
    Predicate,
}

impl StyleClass {
    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::Concept => "concept",
            StyleClass::ConceptRounded => "concept-rounded",
            StyleClass::Predicate => "predicate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Text,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Text => "text",
        }
    }
}

/// Defaults applied to every node of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDefinition {
    pub class: StyleClass,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

pub static CLASS_TABLE: [ClassDefinition; 3] = [
    ClassDefinition {
        class: StyleClass::Concept,
        height: 32,
        shape: None,
        border_radius: None,
    },
    ClassDefinition {
        class: StyleClass::ConceptRounded,
        height: 32,
        shape: None,
        border_radius: Some(8),
    },
    ClassDefinition {
        class: StyleClass::Predicate,
        height: 32,
        shape: Some(Shape::Text),
        border_radius: None,
    },
];

/// Concepts and predicates live in separate id namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Concept,
    Predicate,
}

impl NodeKind {
    /// Every edge joins a concept and a predicate, so one end fixes the other
    pub fn other(&self) -> NodeKind {
        match self {
            NodeKind::Concept => NodeKind::Predicate,
            NodeKind::Predicate => NodeKind::Concept,
        }
    }
}

/// Per-node style overrides. `None` leaves the class default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

impl NodeStyle {
    pub fn is_empty(&self) -> bool {
        self.italic.is_none() && self.bold.is_none() && self.underline.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub class: StyleClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "NodeStyle::is_empty")]
    pub style: NodeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Directed edge between two node ids. The target is of the other kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub source_kind: NodeKind,
    pub target: String,
}

impl Edge {
    pub fn target_kind(&self) -> NodeKind {
        self.source_kind.other()
    }
}

/// A diagram ready for rendering: nodes and edges in insertion order, with no
/// duplicate node ids within a kind and no duplicate edges. A concept and a
/// predicate may share an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphIr {
    direction: Direction,
    classes: &'static [ClassDefinition],
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    #[serde(skip)]
    concept_index: HashMap<String, usize>,
    #[serde(skip)]
    predicate_index: HashMap<String, usize>,
    #[serde(skip)]
    edge_set: HashSet<Edge>,
}

impl GraphIr {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            classes: &CLASS_TABLE,
            nodes: Vec::new(),
            edges: Vec::new(),
            concept_index: HashMap::new(),
            predicate_index: HashMap::new(),
            edge_set: HashSet::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn classes(&self) -> &'static [ClassDefinition] {
        self.classes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn index(&self, kind: NodeKind) -> &HashMap<String, usize> {
        match kind {
            NodeKind::Concept => &self.concept_index,
            NodeKind::Predicate => &self.predicate_index,
        }
    }

    pub fn node(&self, kind: NodeKind, id: &str) -> Option<&Node> {
        self.index(kind).get(id).map(|&i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, kind: NodeKind, id: &str) -> Option<&mut Node> {
        let position = self.index(kind).get(id).copied()?;
        self.nodes.get_mut(position)
    }

    pub fn concept(&self, id: &str) -> Option<&Node> {
        self.node(NodeKind::Concept, id)
    }

    pub fn concept_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.node_mut(NodeKind::Concept, id)
    }

    pub fn predicate(&self, id: &str) -> Option<&Node> {
        self.node(NodeKind::Predicate, id)
    }

    pub fn contains_node(&self, kind: NodeKind, id: &str) -> bool {
        self.index(kind).contains_key(id)
    }

    pub fn has_edge(&self, source_kind: NodeKind, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source_kind == source_kind && e.source == source && e.target == target)
    }

    /// Add a concept node, or restyle the existing one with the same id.
    pub fn upsert_concept(&mut self, id: &str, label: &str, class: StyleClass) {
        if let Some(node) = self.concept_mut(id) {
            node.class = class;
            node.label = label.to_string();
            return;
        }

        self.push_node(Node {
            id: id.to_string(),
            label: label.to_string(),
            kind: NodeKind::Concept,
            class,
            shape: None,
            style: NodeStyle::default(),
            link: None,
        });
    }

    /// Add a predicate node unless one with the same id already exists.
    pub fn ensure_predicate(&mut self, id: &str, label: &str, italic: bool) {
        if self.contains_node(NodeKind::Predicate, id) {
            return;
        }

        self.push_node(Node {
            id: id.to_string(),
            label: label.to_string(),
            kind: NodeKind::Predicate,
            class: StyleClass::Predicate,
            shape: Some(Shape::Text),
            style: NodeStyle {
                italic: Some(italic),
                bold: Some(false),
                underline: None,
            },
            link: None,
        });
    }

    /// Add an edge from a node of `source_kind` to a node of the other kind.
    /// Returns false if the exact edge is already present.
    pub fn push_edge(&mut self, source_kind: NodeKind, source: &str, target: &str) -> bool {
        let edge = Edge {
            source: source.to_string(),
            source_kind,
            target: target.to_string(),
        };

        if !self.edge_set.insert(edge.clone()) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    fn push_node(&mut self, node: Node) {
        let position = self.nodes.len();
        match node.kind {
            NodeKind::Concept => self.concept_index.insert(node.id.clone(), position),
            NodeKind::Predicate => self.predicate_index.insert(node.id.clone(), position),
        };
        self.nodes.push(node);
    }
}
