//! Flow graph data model
//!
//! Nodes and edges live in order-preserving, append-only lists; the
//! accessors here are the scans the validity rules are built from.

use std::collections::HashSet;

use crate::types::{EdgeId, NodeId};

/// Canvas position of a node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }
}

/// Display payload of a node: header label plus the editable message body
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub label: String,
    pub text: String,
}

/// A unit of the flow representing one message-send action
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Tag identifying the rendering/behavior variant (palette catalog key)
    pub node_type: String,
    pub position: Position,
    pub data: NodeData,
}

/// Directed connection from one node's output handle to another's input
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub source_handle: Option<String>,
    pub target: NodeId,
    pub target_handle: Option<String>,
}

/// The in-memory graph: node set plus edge set
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Positional index of a node (for whole-record replacement)
    pub fn node_index(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| &n.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    /// Set of all ids that appear as an edge target
    pub fn edge_targets(&self) -> HashSet<&NodeId> {
        self.edges.iter().map(|e| &e.target).collect()
    }

    /// Nodes with no incoming edge (candidate flow entry points)
    pub fn entry_points(&self) -> Vec<&Node> {
        let targets = self.edge_targets();
        self.nodes
            .iter()
            .filter(|n| !targets.contains(&n.id))
            .collect()
    }

    /// Whether a node already sources an edge
    pub fn has_outgoing(&self, id: &NodeId) -> bool {
        self.edges.iter().any(|e| &e.source == id)
    }
}
