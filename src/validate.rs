//! Flow validity rules
//!
//! Two pure predicates over a graph snapshot: gate edge creation and
//! compute save eligibility. Both are total, synchronous, and free of
//! side effects; callers decide what to do with a rejection.
//!
//! Deliberately NOT checked here: cycles, unreachable subgraphs, and
//! self-loops. The save gate only bounds the number of entry points.

use std::fmt;

use crate::event::ConnectRequest;
use crate::flow::FlowGraph;

/// Why a save attempt was blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveBlockReason {
    /// More than one node has no incoming edge
    MultipleEntryPoints,
}

impl fmt::Display for SaveBlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveBlockReason::MultipleEntryPoints => write!(f, "multiple entry points"),
        }
    }
}

/// Outcome of a save-eligibility check
///
/// A blocked save is a structured result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveCheck {
    pub ok: bool,
    pub reason: Option<SaveBlockReason>,
}

impl SaveCheck {
    pub const fn savable() -> Self {
        SaveCheck { ok: true, reason: None }
    }

    pub const fn blocked(reason: SaveBlockReason) -> Self {
        SaveCheck {
            ok: false,
            reason: Some(reason),
        }
    }

    #[inline]
    pub fn is_savable(&self) -> bool {
        self.ok
    }
}

/// May the proposed edge be added?
///
/// False iff the proposal's source already sources an edge. Each node
/// represents a single message-send action with one outgoing path, so
/// branching is disallowed. In-degree is not constrained.
pub fn can_add_edge(graph: &FlowGraph, proposed: &ConnectRequest) -> bool {
    !graph.has_outgoing(&proposed.source)
}

/// Is the current graph eligible for saving?
///
/// A graph of at most one node is trivially savable. Otherwise the flow
/// must not have more than one entry point (node with no incoming edge).
/// Zero entry points is accepted: the rule bounds only the upper end.
pub fn check_savable(graph: &FlowGraph) -> SaveCheck {
    if graph.node_count() <= 1 {
        return SaveCheck::savable();
    }

    if graph.entry_points().len() > 1 {
        SaveCheck::blocked(SaveBlockReason::MultipleEntryPoints)
    } else {
        SaveCheck::savable()
    }
}
