//! Append-only journal of editor actions
//!
//! The diagnostic sink for the session: every accepted and rejected
//! mutation lands here in order. This is an audit trail, not undo;
//! nothing replays it into graph state.
//! - Action: envelope with id + timestamp + kind
//! - ActionJournal: thread-safe, append-only log

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{EdgeId, NodeId};

/// Single entry in the session journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Monotonic sequence ID (for ordering)
    pub id: u64,
    /// Time since session start (ms)
    pub timestamp_ms: u64,
    /// What happened
    pub kind: ActionKind,
}

/// All journaled action types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    NodeAdded {
        node_id: NodeId,
        node_type: String,
    },
    /// A drop named a type the palette does not know; the drop was ignored
    DropIgnored {
        node_type: String,
    },
    ConnectAccepted {
        edge_id: EdgeId,
        source: NodeId,
        target: NodeId,
    },
    /// The source already had an outgoing edge; the proposal was dropped
    ConnectRejected {
        source: NodeId,
        target: NodeId,
    },
    NodeSelected {
        node_id: NodeId,
    },
    SelectionCleared,
    TextEdited {
        node_id: NodeId,
    },
    SaveAccepted {
        node_count: usize,
        edge_count: usize,
    },
    SaveRejected {
        reason: String,
    },
}

impl ActionKind {
    /// Extract the primary node if the action concerns one
    pub fn node_id(&self) -> Option<&NodeId> {
        match self {
            Self::NodeAdded { node_id, .. }
            | Self::NodeSelected { node_id }
            | Self::TextEdited { node_id } => Some(node_id),
            Self::ConnectAccepted { source, .. } | Self::ConnectRejected { source, .. } => {
                Some(source)
            }
            Self::DropIgnored { .. }
            | Self::SelectionCleared
            | Self::SaveAccepted { .. }
            | Self::SaveRejected { .. } => None,
        }
    }

    /// Check if this entry records a rejected proposal
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::DropIgnored { .. } | Self::ConnectRejected { .. } | Self::SaveRejected { .. }
        )
    }
}

/// Thread-safe, append-only action journal
#[derive(Clone)]
pub struct ActionJournal {
    entries: Arc<RwLock<Vec<Action>>>,
    start_time: Instant,
    next_id: Arc<AtomicU64>,
}

impl ActionJournal {
    /// Create a new journal (call at session start)
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            start_time: Instant::now(),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an action (returns its sequence id)
    pub fn record(&self, kind: ActionKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let action = Action {
            id,
            timestamp_ms: self.start_time.elapsed().as_millis() as u64,
            kind,
        };

        self.entries.write().push(action); // parking_lot: no unwrap needed
        id
    }

    /// Get all entries (cloned)
    pub fn entries(&self) -> Vec<Action> {
        self.entries.read().clone()
    }

    /// Filter entries by node ID
    pub fn filter_node(&self, node_id: &NodeId) -> Vec<Action> {
        self.entries()
            .into_iter()
            .filter(|a| a.kind.node_id() == Some(node_id))
            .collect()
    }

    /// Rejected proposals only
    pub fn rejections(&self) -> Vec<Action> {
        self.entries()
            .into_iter()
            .filter(|a| a.kind.is_rejection())
            .collect()
    }

    /// Serialize to JSON for debugging
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self.entries()).unwrap_or(Value::Null)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ActionJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ActionJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionJournal")
            .field("len", &self.len())
            .finish()
    }
}
