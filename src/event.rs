//! Typed interaction events
//!
//! The canvas shell constructs these and feeds them to the editor. The
//! drop payload carries `{node_type, position}` explicitly; there is no
//! ambient transfer channel between the palette and the drop handler.

use crate::flow::Position;
use crate::types::NodeId;

/// Proposed edge from a connect gesture
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectRequest {
    pub source: NodeId,
    pub source_handle: Option<String>,
    pub target: NodeId,
    pub target_handle: Option<String>,
}

impl ConnectRequest {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        ConnectRequest {
            source,
            source_handle: None,
            target,
            target_handle: None,
        }
    }

    /// Attach the sub-port ids the gesture started and ended on
    pub fn with_handles(
        mut self,
        source_handle: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        self.source_handle = Some(source_handle.into());
        self.target_handle = Some(target_handle.into());
        self
    }
}

/// One user interaction, delivered by the shell in event order
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A palette item was dropped onto the canvas
    PaletteDrop { node_type: String, position: Position },
    /// A drag-connect gesture completed
    Connect(ConnectRequest),
    NodeClicked { id: NodeId },
    PaneClicked,
    /// The settings panel changed a node's message body
    TextEdited { id: NodeId, text: String },
    SaveRequested,
}
