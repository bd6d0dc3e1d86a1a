//! Editor session
//!
//! Owns the graph, the selection, the notice board, and the journal; the
//! interaction shell feeds it typed events and renders what it exposes.
//! Everything runs synchronously in the turn of the triggering event;
//! no suspension points, no I/O, no timers in here.

use tracing::{debug, warn};

use crate::catalog::NodeCatalog;
use crate::error::FlowError;
use crate::event::{ConnectRequest, EditorEvent};
use crate::flow::{Edge, FlowGraph, Node, NodeData, Position};
use crate::journal::{ActionJournal, ActionKind};
use crate::notice::{Notice, NoticeBoard};
use crate::types::{EdgeId, NodeId};
use crate::validate::{self, SaveCheck};

/// Notice text for an accepted save
pub const SAVE_OK_MESSAGE: &str = "Flow saved successfully!";
/// Notice text for a save blocked on multiple entry points
pub const SAVE_BLOCKED_MESSAGE: &str =
    "Cannot save Flow: More than one node has an empty target handle.";

/// Which side panel the shell should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// No selection: the draggable node palette
    Palette,
    /// A node is selected: its settings (text editor)
    Settings,
}

/// Outcome of a connect gesture
///
/// Rejections are normal outcomes, not errors; the shell ignores them
/// silently (they are journaled and logged at warn level).
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectOutcome {
    Added(EdgeId),
    /// The source already has an outgoing edge
    SourceOccupied,
    /// An endpoint id no longer resolves to a node
    UnknownEndpoint(NodeId),
}

impl ConnectOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, ConnectOutcome::Added(_))
    }
}

/// Single-threaded editor session over one flow graph
pub struct Editor {
    catalog: NodeCatalog,
    graph: FlowGraph,
    selection: Option<NodeId>,
    notices: NoticeBoard,
    journal: ActionJournal,
    node_seq: u64,
    edge_seq: u64,
}

impl Editor {
    /// Start a session with an empty canvas
    pub fn new(catalog: NodeCatalog) -> Self {
        Editor {
            catalog,
            graph: FlowGraph::new(),
            selection: None,
            notices: NoticeBoard::new(),
            journal: ActionJournal::new(),
            node_seq: 0,
            edge_seq: 0,
        }
    }

    /// Start a session with the default canvas: one message node
    pub fn seeded(catalog: NodeCatalog) -> Self {
        let mut editor = Self::new(catalog);
        let id = editor.next_node_id();
        editor.graph.nodes.push(Node {
            id,
            node_type: crate::catalog::TEXT_NODE.to_string(),
            position: Position::new(250.0, 5.0),
            data: NodeData {
                label: "Send Message".to_string(),
                text: "test message 1".to_string(),
            },
        });
        editor
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    pub fn journal(&self) -> &ActionJournal {
        &self.journal
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Mutable board access for the shell's dismiss sweep
    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// The selected node, resolved through the graph
    ///
    /// Selection is held by id, so edits are always visible here; there
    /// is no aliased node copy to go stale.
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.as_ref().and_then(|id| self.graph.get_node(id))
    }

    pub fn panel(&self) -> Panel {
        if self.selection.is_some() {
            Panel::Settings
        } else {
            Panel::Palette
        }
    }

    /// Dispatch one shell event
    ///
    /// Mirrors the canvas handlers: rejected proposals and drops of
    /// unknown types are swallowed here after being journaled/logged.
    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::PaletteDrop { node_type, position } => {
                let _ = self.add_node(&node_type, position);
            }
            EditorEvent::Connect(request) => {
                let _ = self.connect(request);
            }
            EditorEvent::NodeClicked { id } => {
                if self.select(&id).is_err() {
                    warn!(%id, "click on a node that no longer exists");
                }
            }
            EditorEvent::PaneClicked => self.clear_selection(),
            EditorEvent::TextEdited { id, text } => {
                if let Err(err) = self.edit_text(&id, &text) {
                    warn!(%err, "text edit dropped");
                }
            }
            EditorEvent::SaveRequested => {
                let _ = self.save();
            }
        }
    }

    /// Stamp a new node from the palette template at the drop position
    pub fn add_node(&mut self, node_type: &str, position: Position) -> Result<NodeId, FlowError> {
        let template = match self.catalog.template(node_type) {
            Some(t) => t.clone(),
            None => {
                let suggestions: Vec<String> = self
                    .catalog
                    .find_similar(node_type, 3)
                    .into_iter()
                    .map(String::from)
                    .collect();
                warn!(node_type, "ignoring drop of unknown node type");
                self.journal.record(ActionKind::DropIgnored {
                    node_type: node_type.to_string(),
                });
                return Err(FlowError::UnknownNodeType {
                    node_type: node_type.to_string(),
                    suggestions,
                });
            }
        };

        let id = self.next_node_id();
        debug!(%id, node_type, "node added");
        self.journal.record(ActionKind::NodeAdded {
            node_id: id.clone(),
            node_type: node_type.to_string(),
        });
        self.graph.nodes.push(Node {
            id: id.clone(),
            node_type: node_type.to_string(),
            position,
            data: NodeData {
                label: template.label,
                text: template.default_text,
            },
        });

        Ok(id)
    }

    /// Gate and apply a connect gesture
    pub fn connect(&mut self, request: ConnectRequest) -> ConnectOutcome {
        for endpoint in [&request.source, &request.target] {
            if !self.graph.contains_node(endpoint) {
                warn!(endpoint = %endpoint, "connect request references a missing node");
                return ConnectOutcome::UnknownEndpoint((*endpoint).clone());
            }
        }

        if !validate::can_add_edge(&self.graph, &request) {
            warn!(source = %request.source, "source already has an outgoing edge");
            self.journal.record(ActionKind::ConnectRejected {
                source: request.source.clone(),
                target: request.target.clone(),
            });
            return ConnectOutcome::SourceOccupied;
        }

        let id = self.next_edge_id();
        self.journal.record(ActionKind::ConnectAccepted {
            edge_id: id.clone(),
            source: request.source.clone(),
            target: request.target.clone(),
        });
        self.graph.edges.push(Edge {
            id: id.clone(),
            source: request.source,
            source_handle: request.source_handle,
            target: request.target,
            target_handle: request.target_handle,
        });

        ConnectOutcome::Added(id)
    }

    /// Select a node (shows the settings panel)
    pub fn select(&mut self, id: &NodeId) -> Result<(), FlowError> {
        if !self.graph.contains_node(id) {
            return Err(FlowError::NodeNotFound(id.clone()));
        }
        self.selection = Some(id.clone());
        self.journal
            .record(ActionKind::NodeSelected { node_id: id.clone() });
        Ok(())
    }

    /// Drop the selection (back to the palette)
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.journal.record(ActionKind::SelectionCleared);
        }
    }

    /// Replace a node's message body
    ///
    /// Builds a fresh record with the changed field and swaps it in
    /// positionally; the old record is never mutated in place.
    pub fn edit_text(&mut self, id: &NodeId, text: &str) -> Result<(), FlowError> {
        let index = self
            .graph
            .node_index(id)
            .ok_or_else(|| FlowError::NodeNotFound(id.clone()))?;

        let current = &self.graph.nodes[index];
        let updated = Node {
            id: current.id.clone(),
            node_type: current.node_type.clone(),
            position: current.position,
            data: NodeData {
                label: current.data.label.clone(),
                text: text.to_string(),
            },
        };
        self.graph.nodes[index] = updated;

        self.journal
            .record(ActionKind::TextEdited { node_id: id.clone() });
        Ok(())
    }

    /// Run the save check and post the matching notice
    pub fn save(&mut self) -> SaveCheck {
        let check = validate::check_savable(&self.graph);

        match check.reason {
            None => {
                self.notices.post(Notice::success(SAVE_OK_MESSAGE));
                self.journal.record(ActionKind::SaveAccepted {
                    node_count: self.graph.node_count(),
                    edge_count: self.graph.edge_count(),
                });
            }
            Some(reason) => {
                self.notices.post(Notice::error(SAVE_BLOCKED_MESSAGE));
                self.journal.record(ActionKind::SaveRejected {
                    reason: reason.to_string(),
                });
            }
        }

        check
    }

    fn next_node_id(&mut self) -> NodeId {
        self.node_seq += 1;
        NodeId::new(format!("n{}", self.node_seq)).expect("counter ids match the id grammar")
    }

    fn next_edge_id(&mut self) -> EdgeId {
        self.edge_seq += 1;
        EdgeId::new(format!("e{}", self.edge_seq)).expect("counter ids match the id grammar")
    }
}
