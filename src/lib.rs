//! Flowpad - flow-builder core for message flows
//!
//! The logic behind a visual flow builder: an in-memory node/edge graph,
//! the validity rules gating edge creation and save eligibility, and an
//! event-driven editor session for a canvas shell to drive.

pub mod catalog;
pub mod editor;
pub mod error;
pub mod event;
pub mod flow;
pub mod journal;
pub mod notice;
pub mod types;
pub mod validate;

pub use catalog::{NodeCatalog, NodeTemplate, TEXT_NODE};
pub use editor::{ConnectOutcome, Editor, Panel, SAVE_BLOCKED_MESSAGE, SAVE_OK_MESSAGE};
pub use error::{FixSuggestion, FlowError};
pub use event::{ConnectRequest, EditorEvent};
pub use flow::{Edge, FlowGraph, Node, NodeData, Position};
pub use journal::{Action, ActionJournal, ActionKind};
pub use notice::{Notice, NoticeBoard, NoticeKind, NOTICE_TTL};
pub use types::{EdgeId, IdError, NodeId};
pub use validate::{can_add_edge, check_savable, SaveBlockReason, SaveCheck};
