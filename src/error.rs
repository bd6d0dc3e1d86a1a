//! Error types with fix suggestions

use thiserror::Error;

use crate::types::{IdError, NodeId};

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<String>;
}

/// Failures of editor operations
///
/// Rejected edge proposals and blocked saves are NOT errors; they are
/// structured outcomes (`ConnectOutcome`, `SaveCheck`).
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Unknown node type: '{node_type}'")]
    UnknownNodeType {
        node_type: String,
        suggestions: Vec<String>,
    },

    #[error("No node with id '{0}'")]
    NodeNotFound(NodeId),

    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}

impl FixSuggestion for FlowError {
    fn fix_suggestion(&self) -> Option<String> {
        match self {
            FlowError::UnknownNodeType { suggestions, .. } => {
                if suggestions.is_empty() {
                    Some("Register the type in the palette catalog".to_string())
                } else {
                    Some(format!("Did you mean: {}?", suggestions.join(", ")))
                }
            }
            FlowError::NodeNotFound(_) => {
                Some("The node may have been removed; refresh the selection".to_string())
            }
            FlowError::InvalidId(_) => Some(format!(
                "Identifiers are alphanumeric with '-' or '_', at most {} characters",
                crate::types::MAX_ID_LENGTH
            )),
        }
    }
}
