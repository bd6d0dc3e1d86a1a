//! Identifier newtypes for graph entities
//!
//! Guarantees:
//! - Non-empty
//! - Valid characters (alphanumeric, dash, underscore)
//! - Maximum 64 characters

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum allowed identifier length
pub const MAX_ID_LENGTH: usize = 64;

// Shared shape for node and edge identifiers. Canvas-generated ids are
// plain counters ("n1", "e1"), shell-supplied ids may be anything that
// fits this pattern.
static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

fn check_id(id: &str) -> Result<(), IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(IdError::TooLong(id.len()));
    }
    if !ID_RE.is_match(id) {
        return Err(IdError::InvalidCharacters(id.to_string()));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Identifier cannot be empty")]
    Empty,
    #[error("Identifier too long ({0} > {})", MAX_ID_LENGTH)]
    TooLong(usize),
    #[error("Identifier contains invalid characters: {0}")]
    InvalidCharacters(String),
}

/// Strongly-typed node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId with validation
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        check_id(&id)?;
        Ok(NodeId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NodeId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeId::new(s)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NodeId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Strongly-typed edge identifier
///
/// Same rules as [`NodeId`]; a separate type so the two cannot be mixed up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeId(String);

impl EdgeId {
    /// Create a new EdgeId with validation
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        check_id(&id)?;
        Ok(EdgeId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EdgeId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EdgeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeId::new(s)
    }
}

impl<'de> Deserialize<'de> for EdgeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EdgeId::new(raw).map_err(serde::de::Error::custom)
    }
}
