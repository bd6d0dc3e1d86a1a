//! Node palette catalog
//!
//! Maps a node type tag to the template used to stamp out new nodes on
//! drop. The registry can be loaded from a YAML rule file so palettes
//! stay portable; the built-in catalog matches the default palette.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Type tag of the default message node
pub const TEXT_NODE: &str = "textNode";

/// Template stamped onto a freshly dropped node
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeTemplate {
    /// Header label, e.g. "Send Message"
    pub label: String,
    /// Initial message body
    #[serde(default)]
    pub default_text: String,
}

/// Palette registry (from palette.yaml)
#[derive(Debug, Clone, Deserialize)]
pub struct NodeCatalog {
    pub version: String,
    pub description: String,
    /// Fast lookup: node_type -> template
    pub lookup: HashMap<String, NodeTemplate>,
}

impl NodeCatalog {
    /// The default palette: a single "Message" item
    pub fn builtin() -> Self {
        let mut lookup = HashMap::new();
        lookup.insert(
            TEXT_NODE.to_string(),
            NodeTemplate {
                label: "Send Message".to_string(),
                default_text: String::new(),
            },
        );

        NodeCatalog {
            version: "1.0".to_string(),
            description: "Built-in message palette".to_string(),
            lookup,
        }
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from a palette rule file
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette rules from {:?}", path))?;

        Self::from_yaml(&yaml).with_context(|| format!("Failed to parse palette rules from {:?}", path))
    }

    /// Get the template for a node type
    pub fn template(&self, node_type: &str) -> Option<&NodeTemplate> {
        self.lookup.get(node_type)
    }

    /// Check if a node type is registered
    pub fn is_known_type(&self, node_type: &str) -> bool {
        self.lookup.contains_key(node_type)
    }

    /// Find similar node types (for "did you mean?" suggestions)
    pub fn find_similar(&self, node_type: &str, max_results: usize) -> Vec<&str> {
        let lower = node_type.to_lowercase();
        self.lookup
            .keys()
            .filter(|k| k.to_lowercase().contains(&lower) || lower.contains(&k.to_lowercase()))
            .take(max_results)
            .map(|s| s.as_str())
            .collect()
    }

    /// Merge additional palette entries into the lookup table
    pub fn merge(&mut self, extra: HashMap<String, NodeTemplate>) {
        self.lookup.extend(extra);
    }
}

impl Default for NodeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
