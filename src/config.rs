//! Graph configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// What to do when an edge's second endpoint belongs to another graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossGraphPolicy {
    /// Clone the foreign vertex into this graph and warn.
    #[default]
    Clone,
    /// Fail with `CrossGraphEdge`.
    Reject,
}

/// Per-graph configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Cross-graph endpoint policy
    pub cross_graph: CrossGraphPolicy,

    /// Journal warnings on the graph in addition to logging them
    pub record_warnings: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            cross_graph: CrossGraphPolicy::Clone,
            record_warnings: true,
        }
    }
}

impl GraphConfig {
    /// Parse from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Load from TOML file
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
