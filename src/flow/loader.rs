//! YAML loader for the flow definition
//!
//! The file shape mirrors the raw DTOs below; conversion into the typed
//! model resolves the `__back` sentinel and validates structure. Any load
//! failure is fatal to process startup.

use super::model::{FlowGraph, Node, NodeOption, BACK_SENTINEL};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors on the flow load path.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("cannot read flow definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed flow definition: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),
    #[error("option `{label}` on node `{node}` has neither `url` nor `target`")]
    InvalidOption { node: String, label: String },
}

fn default_start_node() -> String {
    "welcome".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFlow {
    #[serde(default = "default_start_node")]
    start_node: String,
    #[serde(default)]
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    #[serde(default)]
    label: String,
    url: Option<String>,
    target: Option<String>,
}

impl RawOption {
    /// `url` wins when both are present, matching the original file format.
    fn into_option(self, node_id: &str) -> Result<NodeOption, FlowError> {
        let RawOption { label, url, target } = self;
        if let Some(url) = url {
            return Ok(NodeOption::Link { label, url });
        }
        match target {
            Some(target) if target == BACK_SENTINEL => Ok(NodeOption::Back { label }),
            Some(target) => Ok(NodeOption::Goto { label, target }),
            None => Err(FlowError::InvalidOption {
                node: node_id.to_string(),
                label,
            }),
        }
    }
}

impl RawNode {
    fn into_node(self) -> Result<Node, FlowError> {
        let options = self
            .options
            .into_iter()
            .map(|opt| opt.into_option(&self.id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node {
            id: self.id,
            text: self.text,
            options,
        })
    }
}

impl FlowGraph {
    /// Read and parse the flow definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    /// Parse a flow definition from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self, FlowError> {
        let raw: RawFlow = serde_yaml::from_str(source)?;
        let nodes = raw
            .nodes
            .into_iter()
            .map(RawNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(raw.start_node, nodes)
    }
}
