//! Typed flow graph model

use super::loader::FlowError;
use std::collections::HashMap;

/// Reserved target string in the flow file that means "one step back".
///
/// Only the loader and the callback-token codec deal in this sentinel; the
/// typed model carries an explicit [`NodeOption::Back`] variant so a real
/// node id can never collide with it.
pub const BACK_SENTINEL: &str = "__back";

/// A selectable option on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOption {
    /// Opens an external resource; never changes session state.
    Link { label: String, url: String },
    /// Forward transition to another node.
    Goto { label: String, target: String },
    /// One step back through the history stack.
    Back { label: String },
}

/// A single menu screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    /// Display text; may be empty.
    pub text: String,
    /// Ordered as written in the flow file; determines rendering order.
    pub options: Vec<NodeOption>,
}

/// The whole menu graph. Immutable after construction.
///
/// An option `target` naming a missing node is deliberately NOT rejected
/// here; broken links are detected at navigation time and rendered as the
/// fixed "branch unavailable" screen.
#[derive(Debug)]
pub struct FlowGraph {
    start_node: String,
    nodes: HashMap<String, Node>,
}

impl FlowGraph {
    /// Build a graph from a node list, rejecting duplicate ids.
    pub fn new(start_node: impl Into<String>, nodes: Vec<Node>) -> Result<Self, FlowError> {
        let mut map = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if map.contains_key(&node.id) {
                return Err(FlowError::DuplicateNode(node.id));
            }
            map.insert(node.id.clone(), node);
        }
        Ok(Self {
            start_node: start_node.into(),
            nodes: map,
        })
    }

    /// The entry-point node id.
    pub fn start_node(&self) -> &str {
        &self.start_node
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
