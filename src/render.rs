//! Render adapter: turns nodes into transport-agnostic payloads
//!
//! The navigation core only ever produces [`RenderPayload`] values; the
//! Telegram layer decides how to put them on the wire.

use crate::flow::{Node, NodeOption, BACK_SENTINEL};

pub const UNAVAILABLE_TEXT: &str = "Sorry, this branch is temporarily unavailable.";
pub const UNRECOGNIZED_TEXT: &str = "Unfamiliar action.";

/// Displayable result of a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPayload {
    pub text: String,
    /// One pressable control per node option, in option order.
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

/// What pressing a button does, as far as the transport needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Open an external resource.
    Url(String),
    /// Report this opaque token back as a selected action.
    Callback(String),
}

/// Render a node. Transition targets are encoded as `go:<target>` tokens,
/// the scheme the dispatcher decodes on the way back in.
pub fn node(node: &Node) -> RenderPayload {
    let buttons = node
        .options
        .iter()
        .map(|opt| match opt {
            NodeOption::Link { label, url } => Button {
                label: label.clone(),
                action: ButtonAction::Url(url.clone()),
            },
            NodeOption::Goto { label, target } => Button {
                label: label.clone(),
                action: ButtonAction::Callback(format!("go:{target}")),
            },
            NodeOption::Back { label } => Button {
                label: label.clone(),
                action: ButtonAction::Callback(format!("go:{BACK_SENTINEL}")),
            },
        })
        .collect();
    RenderPayload {
        text: node.text.clone(),
        buttons,
    }
}

/// Fixed screen for any broken-link condition.
pub fn unavailable() -> RenderPayload {
    RenderPayload {
        text: UNAVAILABLE_TEXT.to_string(),
        buttons: Vec::new(),
    }
}

/// Fixed screen for an inbound action token of unknown shape.
pub fn unrecognized() -> RenderPayload {
    RenderPayload {
        text: UNRECOGNIZED_TEXT.to_string(),
        buttons: Vec::new(),
    }
}
