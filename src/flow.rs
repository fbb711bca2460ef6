//! Flow graph: the immutable menu definition
//!
//! Loaded once at startup and shared read-only for the process lifetime.

mod loader;
mod model;

pub use loader::FlowError;
pub use model::{FlowGraph, Node, NodeOption, BACK_SENTINEL};
