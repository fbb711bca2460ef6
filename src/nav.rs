//! Navigation state machine
//!
//! The behavioral heart of the bot: a pure transition function over
//! per-user sessions, fronted by an async engine that serializes
//! same-user operations.

mod engine;
mod event;
mod session;
mod store;
mod transition;

#[cfg(test)]
mod proptests;

pub use engine::Navigator;
pub use event::{NavEvent, SelectTarget};
pub use session::Session;
pub use store::SessionStore;
pub use transition::{transition, Screen, TransitionResult};
