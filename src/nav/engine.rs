//! Navigation engine front-end
//!
//! Applies the pure transition under the per-user session lock and maps
//! the resulting screen to a render payload. Never returns an error: every
//! resolution path yields a payload.

use super::event::{NavEvent, SelectTarget};
use super::store::SessionStore;
use super::transition::{transition, Screen};
use crate::flow::FlowGraph;
use crate::render::{self, RenderPayload};
use std::sync::Arc;

/// Drives per-user navigation over a shared, read-only flow graph.
pub struct Navigator {
    graph: Arc<FlowGraph>,
    sessions: SessionStore,
}

impl Navigator {
    pub fn new(graph: Arc<FlowGraph>) -> Self {
        Self {
            graph,
            sessions: SessionStore::new(),
        }
    }

    /// Conversation start or restart: reset the session, show the entry node.
    pub async fn enter(&self, user_id: i64) -> RenderPayload {
        self.apply(user_id, NavEvent::Enter).await
    }

    /// The user chose an option.
    pub async fn select(&self, user_id: i64, target: SelectTarget) -> RenderPayload {
        self.apply(user_id, NavEvent::Select(target)).await
    }

    /// Free-text fallback: re-display the current screen.
    pub async fn resume(&self, user_id: i64) -> RenderPayload {
        self.apply(user_id, NavEvent::Resume).await
    }

    async fn apply(&self, user_id: i64, event: NavEvent) -> RenderPayload {
        let cell = self.sessions.get_or_create(user_id).await;
        let mut session = cell.lock().await;
        let result = transition(&self.graph, &session, event);
        tracing::debug!(user_id, screen = ?result.screen, "navigation transition");
        *session = result.session;
        // Critical section ends at the commit; no I/O happened inside it.
        drop(session);

        match result.screen {
            Screen::Node(id) => match self.graph.get(&id) {
                Some(node) => render::node(node),
                // Unreachable in practice: the transition verified the id.
                None => render::unavailable(),
            },
            Screen::Unavailable => render::unavailable(),
        }
    }

    #[cfg(test)]
    pub(crate) async fn session(&self, user_id: i64) -> super::Session {
        self.sessions.get_or_create(user_id).await.lock().await.clone()
    }
}
