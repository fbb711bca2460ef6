//! Keyed session storage with per-user serialized access

use super::session::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Process-wide session map, keyed by Telegram user id.
///
/// Each session sits behind its own `Mutex`. Holding that lock across a
/// read-transition-commit keeps two rapid actions from the same user from
/// interleaving (e.g. both popping a depth-1 history), while distinct
/// users never contend beyond the map access itself.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<i64, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand back the user's session cell, creating an empty one (no
    /// current node, empty history) on first touch.
    pub async fn get_or_create(&self, user_id: i64) -> Arc<Mutex<Session>> {
        if let Some(cell) = self.inner.read().await.get(&user_id) {
            return Arc::clone(cell);
        }
        let mut map = self.inner.write().await;
        Arc::clone(map.entry(user_id).or_default())
    }
}
