//! Process-local `SessionRepository`.
//!
//! Sessions live only as long as the repository. Used by the CLI and by the
//! application layer's integration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;
use wagate_core::session::{Session, SessionRepository};
use wagate_core::{Result, WagateError};

#[derive(Default)]
struct Store {
    sessions: HashMap<String, Session>,
    /// IDs in creation order
    order: Vec<String>,
}

impl Store {
    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.sessions
            .values()
            .any(|s| s.name == name && Some(s.id.as_str()) != except_id)
    }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    store: RwLock<Store>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_by_id(&self, id: &str) -> Result<Session> {
        self.store
            .read()
            .await
            .sessions
            .get(id)
            .cloned()
            .ok_or_else(|| WagateError::not_found("session", id))
    }

    async fn get_by_name(&self, name: &str) -> Result<Session> {
        self.store
            .read()
            .await
            .sessions
            .values()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| WagateError::not_found("session", name))
    }

    async fn get_all(&self) -> Result<Vec<Session>> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.sessions.get(id).cloned())
            .collect())
    }

    async fn create_with_generated_id(&self, session: &Session) -> Result<String> {
        let mut store = self.store.write().await;
        if store.name_taken(&session.name, None) {
            return Err(WagateError::validation(format!(
                "session name '{}' is already in use",
                session.name
            )));
        }

        let id = Uuid::new_v4().to_string();
        let mut stored = session.clone();
        stored.id = id.clone();
        store.sessions.insert(id.clone(), stored);
        store.order.push(id.clone());
        tracing::debug!("[InMemorySessionRepository] Stored session {}", id);

        Ok(id)
    }

    async fn update(&self, session: &Session) -> Result<()> {
        let mut store = self.store.write().await;
        if !store.sessions.contains_key(&session.id) {
            return Err(WagateError::not_found("session", session.id.clone()));
        }
        if store.name_taken(&session.name, Some(&session.id)) {
            return Err(WagateError::validation(format!(
                "session name '{}' is already in use",
                session.name
            )));
        }
        store.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.write().await;
        if store.sessions.remove(id).is_none() {
            return Err(WagateError::not_found("session", id));
        }
        store.order.retain(|existing| existing != id);
        Ok(())
    }
}
