//! Webhook configuration use case.

use crate::session::SessionLocks;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wagate_core::event::event_catalog;
use wagate_core::session::SessionRepository;
use wagate_core::Result;

/// A session's webhook endpoint and subscribed events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub webhook: String,
    pub events: Vec<String>,
}

/// Use case for reading and writing a session's webhook configuration.
///
/// Updates to the same session are serialized through [`SessionLocks`] so
/// that two concurrent `set_webhook` calls cannot interleave their
/// read-modify-write sequences. [`WebhookApp::without_locking`] drops that
/// guarantee and lets the last `update` win.
pub struct WebhookApp {
    repository: Arc<dyn SessionRepository>,
    locks: Option<Arc<SessionLocks>>,
}

impl WebhookApp {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            locks: Some(Arc::new(SessionLocks::new())),
        }
    }

    /// Builds an instance whose updates are not serialized per session.
    pub fn without_locking(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            locks: None,
        }
    }

    /// Sets the webhook endpoint and event subscription of a session.
    ///
    /// The URL is validated before the event list is touched; on a
    /// validation failure nothing is persisted. Both fields are written with
    /// a single `update`. If that update fails the stored session is left as
    /// it was.
    pub async fn set_webhook(
        &self,
        session_id: &str,
        url: &str,
        events: Vec<String>,
    ) -> Result<WebhookConfig> {
        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(session_id).await),
            None => None,
        };

        let mut session = self.repository.get_by_id(session_id).await?;
        session.set_webhook_url(url)?;
        session.set_events(events);

        if let Err(err) = self.repository.update(&session).await {
            tracing::warn!("[WebhookApp] Failed to persist webhook for {}: {}", session_id, err);
            return Err(err.with_context("failed to update webhook"));
        }
        tracing::info!(
            "[WebhookApp] Webhook for {} set to '{}' ({} events)",
            session_id,
            session.webhook_url,
            session.events.len()
        );

        Ok(WebhookConfig {
            webhook: session.webhook_url,
            events: session.events,
        })
    }

    /// Returns the session's webhook endpoint.
    ///
    /// The event list in the result is always empty; the stored
    /// subscription is not read back.
    pub async fn get_webhook(&self, session_id: &str) -> Result<WebhookConfig> {
        let session = self.repository.get_by_id(session_id).await?;

        Ok(WebhookConfig {
            webhook: session.webhook_url,
            events: Vec::new(),
        })
    }

    /// Lists every event name a webhook can subscribe to.
    pub fn list_events(&self) -> &'static [&'static str] {
        event_catalog()
    }
}
