//! Session resolution and lifecycle use case.
//!
//! Callers address sessions either by generated ID or by name. `SessionApp`
//! resolves such an identifier with one repository round trip in the common
//! case, falling back to the other namespace only when the first lookup fails.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use wagate_core::session::{Session, SessionRepository};
use wagate_core::{Result, ResultExt, WagateError};

static UUID_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern is a valid regex")
});

/// Returns true when `identifier` has the canonical 8-4-4-4-12 hex UUID shape.
pub fn looks_like_session_id(identifier: &str) -> bool {
    UUID_SHAPE.is_match(identifier)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Id,
    Name,
}

/// Use case for resolving, creating and deleting sessions.
pub struct SessionApp {
    repository: Arc<dyn SessionRepository>,
}

impl SessionApp {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Resolves an identifier that may be either a session ID or a name.
    ///
    /// UUID-shaped identifiers are looked up by ID first, everything else by
    /// name first. If the first lookup fails for any reason the other one is
    /// tried, and its error is the one returned when both fail.
    pub async fn get_session(&self, identifier: &str) -> Result<Session> {
        let (first, fallback) = if looks_like_session_id(identifier) {
            (Lookup::Id, Lookup::Name)
        } else {
            (Lookup::Name, Lookup::Id)
        };

        match self.lookup(first, identifier).await {
            Ok(session) => Ok(session),
            Err(err) => {
                tracing::debug!(
                    "[SessionApp] {:?} lookup for '{}' failed ({}), trying {:?}",
                    first,
                    identifier,
                    err,
                    fallback
                );
                self.lookup(fallback, identifier).await
            }
        }
    }

    async fn lookup(&self, kind: Lookup, identifier: &str) -> Result<Session> {
        match kind {
            Lookup::Id => self.repository.get_by_id(identifier).await,
            Lookup::Name => self.repository.get_by_name(identifier).await,
        }
    }

    /// Returns every session, in whatever order the repository yields.
    pub async fn get_all_sessions(&self) -> Result<Vec<Session>> {
        self.repository
            .get_all()
            .await
            .context("failed to list sessions")
    }

    /// Creates and persists a session, returning the stored record.
    ///
    /// The record is re-read by its generated ID; if that read fails the
    /// whole operation fails even though the session was created.
    pub async fn create_session_with_request(&self, name: &str) -> Result<Session> {
        let session = Session::new(name)?;

        let id = self
            .repository
            .create_with_generated_id(&session)
            .await
            .context("failed to create session")?;
        tracing::info!("[SessionApp] Created session '{}' with ID {}", session.name, id);

        self.repository
            .get_by_id(&id)
            .await
            .context(format!("failed to load created session {}", id))
    }

    /// Deletes a session by ID. Dependent resources are not cleaned up here.
    pub async fn delete_session(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await?;
        tracing::info!("[SessionApp] Deleted session {}", id);
        Ok(())
    }

    /// Always fails: no index from device JID to session exists.
    pub async fn get_session_by_device_jid(&self, device_jid: &str) -> Result<Session> {
        tracing::warn!(
            "[SessionApp] Lookup by device JID '{}' requested but not supported",
            device_jid
        );
        Err(WagateError::not_implemented("session lookup by device JID"))
    }

    /// Returns the pending pairing QR code of a session.
    ///
    /// Fails with `NotFound` when the session is already connected or no QR
    /// code has been issued yet.
    pub async fn get_qr_code(&self, identifier: &str) -> Result<String> {
        let session = self.get_session(identifier).await?;
        match session.qr_code {
            Some(code) if !session.connected && !code.is_empty() => Ok(code),
            _ => Err(WagateError::not_found("qr_code", session.id)),
        }
    }
}
