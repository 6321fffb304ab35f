//! Session repository trait.
//!
//! Defines the interface for session persistence operations.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing session persistence.
///
/// This trait decouples the gateway core from the storage mechanism. The
/// repository exclusively owns persisted state; callers only hold the
/// transient copies returned per call.
///
/// # Implementation Notes
///
/// Implementations must be safe for concurrent use. A missing session is
/// reported as `Err(WagateError::NotFound { .. })`, never as a default value.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its generated ID.
    async fn get_by_id(&self, id: &str) -> Result<Session>;

    /// Finds a session by its human-readable name.
    async fn get_by_name(&self, name: &str) -> Result<Session>;

    /// Lists every stored session, in repository-defined order.
    async fn get_all(&self) -> Result<Vec<Session>>;

    /// Persists a new session and returns the ID generated for it.
    ///
    /// The `id` field of the argument is ignored.
    async fn create_with_generated_id(&self, session: &Session) -> Result<String>;

    /// Overwrites the stored copy of an existing session.
    async fn update(&self, session: &Session) -> Result<()>;

    /// Deletes a session by ID.
    async fn delete(&self, id: &str) -> Result<()>;
}
