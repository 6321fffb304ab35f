//! Error types for the WAGate gateway core.

use thiserror::Error;

/// A shared error type for the entire gateway core.
///
/// Errors are classified by origin: lookups that found nothing, local input
/// validation, collaborator failures (repository or protocol client), and
/// features that are deliberately unavailable. Orchestrators add operation
/// context with [`ResultExt::context`] without losing the underlying cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WagateError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Caller input rejected before any collaborator was called
    #[error("Validation error: {0}")]
    Validation(String),

    /// Feature intentionally left unimplemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Failure reported by the protocol client behind a capability port
    #[error("Client error: {0}")]
    Client(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WagateError>,
    },
}

impl WagateError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a NotImplemented error
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented(feature.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Client error
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Wraps this error with an operation-identifying message.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Returns the innermost error, skipping every `Context` layer.
    pub fn root_cause(&self) -> &WagateError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// Check if this is (or wraps) a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), Self::NotFound { .. })
    }

    /// Check if this is (or wraps) a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self.root_cause(), Self::Validation(_))
    }

    /// Check if this is (or wraps) a NotImplemented error
    pub fn is_not_implemented(&self) -> bool {
        matches!(self.root_cause(), Self::NotImplemented(_))
    }
}

/// Adds operation context to fallible collaborator calls.
pub trait ResultExt<T> {
    /// Wraps the error, if any, as `"<context>: <error>"`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|err| err.with_context(context))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for WagateError {
    fn from(err: std::io::Error) -> Self {
        Self::DataAccess(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for WagateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization failed: {}", err))
    }
}

impl From<toml::de::Error> for WagateError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid TOML: {}", err))
    }
}

impl From<toml::ser::Error> for WagateError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(format!("failed to render TOML: {}", err))
    }
}

/// A type alias for `Result<T, WagateError>`.
pub type Result<T> = std::result::Result<T, WagateError>;
