//! Domain layer for WAGate.
//!
//! Holds the session model and its repository contract, the capability-port
//! traits that front the multi-device protocol client, the webhook event
//! catalog, JID helpers, configuration model, and the shared error type.

pub mod config;
pub mod error;
pub mod event;
pub mod jid;
pub mod ports;
pub mod session;

// Re-export common error type
pub use error::{Result, ResultExt, WagateError};
