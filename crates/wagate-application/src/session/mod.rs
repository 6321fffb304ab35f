//! Session application services.
//!
//! Shared helpers used by the session-scoped orchestrators.

mod locks;

pub use locks::SessionLocks;
