//! Application layer for WAGate.
//!
//! Orchestrators in this crate compose the session repository with one
//! capability port each. They normalize loose caller input, clamp
//! pagination, delegate to the port, and reshape the result into the
//! response types the HTTP layer serializes. None of them keeps state
//! between calls.

pub mod chat_app;
pub mod contact_app;
pub mod group_app;
pub mod message_app;
pub mod newsletter_app;
pub mod pagination;
pub mod response;
pub mod session;
pub mod session_app;
pub mod webhook_app;

mod validation;

#[cfg(test)]
mod test_support;

pub use chat_app::ChatApp;
pub use contact_app::ContactApp;
pub use group_app::GroupApp;
pub use message_app::MessageApp;
pub use newsletter_app::NewsletterApp;
pub use response::{ApiResponse, SessionPayload};
pub use session_app::SessionApp;
pub use webhook_app::WebhookApp;
