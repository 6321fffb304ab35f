//! Message sending port.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acknowledgement of a message accepted by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends a text message, optionally quoting `reply_to`.
    async fn send_text(
        &self,
        session_id: &str,
        to_jid: &str,
        body: &str,
        reply_to: Option<&str>,
    ) -> Result<SentMessage>;

    /// Reacts to a message. An empty emoji removes the reaction.
    async fn send_reaction(
        &self,
        session_id: &str,
        chat_jid: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<SentMessage>;

    /// Revokes a previously sent message for everyone.
    async fn delete_message(
        &self,
        session_id: &str,
        chat_jid: &str,
        message_id: &str,
    ) -> Result<SentMessage>;
}
