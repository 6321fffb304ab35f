//! Chat management port.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A stored message in a chat's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub chat_jid: String,
    pub sender_jid: String,
    pub from_me: bool,
    /// Message kind as reported by the client (`text`, `image`, ...)
    pub message_type: String,
    #[serde(default)]
    pub body: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// One entry of the chat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub jid: String,
    #[serde(default)]
    pub name: Option<String>,
    pub unread_count: u32,
    #[serde(default)]
    pub last_message_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
}

/// Typing indicator states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatPresence {
    Composing,
    Recording,
    Paused,
}

#[async_trait]
pub trait ChatManager: Send + Sync {
    async fn get_chat_history(
        &self,
        session_id: &str,
        chat_jid: &str,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<ChatMessage>>;

    async fn list_chats(&self, session_id: &str) -> Result<Vec<ChatSummary>>;

    async fn mark_read(&self, session_id: &str, chat_jid: &str, message_ids: &[String])
    -> Result<()>;

    async fn send_presence(
        &self,
        session_id: &str,
        chat_jid: &str,
        presence: ChatPresence,
    ) -> Result<()>;
}
