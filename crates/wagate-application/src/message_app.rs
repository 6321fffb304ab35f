//! Message sending use case.

use crate::response::unix_seconds;
use crate::validation::{require_text, user_jid};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wagate_core::ports::{MessageSender, SentMessage};
use wagate_core::session::SessionRepository;
use wagate_core::{Result, ResultExt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextRequest {
    pub session_id: String,
    /// Phone number or full JID of the recipient
    pub phone: String,
    pub body: String,
    #[serde(default)]
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub session_id: String,
    pub message_id: String,
    pub to: String,
    /// Unix seconds
    pub timestamp: String,
}

impl SendMessageResponse {
    fn new(session_id: &str, to: String, sent: SentMessage) -> Self {
        Self {
            session_id: session_id.to_string(),
            message_id: sent.id,
            to,
            timestamp: unix_seconds(&sent.timestamp),
        }
    }
}

pub struct MessageApp {
    repository: Arc<dyn SessionRepository>,
    sender: Arc<dyn MessageSender>,
}

impl MessageApp {
    pub fn new(repository: Arc<dyn SessionRepository>, sender: Arc<dyn MessageSender>) -> Self {
        Self { repository, sender }
    }

    pub async fn send_text(&self, request: SendTextRequest) -> Result<SendMessageResponse> {
        require_text(&request.body, "body")?;
        let to = user_jid(&request.phone, "phone")?;
        let session = self.repository.get_by_id(&request.session_id).await?;

        let sent = self
            .sender
            .send_text(&session.id, &to, &request.body, request.reply_to.as_deref())
            .await
            .context("failed to send text message")?;
        tracing::debug!("[MessageApp] Sent {} to {} via {}", sent.id, to, session.id);

        Ok(SendMessageResponse::new(&session.id, to, sent))
    }

    /// Reacts to a message; an empty `emoji` removes an existing reaction.
    pub async fn react(
        &self,
        session_id: &str,
        phone: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<SendMessageResponse> {
        require_text(message_id, "message_id")?;
        let chat = user_jid(phone, "phone")?;
        let session = self.repository.get_by_id(session_id).await?;

        let sent = self
            .sender
            .send_reaction(&session.id, &chat, message_id, emoji)
            .await
            .context("failed to send reaction")?;

        Ok(SendMessageResponse::new(&session.id, chat, sent))
    }

    pub async fn delete_message(
        &self,
        session_id: &str,
        phone: &str,
        message_id: &str,
    ) -> Result<SendMessageResponse> {
        require_text(message_id, "message_id")?;
        let chat = user_jid(phone, "phone")?;
        let session = self.repository.get_by_id(session_id).await?;

        let sent = self
            .sender
            .delete_message(&session.id, &chat, message_id)
            .await
            .context("failed to delete message")?;
        tracing::info!("[MessageApp] Revoked {} in {}", message_id, chat);

        Ok(SendMessageResponse::new(&session.id, chat, sent))
    }
}
