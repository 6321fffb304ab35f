//! Chat use case: history, chat list, read markers and typing state.

use crate::pagination::{CHAT_HISTORY_DEFAULT_LIMIT, MAX_LIMIT, clamp_limit};
use crate::response::unix_seconds;
use crate::validation::{require_items, user_jid};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wagate_core::jid::is_group_jid;
use wagate_core::ports::{ChatManager, ChatMessage, ChatPresence, ChatSummary};
use wagate_core::session::SessionRepository;
use wagate_core::{Result, ResultExt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetChatHistoryRequest {
    pub session_id: String,
    /// Phone number or full chat JID
    pub phone: String,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageView {
    pub id: String,
    pub sender_jid: String,
    pub from_me: bool,
    pub message_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub timestamp: String,
}

impl From<ChatMessage> for ChatMessageView {
    fn from(message: ChatMessage) -> Self {
        Self {
            timestamp: unix_seconds(&message.timestamp),
            id: message.id,
            sender_jid: message.sender_jid,
            from_me: message.from_me,
            message_type: message.message_type,
            body: message.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryResponse {
    pub session_id: String,
    pub chat_jid: String,
    pub messages: Vec<ChatMessageView>,
    pub count: usize,
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub jid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_group: bool,
    pub unread_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<String>,
    pub archived: bool,
    pub pinned: bool,
}

impl From<ChatSummary> for ChatView {
    fn from(chat: ChatSummary) -> Self {
        Self {
            is_group: is_group_jid(&chat.jid),
            last_message_at: chat.last_message_at.as_ref().map(unix_seconds),
            jid: chat.jid,
            name: chat.name,
            unread_count: chat.unread_count,
            archived: chat.archived,
            pinned: chat.pinned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatListResponse {
    pub session_id: String,
    pub chats: Vec<ChatView>,
    pub count: usize,
}

pub struct ChatApp {
    repository: Arc<dyn SessionRepository>,
    chats: Arc<dyn ChatManager>,
}

impl ChatApp {
    pub fn new(repository: Arc<dyn SessionRepository>, chats: Arc<dyn ChatManager>) -> Self {
        Self { repository, chats }
    }

    /// Returns one page of a chat's history.
    ///
    /// `limit` defaults to 50 and is capped at 1000; `offset` is passed
    /// through as given.
    pub async fn get_chat_history(
        &self,
        request: GetChatHistoryRequest,
    ) -> Result<ChatHistoryResponse> {
        let chat_jid = user_jid(&request.phone, "phone")?;
        let limit = clamp_limit(request.limit, CHAT_HISTORY_DEFAULT_LIMIT, MAX_LIMIT);
        let session = self.repository.get_by_id(&request.session_id).await?;

        let messages: Vec<ChatMessageView> = self
            .chats
            .get_chat_history(&session.id, &chat_jid, limit, request.offset)
            .await
            .context("failed to get chat history")?
            .into_iter()
            .map(ChatMessageView::from)
            .collect();

        Ok(ChatHistoryResponse {
            session_id: session.id,
            chat_jid,
            count: messages.len(),
            messages,
            limit,
            offset: request.offset,
        })
    }

    pub async fn list_chats(&self, session_id: &str) -> Result<ChatListResponse> {
        let session = self.repository.get_by_id(session_id).await?;

        let chats: Vec<ChatView> = self
            .chats
            .list_chats(&session.id)
            .await
            .context("failed to list chats")?
            .into_iter()
            .map(ChatView::from)
            .collect();

        Ok(ChatListResponse {
            session_id: session.id,
            count: chats.len(),
            chats,
        })
    }

    pub async fn mark_read(
        &self,
        session_id: &str,
        phone: &str,
        message_ids: Vec<String>,
    ) -> Result<()> {
        require_items(&message_ids, "message_ids")?;
        let chat_jid = user_jid(phone, "phone")?;
        let session = self.repository.get_by_id(session_id).await?;

        self.chats
            .mark_read(&session.id, &chat_jid, &message_ids)
            .await
            .context("failed to mark messages as read")
    }

    pub async fn send_presence(
        &self,
        session_id: &str,
        phone: &str,
        presence: ChatPresence,
    ) -> Result<()> {
        let chat_jid = user_jid(phone, "phone")?;
        let session = self.repository.get_by_id(session_id).await?;

        self.chats
            .send_presence(&session.id, &chat_jid, presence)
            .await
            .context("failed to send chat presence")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockChatManager, MockSessionRepository, SESSION_ID, named_session};
    use wagate_core::WagateError;

    fn fixture(history_len: usize) -> (ChatApp, Arc<MockChatManager>) {
        let repository = Arc::new(
            MockSessionRepository::new().with_session(named_session(SESSION_ID, "sales")),
        );
        let chats = Arc::new(MockChatManager {
            history_len,
            ..Default::default()
        });
        (ChatApp::new(repository, chats.clone()), chats)
    }

    fn history(phone: &str, limit: i32, offset: i32) -> GetChatHistoryRequest {
        GetChatHistoryRequest {
            session_id: SESSION_ID.to_string(),
            phone: phone.to_string(),
            limit,
            offset,
        }
    }

    #[tokio::test]
    async fn test_history_limit_clamping() {
        for (requested, effective) in [(0, 50), (5000, 1000), (10, 10)] {
            let (app, chats) = fixture(3);

            let response = app
                .get_chat_history(history("5511999999999", requested, 0))
                .await
                .unwrap();

            assert_eq!(response.limit, effective);
            assert_eq!(
                chats.recorder.calls(),
                vec![format!(
                    "get_chat_history:{},5511999999999@s.whatsapp.net,{},0",
                    SESSION_ID, effective
                )]
            );
        }
    }

    #[tokio::test]
    async fn test_history_phone_normalization() {
        let (app, chats) = fixture(0);
        app.get_chat_history(history("5511999999999", 10, 0)).await.unwrap();
        app.get_chat_history(history("5511999999999@g.us", 10, 0)).await.unwrap();

        let calls = chats.recorder.calls();
        assert!(calls[0].contains(",5511999999999@s.whatsapp.net,"));
        assert!(calls[1].contains(",5511999999999@g.us,"));
    }

    #[tokio::test]
    async fn test_history_response_shape() {
        let (app, _) = fixture(3);

        let response = app
            .get_chat_history(history("5511999999999", 10, -5))
            .await
            .unwrap();

        assert_eq!(response.count, 3);
        assert_eq!(response.messages.len(), 3);
        assert_eq!(response.offset, -5);
        assert_eq!(response.session_id, SESSION_ID);
        assert_eq!(response.chat_jid, "5511999999999@s.whatsapp.net");
        assert_eq!(response.messages[1].timestamp, "1700000001");
    }

    #[tokio::test]
    async fn test_history_error_is_wrapped() {
        let (app, chats) = fixture(0);
        chats
            .recorder
            .fail("get_chat_history", WagateError::client("not connected"));

        let err = app
            .get_chat_history(history("5511999999999", 10, 0))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to get chat history: Client error: not connected"
        );
    }

    #[tokio::test]
    async fn test_list_chats_marks_groups() {
        let (app, _) = fixture(0);

        let response = app.list_chats(SESSION_ID).await.unwrap();

        assert_eq!(response.count, 2);
        assert!(!response.chats[0].is_group);
        assert_eq!(response.chats[0].last_message_at.as_deref(), Some("1700000000"));
        assert!(response.chats[1].is_group);
        assert!(response.chats[1].last_message_at.is_none());
    }

    #[tokio::test]
    async fn test_mark_read_requires_ids() {
        let (app, chats) = fixture(0);

        let err = app
            .mark_read(SESSION_ID, "5511999999999", Vec::new())
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(chats.recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_send_presence() {
        let (app, chats) = fixture(0);

        app.send_presence(SESSION_ID, "5511999999999", ChatPresence::Composing)
            .await
            .unwrap();

        assert_eq!(
            chats.recorder.calls(),
            vec![format!(
                "send_presence:{},5511999999999@s.whatsapp.net,composing",
                SESSION_ID
            )]
        );
    }
}
