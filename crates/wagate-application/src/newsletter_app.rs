//! Newsletter (channel) use case.

use crate::pagination::{MAX_LIMIT, NEWSLETTER_MESSAGES_DEFAULT_LIMIT, clamp_limit};
use crate::response::unix_seconds;
use crate::validation::{newsletter_jid, require_text};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wagate_core::ports::{NewsletterInfo, NewsletterManager, NewsletterMessage};
use wagate_core::session::SessionRepository;
use wagate_core::{Result, ResultExt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterView {
    pub jid: String,
    pub name: String,
    pub description: String,
    pub subscriber_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub created_at: String,
}

impl From<NewsletterInfo> for NewsletterView {
    fn from(info: NewsletterInfo) -> Self {
        Self {
            created_at: unix_seconds(&info.created_at),
            jid: info.jid,
            name: info.name,
            description: info.description,
            subscriber_count: info.subscriber_count,
            role: info.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterListResponse {
    pub session_id: String,
    pub newsletters: Vec<NewsletterView>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNewsletterMessagesRequest {
    pub session_id: String,
    /// Bare newsletter ID or full `@newsletter` JID
    pub newsletter: String,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub before_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterMessageView {
    pub server_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub views: u64,
    pub timestamp: String,
}

impl From<NewsletterMessage> for NewsletterMessageView {
    fn from(message: NewsletterMessage) -> Self {
        Self {
            timestamp: unix_seconds(&message.timestamp),
            server_id: message.server_id,
            body: message.body,
            views: message.views,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterMessagesResponse {
    pub session_id: String,
    pub newsletter_jid: String,
    pub messages: Vec<NewsletterMessageView>,
    pub count: usize,
    pub limit: i32,
}

pub struct NewsletterApp {
    repository: Arc<dyn SessionRepository>,
    newsletters: Arc<dyn NewsletterManager>,
}

impl NewsletterApp {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        newsletters: Arc<dyn NewsletterManager>,
    ) -> Self {
        Self {
            repository,
            newsletters,
        }
    }

    pub async fn create_newsletter(
        &self,
        session_id: &str,
        name: &str,
        description: &str,
    ) -> Result<NewsletterView> {
        require_text(name, "name")?;
        let session = self.repository.get_by_id(session_id).await?;

        let info = self
            .newsletters
            .create_newsletter(&session.id, name.trim(), description)
            .await
            .context("failed to create newsletter")?;
        tracing::info!("[NewsletterApp] Created newsletter {} for {}", info.jid, session.id);

        Ok(NewsletterView::from(info))
    }

    pub async fn list_subscribed(&self, session_id: &str) -> Result<NewsletterListResponse> {
        let session = self.repository.get_by_id(session_id).await?;

        let newsletters: Vec<NewsletterView> = self
            .newsletters
            .list_subscribed(&session.id)
            .await
            .context("failed to list newsletters")?
            .into_iter()
            .map(NewsletterView::from)
            .collect();

        Ok(NewsletterListResponse {
            session_id: session.id,
            count: newsletters.len(),
            newsletters,
        })
    }

    pub async fn get_info(&self, session_id: &str, newsletter: &str) -> Result<NewsletterView> {
        let jid = newsletter_jid(newsletter)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.newsletters
            .get_newsletter_info(&session.id, &jid)
            .await
            .context("failed to get newsletter info")
            .map(NewsletterView::from)
    }

    pub async fn follow(&self, session_id: &str, newsletter: &str) -> Result<()> {
        let jid = newsletter_jid(newsletter)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.newsletters
            .follow(&session.id, &jid)
            .await
            .context("failed to follow newsletter")
    }

    pub async fn unfollow(&self, session_id: &str, newsletter: &str) -> Result<()> {
        let jid = newsletter_jid(newsletter)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.newsletters
            .unfollow(&session.id, &jid)
            .await
            .context("failed to unfollow newsletter")
    }

    /// Returns recent newsletter posts; `count` defaults to 50, max 1000.
    pub async fn get_messages(
        &self,
        request: GetNewsletterMessagesRequest,
    ) -> Result<NewsletterMessagesResponse> {
        let jid = newsletter_jid(&request.newsletter)?;
        let limit = clamp_limit(request.count, NEWSLETTER_MESSAGES_DEFAULT_LIMIT, MAX_LIMIT);
        let session = self.repository.get_by_id(&request.session_id).await?;

        let messages: Vec<NewsletterMessageView> = self
            .newsletters
            .get_messages(&session.id, &jid, limit, request.before_id.as_deref())
            .await
            .context("failed to get newsletter messages")?
            .into_iter()
            .map(NewsletterMessageView::from)
            .collect();

        Ok(NewsletterMessagesResponse {
            session_id: session.id,
            newsletter_jid: jid,
            count: messages.len(),
            messages,
            limit,
        })
    }
}
