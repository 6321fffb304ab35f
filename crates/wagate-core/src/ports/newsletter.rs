//! Newsletter (channel) management port.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterInfo {
    pub jid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub subscriber_count: u64,
    /// Viewer role, e.g. `owner`, `subscriber`
    #[serde(default)]
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterMessage {
    pub server_id: String,
    #[serde(default)]
    pub body: Option<String>,
    pub views: u64,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait NewsletterManager: Send + Sync {
    async fn create_newsletter(
        &self,
        session_id: &str,
        name: &str,
        description: &str,
    ) -> Result<NewsletterInfo>;

    async fn list_subscribed(&self, session_id: &str) -> Result<Vec<NewsletterInfo>>;

    async fn get_newsletter_info(&self, session_id: &str, jid: &str) -> Result<NewsletterInfo>;

    async fn follow(&self, session_id: &str, jid: &str) -> Result<()>;

    async fn unfollow(&self, session_id: &str, jid: &str) -> Result<()>;

    async fn get_messages(
        &self,
        session_id: &str,
        jid: &str,
        count: i32,
        before_id: Option<&str>,
    ) -> Result<Vec<NewsletterMessage>>;
}
