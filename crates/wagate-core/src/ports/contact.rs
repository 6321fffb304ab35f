//! Contact management port.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Whether a phone number is registered on WhatsApp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCheck {
    /// The query as sent to the server
    pub query: String,
    pub jid: String,
    pub is_registered: bool,
    #[serde(default)]
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub jid: String,
    #[serde(default)]
    pub push_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePicture {
    pub id: String,
    pub url: String,
    /// `image` or `preview`
    pub kind: String,
}

#[async_trait]
pub trait ContactManager: Send + Sync {
    async fn check_contacts(&self, session_id: &str, phones: &[String])
    -> Result<Vec<ContactCheck>>;

    async fn list_contacts(&self, session_id: &str, limit: i32, offset: i32)
    -> Result<Vec<Contact>>;

    async fn get_contact_info(&self, session_id: &str, jids: &[String]) -> Result<Vec<Contact>>;

    /// Returns `None` when the contact has no picture or hides it.
    async fn get_profile_picture(
        &self,
        session_id: &str,
        jid: &str,
        preview: bool,
    ) -> Result<Option<ProfilePicture>>;
}
