//! Group management port.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupParticipant {
    pub jid: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_super_admin: bool,
}

/// Group metadata as reported by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub jid: String,
    pub name: String,
    #[serde(default)]
    pub topic: String,
    pub owner_jid: String,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<GroupParticipant>,
}

/// Membership change to apply to a set of participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParticipantAction {
    Add,
    Remove,
    Promote,
    Demote,
}

/// Per-participant outcome of a membership change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantChange {
    pub jid: String,
    /// Status code returned by the server (200 on success)
    pub status: u16,
}

#[async_trait]
pub trait GroupManager: Send + Sync {
    async fn create_group(
        &self,
        session_id: &str,
        name: &str,
        participants: &[String],
    ) -> Result<GroupInfo>;

    async fn list_groups(&self, session_id: &str) -> Result<Vec<GroupInfo>>;

    async fn get_group_info(&self, session_id: &str, group_jid: &str) -> Result<GroupInfo>;

    async fn update_participants(
        &self,
        session_id: &str,
        group_jid: &str,
        action: ParticipantAction,
        participants: &[String],
    ) -> Result<Vec<ParticipantChange>>;

    async fn leave_group(&self, session_id: &str, group_jid: &str) -> Result<()>;

    /// Returns the invite link, revoking the old one first when `reset` is set.
    async fn get_invite_link(&self, session_id: &str, group_jid: &str, reset: bool)
    -> Result<String>;

    async fn set_group_name(&self, session_id: &str, group_jid: &str, name: &str) -> Result<()>;

    async fn set_group_topic(&self, session_id: &str, group_jid: &str, topic: &str)
    -> Result<()>;
}
