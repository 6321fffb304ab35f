//! Group use case.
//!
//! Group arguments accept either a bare group ID or a full `@g.us` JID.
//! Participants accept phone numbers or full JIDs.

use crate::response::unix_seconds;
use crate::validation::{group_jid, require_text, user_jids};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wagate_core::ports::{
    GroupInfo, GroupManager, GroupParticipant, ParticipantAction, ParticipantChange,
};
use wagate_core::session::SessionRepository;
use wagate_core::{Result, ResultExt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub jid: String,
    pub name: String,
    pub topic: String,
    pub owner_jid: String,
    pub created_at: String,
    pub participants: Vec<GroupParticipant>,
    pub participant_count: usize,
}

impl From<GroupInfo> for GroupView {
    fn from(group: GroupInfo) -> Self {
        Self {
            created_at: unix_seconds(&group.created_at),
            participant_count: group.participants.len(),
            jid: group.jid,
            name: group.name,
            topic: group.topic,
            owner_jid: group.owner_jid,
            participants: group.participants,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListResponse {
    pub session_id: String,
    pub groups: Vec<GroupView>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUpdateResponse {
    pub group_jid: String,
    pub action: ParticipantAction,
    pub results: Vec<ParticipantChange>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLinkResponse {
    pub group_jid: String,
    pub link: String,
}

pub struct GroupApp {
    repository: Arc<dyn SessionRepository>,
    groups: Arc<dyn GroupManager>,
}

impl GroupApp {
    pub fn new(repository: Arc<dyn SessionRepository>, groups: Arc<dyn GroupManager>) -> Self {
        Self { repository, groups }
    }

    pub async fn create_group(
        &self,
        session_id: &str,
        name: &str,
        participants: Vec<String>,
    ) -> Result<GroupView> {
        require_text(name, "name")?;
        let participants = user_jids(&participants, "participants")?;
        let session = self.repository.get_by_id(session_id).await?;

        let group = self
            .groups
            .create_group(&session.id, name.trim(), &participants)
            .await
            .context("failed to create group")?;
        tracing::info!("[GroupApp] Created group {} for {}", group.jid, session.id);

        Ok(GroupView::from(group))
    }

    pub async fn list_groups(&self, session_id: &str) -> Result<GroupListResponse> {
        let session = self.repository.get_by_id(session_id).await?;

        let groups: Vec<GroupView> = self
            .groups
            .list_groups(&session.id)
            .await
            .context("failed to list groups")?
            .into_iter()
            .map(GroupView::from)
            .collect();

        Ok(GroupListResponse {
            session_id: session.id,
            count: groups.len(),
            groups,
        })
    }

    pub async fn get_group_info(&self, session_id: &str, group: &str) -> Result<GroupView> {
        let group_jid = group_jid(group)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.groups
            .get_group_info(&session.id, &group_jid)
            .await
            .context("failed to get group info")
            .map(GroupView::from)
    }

    pub async fn update_participants(
        &self,
        session_id: &str,
        group: &str,
        action: ParticipantAction,
        participants: Vec<String>,
    ) -> Result<ParticipantUpdateResponse> {
        let group_jid = group_jid(group)?;
        let participants = user_jids(&participants, "participants")?;
        let session = self.repository.get_by_id(session_id).await?;

        let results = self
            .groups
            .update_participants(&session.id, &group_jid, action, &participants)
            .await
            .context("failed to update group participants")?;
        tracing::info!(
            "[GroupApp] {} {} participants in {}",
            action,
            results.len(),
            group_jid
        );

        Ok(ParticipantUpdateResponse {
            group_jid,
            action,
            count: results.len(),
            results,
        })
    }

    pub async fn leave_group(&self, session_id: &str, group: &str) -> Result<()> {
        let group_jid = group_jid(group)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.groups
            .leave_group(&session.id, &group_jid)
            .await
            .context("failed to leave group")
    }

    /// Returns the invite link, revoking the previous one when `reset` is set.
    pub async fn get_invite_link(
        &self,
        session_id: &str,
        group: &str,
        reset: bool,
    ) -> Result<InviteLinkResponse> {
        let group_jid = group_jid(group)?;
        let session = self.repository.get_by_id(session_id).await?;

        let link = self
            .groups
            .get_invite_link(&session.id, &group_jid, reset)
            .await
            .context("failed to get group invite link")?;

        Ok(InviteLinkResponse { group_jid, link })
    }

    pub async fn set_name(&self, session_id: &str, group: &str, name: &str) -> Result<()> {
        require_text(name, "name")?;
        let group_jid = group_jid(group)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.groups
            .set_group_name(&session.id, &group_jid, name.trim())
            .await
            .context("failed to set group name")
    }

    /// Sets the group description; an empty topic clears it.
    pub async fn set_topic(&self, session_id: &str, group: &str, topic: &str) -> Result<()> {
        let group_jid = group_jid(group)?;
        let session = self.repository.get_by_id(session_id).await?;

        self.groups
            .set_group_topic(&session.id, &group_jid, topic)
            .await
            .context("failed to set group topic")
    }
}
