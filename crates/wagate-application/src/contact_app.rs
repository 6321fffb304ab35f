//! Contact use case: registration checks, contact listing and profile data.

use crate::pagination::{CONTACTS_DEFAULT_LIMIT, MAX_LIMIT, clamp_limit};
use crate::validation::{require_items, user_jid, user_jids};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wagate_core::jid::is_blank_address;
use wagate_core::ports::{Contact, ContactCheck, ContactManager, ProfilePicture};
use wagate_core::session::SessionRepository;
use wagate_core::{Result, ResultExt, WagateError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckContactsResponse {
    pub session_id: String,
    pub results: Vec<ContactCheck>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsRequest {
    pub session_id: String,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListResponse {
    pub session_id: String,
    pub contacts: Vec<Contact>,
    pub count: usize,
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoResponse {
    pub session_id: String,
    pub contacts: Vec<Contact>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePictureResponse {
    pub jid: String,
    /// `None` when the contact has no picture or hides it
    pub picture: Option<ProfilePicture>,
}

pub struct ContactApp {
    repository: Arc<dyn SessionRepository>,
    contacts: Arc<dyn ContactManager>,
}

impl ContactApp {
    pub fn new(repository: Arc<dyn SessionRepository>, contacts: Arc<dyn ContactManager>) -> Self {
        Self {
            repository,
            contacts,
        }
    }

    /// Checks which phone numbers are registered on WhatsApp.
    ///
    /// Either every number gets a result or the whole call fails.
    pub async fn check_contacts(
        &self,
        session_id: &str,
        phones: Vec<String>,
    ) -> Result<CheckContactsResponse> {
        require_items(&phones, "phones")?;
        if let Some(bad) = phones.iter().find(|phone| is_blank_address(phone)) {
            return Err(WagateError::validation(format!(
                "phone '{}' is not a phone number",
                bad
            )));
        }
        let phones: Vec<String> = phones.iter().map(|phone| phone.trim().to_string()).collect();
        let session = self.repository.get_by_id(session_id).await?;

        let results = self
            .contacts
            .check_contacts(&session.id, &phones)
            .await
            .context("failed to check contacts")?;

        Ok(CheckContactsResponse {
            session_id: session.id,
            count: results.len(),
            results,
        })
    }

    /// Lists synced contacts; `limit` defaults to 100 and is capped at 1000.
    pub async fn list_contacts(&self, request: ListContactsRequest) -> Result<ContactListResponse> {
        let limit = clamp_limit(request.limit, CONTACTS_DEFAULT_LIMIT, MAX_LIMIT);
        let session = self.repository.get_by_id(&request.session_id).await?;

        let contacts = self
            .contacts
            .list_contacts(&session.id, limit, request.offset)
            .await
            .context("failed to list contacts")?;

        Ok(ContactListResponse {
            session_id: session.id,
            count: contacts.len(),
            contacts,
            limit,
            offset: request.offset,
        })
    }

    pub async fn get_contact_info(
        &self,
        session_id: &str,
        phones: Vec<String>,
    ) -> Result<ContactInfoResponse> {
        let jids = user_jids(&phones, "phones")?;
        let session = self.repository.get_by_id(session_id).await?;

        let contacts = self
            .contacts
            .get_contact_info(&session.id, &jids)
            .await
            .context("failed to get contact info")?;

        Ok(ContactInfoResponse {
            session_id: session.id,
            count: contacts.len(),
            contacts,
        })
    }

    pub async fn get_profile_picture(
        &self,
        session_id: &str,
        phone: &str,
        preview: bool,
    ) -> Result<ProfilePictureResponse> {
        let jid = user_jid(phone, "phone")?;
        let session = self.repository.get_by_id(session_id).await?;

        let picture = self
            .contacts
            .get_profile_picture(&session.id, &jid, preview)
            .await
            .context("failed to get profile picture")?;

        Ok(ProfilePictureResponse { jid, picture })
    }
}
