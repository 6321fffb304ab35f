//! Response envelope and session payload shapes.
//!
//! Every HTTP response body is an [`ApiResponse`]. Session endpoints carry a
//! [`SessionPayload`], whose variant the caller picks explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wagate_core::session::Session;

/// Flattens a timestamp to Unix seconds, as a string.
pub fn unix_seconds(timestamp: &DateTime<Utc>) -> String {
    timestamp.timestamp().to_string()
}

/// Uniform response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T> From<wagate_core::Result<T>> for ApiResponse<T> {
    fn from(result: wagate_core::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::error(err.to_string()),
        }
    }
}

/// Response-facing view of a [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: String,
    pub name: String,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_jid: Option<String>,
    pub has_webhook: bool,
    pub webhook: String,
    pub events: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            name: session.name.clone(),
            connected: session.connected,
            device_jid: session.device_jid.clone(),
            has_webhook: session.has_webhook(),
            webhook: session.webhook_url.clone(),
            events: session.events.clone(),
            created_at: unix_seconds(&session.created_at),
            updated_at: unix_seconds(&session.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionList {
    pub sessions: Vec<SessionView>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub session_id: String,
    pub qr_code: String,
}

/// Payload variants returned by session endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionPayload {
    Single(SessionView),
    List(SessionList),
    Qr(QrCode),
}

impl SessionPayload {
    pub fn single(session: &Session) -> Self {
        Self::Single(SessionView::from(session))
    }

    pub fn list(sessions: &[Session]) -> Self {
        let sessions: Vec<SessionView> = sessions.iter().map(SessionView::from).collect();
        Self::List(SessionList {
            count: sessions.len(),
            sessions,
        })
    }

    pub fn qr(session_id: impl Into<String>, qr_code: impl Into<String>) -> Self {
        Self::Qr(QrCode {
            session_id: session_id.into(),
            qr_code: qr_code.into(),
        })
    }
}
