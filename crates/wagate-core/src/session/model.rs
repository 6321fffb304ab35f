//! Session domain model.
//!
//! A session is one WhatsApp account registration tracked by the gateway.
//! It is addressable both by its generated ID and by the caller-chosen name.

use crate::error::{Result, WagateError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum length of a session name, in characters.
pub const MAX_SESSION_NAME_LEN: usize = 100;

/// Represents a gateway session in the domain layer.
///
/// Device linkage (`device_jid`, `qr_code`, `connected`) is owned by the
/// protocol client; the gateway core reads these fields but never changes
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned identifier (UUID format); empty until persisted
    pub id: String,
    /// Human-readable, caller-assigned name
    pub name: String,
    /// Webhook endpoint, empty when no webhook is configured
    #[serde(default)]
    pub webhook_url: String,
    /// Subscribed webhook event names
    #[serde(default)]
    pub events: Vec<String>,
    /// Linked device JID, once paired
    #[serde(default)]
    pub device_jid: Option<String>,
    /// Pending pairing QR code
    #[serde(default)]
    pub qr_code: Option<String>,
    /// Whether the device connection is currently up
    #[serde(default)]
    pub connected: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new, not yet persisted session.
    ///
    /// The ID is left blank for the repository to generate. The name is
    /// trimmed and must be non-empty, at most [`MAX_SESSION_NAME_LEN`]
    /// characters, and made of ASCII alphanumerics, `-`, `_`, `.` or spaces.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        validate_name(name)?;

        let now = Utc::now();
        Ok(Self {
            id: String::new(),
            name: name.to_string(),
            webhook_url: String::new(),
            events: Vec::new(),
            device_jid: None,
            qr_code: None,
            connected: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validates and sets the webhook endpoint.
    ///
    /// An empty string clears the webhook. Anything else must be an absolute
    /// `http` or `https` URL with a host. On failure the session is unchanged.
    pub fn set_webhook_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            self.webhook_url.clear();
            self.touch();
            return Ok(());
        }

        let parsed = Url::parse(url)
            .map_err(|e| WagateError::validation(format!("invalid webhook URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(WagateError::validation(format!(
                "webhook URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(WagateError::validation(format!(
                "webhook URL '{}' has no host",
                url
            )));
        }

        self.webhook_url = url.to_string();
        self.touch();
        Ok(())
    }

    /// Replaces the subscribed event list.
    ///
    /// Names are stored verbatim and are not checked against the catalog.
    pub fn set_events(&mut self, events: Vec<String>) {
        self.events = events;
        self.touch();
    }

    /// Returns true when a webhook endpoint is configured.
    pub fn has_webhook(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(WagateError::validation("session name must not be empty"));
    }
    if name.chars().count() > MAX_SESSION_NAME_LEN {
        return Err(WagateError::validation(format!(
            "session name must be at most {} characters",
            MAX_SESSION_NAME_LEN
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ')))
    {
        return Err(WagateError::validation(format!(
            "session name contains invalid character '{}'",
            bad
        )));
    }
    Ok(())
}
