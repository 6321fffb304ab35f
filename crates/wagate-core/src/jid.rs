//! JID (WhatsApp address) helpers.
//!
//! A JID has the form `<user>@<server>`. Callers of the gateway often pass
//! bare phone numbers or bare group/newsletter IDs; these helpers turn such
//! loose input into the canonical form the capability ports expect. Anything
//! that already contains `@` is treated as a full JID and left alone.

/// Server suffix for individual users.
pub const USER_SERVER: &str = "s.whatsapp.net";
/// Server suffix for groups.
pub const GROUP_SERVER: &str = "g.us";
/// Server suffix for newsletters (channels).
pub const NEWSLETTER_SERVER: &str = "newsletter";

/// Normalizes a phone number into a user JID.
///
/// Input containing `@` is returned unchanged. Otherwise every non-digit
/// character (`+`, spaces, dashes) is dropped and `@s.whatsapp.net` appended.
///
/// ```
/// use wagate_core::jid::normalize_phone_jid;
///
/// assert_eq!(normalize_phone_jid("5511999999999"), "5511999999999@s.whatsapp.net");
/// assert_eq!(normalize_phone_jid("5511999999999@g.us"), "5511999999999@g.us");
/// ```
pub fn normalize_phone_jid(input: &str) -> String {
    normalize_with_server(input, USER_SERVER, |c| c.is_ascii_digit())
}

/// Normalizes a bare group ID (e.g. `120363001234567890`) into a group JID.
pub fn normalize_group_jid(input: &str) -> String {
    normalize_with_server(input, GROUP_SERVER, |c| c.is_ascii_digit() || c == '-')
}

/// Normalizes a bare newsletter ID into a newsletter JID.
pub fn normalize_newsletter_jid(input: &str) -> String {
    normalize_with_server(input, NEWSLETTER_SERVER, |c| c.is_ascii_digit())
}

/// Returns true when the JID addresses a group.
pub fn is_group_jid(jid: &str) -> bool {
    server_of(jid) == Some(GROUP_SERVER)
}

/// Returns true when the JID addresses a newsletter.
pub fn is_newsletter_jid(jid: &str) -> bool {
    server_of(jid) == Some(NEWSLETTER_SERVER)
}

/// Returns true when normalization would produce a JID with an empty user part.
pub fn is_blank_address(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.contains('@') {
        return trimmed.starts_with('@');
    }
    !trimmed.chars().any(|c| c.is_ascii_digit())
}

fn server_of(jid: &str) -> Option<&str> {
    jid.split_once('@').map(|(_, server)| server)
}

fn normalize_with_server(input: &str, server: &str, keep: impl Fn(char) -> bool) -> String {
    let trimmed = input.trim();
    if trimmed.contains('@') {
        return trimmed.to_string();
    }
    let user: String = trimmed.chars().filter(|c| keep(*c)).collect();
    format!("{}@{}", user, server)
}
