//! Pagination limits shared by the listing orchestrators.

/// Default page size for chat history.
pub const CHAT_HISTORY_DEFAULT_LIMIT: i32 = 50;
/// Default page size for contact listings.
pub const CONTACTS_DEFAULT_LIMIT: i32 = 100;
/// Default page size for newsletter messages.
pub const NEWSLETTER_MESSAGES_DEFAULT_LIMIT: i32 = 50;
/// Upper bound for every page size.
pub const MAX_LIMIT: i32 = 1000;

/// Clamps a caller-supplied page size.
///
/// Non-positive limits become `default`; limits above `max` become `max`.
/// Offsets are never clamped here.
pub fn clamp_limit(limit: i32, default: i32, max: i32) -> i32 {
    if limit <= 0 {
        default
    } else if limit > max {
        max
    } else {
        limit
    }
}
