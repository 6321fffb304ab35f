//! Capability ports.
//!
//! Each port wraps one functional area of the underlying multi-device
//! protocol client. Orchestrators in the application layer hold a port and
//! never talk to the client directly. Every method takes the session ID the
//! operation runs under; JIDs are already normalized by the caller.

mod chat;
mod contact;
mod group;
mod message;
mod newsletter;

pub use chat::{ChatManager, ChatMessage, ChatPresence, ChatSummary};
pub use contact::{Contact, ContactCheck, ContactManager, ProfilePicture};
pub use group::{GroupInfo, GroupManager, GroupParticipant, ParticipantAction, ParticipantChange};
pub use message::{MessageSender, SentMessage};
pub use newsletter::{NewsletterInfo, NewsletterManager, NewsletterMessage};
