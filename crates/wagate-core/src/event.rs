//! Webhook event catalog.
//!
//! The protocol client emits a fixed set of event kinds; webhooks subscribe to
//! them by name. The catalog is built once from [`EventType`] and shared
//! read-only for the lifetime of the process.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Grouping of event kinds, used when listing the catalog by area.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EventCategory {
    Connection,
    Pairing,
    Message,
    Receipt,
    Presence,
    Chat,
    Contact,
    Group,
    Newsletter,
    Call,
    Sync,
    Label,
    Special,
}

/// Every event name a session can subscribe to.
///
/// Declaration order is the catalog order. `All` subscribes to everything
/// and is always last.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum EventType {
    // Connection
    Connected,
    Disconnected,
    ConnectFailure,
    LoggedOut,
    StreamReplaced,
    StreamError,
    TemporaryBan,
    ClientOutdated,
    KeepAliveTimeout,
    KeepAliveRestored,
    ManualLoginReconnect,
    // Pairing
    #[strum(serialize = "QR")]
    #[serde(rename = "QR")]
    Qr,
    PairSuccess,
    PairError,
    QRScannedWithoutMultidevice,
    // Message
    Message,
    UndecryptableMessage,
    MediaRetry,
    // Receipt
    Receipt,
    ReadReceipt,
    // Presence
    Presence,
    ChatPresence,
    // Chat
    Archive,
    Pin,
    Mute,
    Star,
    DeleteForMe,
    DeleteChat,
    ClearChat,
    MarkChatAsRead,
    // Contact
    Contact,
    PushName,
    BusinessName,
    Picture,
    UserAbout,
    IdentityChange,
    Blocklist,
    PrivacySettings,
    // Group
    GroupInfo,
    JoinedGroup,
    // Newsletter
    NewsletterJoin,
    NewsletterLeave,
    NewsletterMuteChange,
    NewsletterLiveUpdate,
    // Call
    CallOffer,
    CallOfferNotice,
    CallAccept,
    CallPreAccept,
    CallReject,
    CallTerminate,
    CallRelayLatency,
    // Sync
    HistorySync,
    AppState,
    AppStateSyncComplete,
    OfflineSyncPreview,
    OfflineSyncCompleted,
    // Label
    LabelEdit,
    LabelAssociationChat,
    LabelAssociationMessage,
    // Special
    All,
}

impl EventType {
    /// Returns the wire name of the event.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns the category this event belongs to.
    pub fn category(self) -> EventCategory {
        use EventType::*;
        match self {
            Connected | Disconnected | ConnectFailure | LoggedOut | StreamReplaced
            | StreamError | TemporaryBan | ClientOutdated | KeepAliveTimeout
            | KeepAliveRestored | ManualLoginReconnect => EventCategory::Connection,
            Qr | PairSuccess | PairError | QRScannedWithoutMultidevice => EventCategory::Pairing,
            Message | UndecryptableMessage | MediaRetry => EventCategory::Message,
            Receipt | ReadReceipt => EventCategory::Receipt,
            Presence | ChatPresence => EventCategory::Presence,
            Archive | Pin | Mute | Star | DeleteForMe | DeleteChat | ClearChat
            | MarkChatAsRead => EventCategory::Chat,
            Contact | PushName | BusinessName | Picture | UserAbout | IdentityChange
            | Blocklist | PrivacySettings => EventCategory::Contact,
            GroupInfo | JoinedGroup => EventCategory::Group,
            NewsletterJoin | NewsletterLeave | NewsletterMuteChange | NewsletterLiveUpdate => {
                EventCategory::Newsletter
            }
            CallOffer | CallOfferNotice | CallAccept | CallPreAccept | CallReject
            | CallTerminate | CallRelayLatency => EventCategory::Call,
            HistorySync | AppState | AppStateSyncComplete | OfflineSyncPreview
            | OfflineSyncCompleted => EventCategory::Sync,
            LabelEdit | LabelAssociationChat | LabelAssociationMessage => EventCategory::Label,
            All => EventCategory::Special,
        }
    }
}

static EVENT_CATALOG: Lazy<Vec<&'static str>> =
    Lazy::new(|| EventType::iter().map(EventType::as_str).collect());

/// Returns the flat, ordered catalog of subscribable event names.
pub fn event_catalog() -> &'static [&'static str] {
    EVENT_CATALOG.as_slice()
}

/// Returns the event names of a single category, in catalog order.
pub fn events_in(category: EventCategory) -> Vec<&'static str> {
    EventType::iter()
        .filter(|event| event.category() == category)
        .map(EventType::as_str)
        .collect()
}
