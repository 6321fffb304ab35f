//! Hand-written collaborators for orchestrator tests.
//!
//! Every mock records the calls it receives as `"method:arg,arg"` strings and
//! can be told to fail a given method.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use wagate_core::ports::{
    ChatManager, ChatMessage, ChatPresence, ChatSummary, Contact, ContactCheck, ContactManager,
    GroupInfo, GroupManager, GroupParticipant, MessageSender, NewsletterInfo, NewsletterManager,
    NewsletterMessage, ParticipantAction, ParticipantChange, ProfilePicture, SentMessage,
};
use wagate_core::session::{Session, SessionRepository};
use wagate_core::{Result, WagateError};

pub const SESSION_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

/// Shared call log and failure switchboard.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, WagateError>>,
}

impl Recorder {
    pub fn record(&self, method: &'static str, args: &[&str]) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", method, args.join(",")));
        match self.failures.lock().unwrap().get(method) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub fn fail(&self, method: &'static str, err: WagateError) {
        self.failures.lock().unwrap().insert(method, err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|call| call.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    pub fn called(&self, method: &str) -> bool {
        self.methods().iter().any(|m| m == method)
    }
}

pub fn named_session(id: &str, name: &str) -> Session {
    let mut session = Session::new(name).unwrap();
    session.id = id.to_string();
    session.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    session.updated_at = session.created_at;
    session
}

// ============================================================================
// Session repository
// ============================================================================

pub struct MockSessionRepository {
    pub recorder: Recorder,
    sessions: Mutex<Vec<Session>>,
    next_id: Mutex<String>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            recorder: Recorder::default(),
            sessions: Mutex::new(Vec::new()),
            next_id: Mutex::new("abc123".to_string()),
        }
    }

    pub fn with_session(self, session: Session) -> Self {
        self.sessions.lock().unwrap().push(session);
        self
    }

    pub fn with_next_id(self, id: &str) -> Self {
        *self.next_id.lock().unwrap() = id.to_string();
        self
    }

    pub fn stored(&self, id: &str) -> Option<Session> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn get_by_id(&self, id: &str) -> Result<Session> {
        self.recorder.record("get_by_id", &[id])?;
        self.stored(id)
            .ok_or_else(|| WagateError::not_found("session", id))
    }

    async fn get_by_name(&self, name: &str) -> Result<Session> {
        self.recorder.record("get_by_name", &[name])?;
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| WagateError::not_found("session", name))
    }

    async fn get_all(&self) -> Result<Vec<Session>> {
        self.recorder.record("get_all", &[])?;
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn create_with_generated_id(&self, session: &Session) -> Result<String> {
        self.recorder.record("create_with_generated_id", &[session.name.as_str()])?;
        let id = self.next_id.lock().unwrap().clone();
        let mut stored = session.clone();
        stored.id = id.clone();
        self.sessions.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn update(&self, session: &Session) -> Result<()> {
        self.recorder.record("update", &[session.id.as_str()])?;
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(WagateError::not_found("session", session.id.clone())),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.recorder.record("delete", &[id])?;
        self.sessions.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

// ============================================================================
// Capability ports
// ============================================================================

fn at(seconds: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

#[derive(Default)]
pub struct MockMessageSender {
    pub recorder: Recorder,
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn send_text(
        &self,
        session_id: &str,
        to_jid: &str,
        body: &str,
        reply_to: Option<&str>,
    ) -> Result<SentMessage> {
        self.recorder.record(
            "send_text",
            &[session_id, to_jid, body, reply_to.unwrap_or("-")],
        )?;
        Ok(SentMessage {
            id: "3EB0MSG".to_string(),
            timestamp: at(1_700_000_000),
        })
    }

    async fn send_reaction(
        &self,
        session_id: &str,
        chat_jid: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<SentMessage> {
        self.recorder
            .record("send_reaction", &[session_id, chat_jid, message_id, emoji])?;
        Ok(SentMessage {
            id: "3EB0REACT".to_string(),
            timestamp: at(1_700_000_001),
        })
    }

    async fn delete_message(
        &self,
        session_id: &str,
        chat_jid: &str,
        message_id: &str,
    ) -> Result<SentMessage> {
        self.recorder
            .record("delete_message", &[session_id, chat_jid, message_id])?;
        Ok(SentMessage {
            id: "3EB0REVOKE".to_string(),
            timestamp: at(1_700_000_002),
        })
    }
}

#[derive(Default)]
pub struct MockChatManager {
    pub recorder: Recorder,
    pub history_len: usize,
}

#[async_trait]
impl ChatManager for MockChatManager {
    async fn get_chat_history(
        &self,
        session_id: &str,
        chat_jid: &str,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<ChatMessage>> {
        self.recorder.record(
            "get_chat_history",
            &[session_id, chat_jid, limit.to_string().as_str(), offset.to_string().as_str()],
        )?;
        Ok((0..self.history_len)
            .map(|i| ChatMessage {
                id: format!("MSG{}", i),
                chat_jid: chat_jid.to_string(),
                sender_jid: chat_jid.to_string(),
                from_me: i % 2 == 0,
                message_type: "text".to_string(),
                body: Some(format!("hello {}", i)),
                timestamp: at(1_700_000_000 + i as i64),
            })
            .collect())
    }

    async fn list_chats(&self, session_id: &str) -> Result<Vec<ChatSummary>> {
        self.recorder.record("list_chats", &[session_id])?;
        Ok(vec![
            ChatSummary {
                jid: "5511999999999@s.whatsapp.net".to_string(),
                name: Some("Ana".to_string()),
                unread_count: 2,
                last_message_at: Some(at(1_700_000_000)),
                archived: false,
                pinned: true,
            },
            ChatSummary {
                jid: "120363001234567890@g.us".to_string(),
                name: None,
                unread_count: 0,
                last_message_at: None,
                archived: true,
                pinned: false,
            },
        ])
    }

    async fn mark_read(
        &self,
        session_id: &str,
        chat_jid: &str,
        message_ids: &[String],
    ) -> Result<()> {
        self.recorder
            .record("mark_read", &[session_id, chat_jid, message_ids.join("|").as_str()])
    }

    async fn send_presence(
        &self,
        session_id: &str,
        chat_jid: &str,
        presence: ChatPresence,
    ) -> Result<()> {
        self.recorder
            .record("send_presence", &[session_id, chat_jid, presence.to_string().as_str()])
    }
}

#[derive(Default)]
pub struct MockGroupManager {
    pub recorder: Recorder,
}

fn group(jid: &str, name: &str, participants: &[String]) -> GroupInfo {
    GroupInfo {
        jid: jid.to_string(),
        name: name.to_string(),
        topic: String::new(),
        owner_jid: "5511000000000@s.whatsapp.net".to_string(),
        created_at: at(1_690_000_000),
        participants: participants
            .iter()
            .map(|jid| GroupParticipant {
                jid: jid.clone(),
                is_admin: false,
                is_super_admin: false,
            })
            .collect(),
    }
}

#[async_trait]
impl GroupManager for MockGroupManager {
    async fn create_group(
        &self,
        session_id: &str,
        name: &str,
        participants: &[String],
    ) -> Result<GroupInfo> {
        self.recorder
            .record("create_group", &[session_id, name, participants.join("|").as_str()])?;
        Ok(group("120363001234567890@g.us", name, participants))
    }

    async fn list_groups(&self, session_id: &str) -> Result<Vec<GroupInfo>> {
        self.recorder.record("list_groups", &[session_id])?;
        Ok(vec![
            group("120363000000000001@g.us", "one", &[]),
            group("120363000000000002@g.us", "two", &[]),
        ])
    }

    async fn get_group_info(&self, session_id: &str, group_jid: &str) -> Result<GroupInfo> {
        self.recorder.record("get_group_info", &[session_id, group_jid])?;
        Ok(group(group_jid, "team", &["5511999999999@s.whatsapp.net".to_string()]))
    }

    async fn update_participants(
        &self,
        session_id: &str,
        group_jid: &str,
        action: ParticipantAction,
        participants: &[String],
    ) -> Result<Vec<ParticipantChange>> {
        self.recorder.record(
            "update_participants",
            &[session_id, group_jid, action.to_string().as_str(), participants.join("|").as_str()],
        )?;
        Ok(participants
            .iter()
            .map(|jid| ParticipantChange {
                jid: jid.clone(),
                status: 200,
            })
            .collect())
    }

    async fn leave_group(&self, session_id: &str, group_jid: &str) -> Result<()> {
        self.recorder.record("leave_group", &[session_id, group_jid])
    }

    async fn get_invite_link(
        &self,
        session_id: &str,
        group_jid: &str,
        reset: bool,
    ) -> Result<String> {
        self.recorder
            .record("get_invite_link", &[session_id, group_jid, reset.to_string().as_str()])?;
        Ok("https://chat.whatsapp.com/AbCdEf".to_string())
    }

    async fn set_group_name(&self, session_id: &str, group_jid: &str, name: &str) -> Result<()> {
        self.recorder
            .record("set_group_name", &[session_id, group_jid, name])
    }

    async fn set_group_topic(
        &self,
        session_id: &str,
        group_jid: &str,
        topic: &str,
    ) -> Result<()> {
        self.recorder
            .record("set_group_topic", &[session_id, group_jid, topic])
    }
}

#[derive(Default)]
pub struct MockContactManager {
    pub recorder: Recorder,
    pub contact_count: usize,
    pub has_picture: bool,
}

#[async_trait]
impl ContactManager for MockContactManager {
    async fn check_contacts(
        &self,
        session_id: &str,
        phones: &[String],
    ) -> Result<Vec<ContactCheck>> {
        self.recorder
            .record("check_contacts", &[session_id, phones.join("|").as_str()])?;
        Ok(phones
            .iter()
            .enumerate()
            .map(|(i, phone)| ContactCheck {
                query: phone.clone(),
                jid: format!("{}@s.whatsapp.net", phone),
                is_registered: i % 2 == 0,
                verified_name: None,
            })
            .collect())
    }

    async fn list_contacts(
        &self,
        session_id: &str,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Contact>> {
        self.recorder.record(
            "list_contacts",
            &[session_id, limit.to_string().as_str(), offset.to_string().as_str()],
        )?;
        Ok((0..self.contact_count)
            .map(|i| Contact {
                jid: format!("55110000000{}@s.whatsapp.net", i),
                push_name: Some(format!("contact {}", i)),
                full_name: None,
                business_name: None,
            })
            .collect())
    }

    async fn get_contact_info(&self, session_id: &str, jids: &[String]) -> Result<Vec<Contact>> {
        self.recorder
            .record("get_contact_info", &[session_id, jids.join("|").as_str()])?;
        Ok(jids
            .iter()
            .map(|jid| Contact {
                jid: jid.clone(),
                push_name: None,
                full_name: Some("Known".to_string()),
                business_name: None,
            })
            .collect())
    }

    async fn get_profile_picture(
        &self,
        session_id: &str,
        jid: &str,
        preview: bool,
    ) -> Result<Option<ProfilePicture>> {
        self.recorder.record(
            "get_profile_picture",
            &[session_id, jid, preview.to_string().as_str()],
        )?;
        Ok(self.has_picture.then(|| ProfilePicture {
            id: "1700000000".to_string(),
            url: "https://pps.whatsapp.net/v/pic.jpg".to_string(),
            kind: if preview { "preview" } else { "image" }.to_string(),
        }))
    }
}

#[derive(Default)]
pub struct MockNewsletterManager {
    pub recorder: Recorder,
    pub message_count: usize,
}

fn newsletter(jid: &str, name: &str) -> NewsletterInfo {
    NewsletterInfo {
        jid: jid.to_string(),
        name: name.to_string(),
        description: String::new(),
        subscriber_count: 42,
        role: Some("subscriber".to_string()),
        created_at: at(1_680_000_000),
    }
}

#[async_trait]
impl NewsletterManager for MockNewsletterManager {
    async fn create_newsletter(
        &self,
        session_id: &str,
        name: &str,
        description: &str,
    ) -> Result<NewsletterInfo> {
        self.recorder
            .record("create_newsletter", &[session_id, name, description])?;
        let mut info = newsletter("120363999@newsletter", name);
        info.description = description.to_string();
        info.role = Some("owner".to_string());
        info.subscriber_count = 0;
        Ok(info)
    }

    async fn list_subscribed(&self, session_id: &str) -> Result<Vec<NewsletterInfo>> {
        self.recorder.record("list_subscribed", &[session_id])?;
        Ok(vec![newsletter("120363111@newsletter", "news")])
    }

    async fn get_newsletter_info(&self, session_id: &str, jid: &str) -> Result<NewsletterInfo> {
        self.recorder.record("get_newsletter_info", &[session_id, jid])?;
        Ok(newsletter(jid, "news"))
    }

    async fn follow(&self, session_id: &str, jid: &str) -> Result<()> {
        self.recorder.record("follow", &[session_id, jid])
    }

    async fn unfollow(&self, session_id: &str, jid: &str) -> Result<()> {
        self.recorder.record("unfollow", &[session_id, jid])
    }

    async fn get_messages(
        &self,
        session_id: &str,
        jid: &str,
        count: i32,
        before_id: Option<&str>,
    ) -> Result<Vec<NewsletterMessage>> {
        self.recorder.record(
            "get_messages",
            &[session_id, jid, count.to_string().as_str(), before_id.unwrap_or("-")],
        )?;
        Ok((0..self.message_count)
            .map(|i| NewsletterMessage {
                server_id: (100 + i).to_string(),
                body: Some("update".to_string()),
                views: 10,
                timestamp: at(1_700_000_000),
            })
            .collect())
    }
}
