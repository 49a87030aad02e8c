//! Session domain entities

use crate::directory::entities::LawyerRecord;
use serde::{Deserialize, Serialize};

/// Originator of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    System,
}

/// A single entry in the session log (Entity)
///
/// Append-only: once pushed onto a session a message is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Lawyer records attached to a recommendation message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<LawyerRecord>,
    /// Provenance tag reported by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            details: Vec::new(),
            source: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            details: Vec::new(),
            source: None,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::System,
            text: text.into(),
            details: Vec::new(),
            source: None,
        }
    }

    pub fn with_details(mut self, details: Vec<LawyerRecord>) -> Self {
        self.details = details;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// An in-memory chat session (Entity)
///
/// Owns the ordered message log and the two in-flight request flags.
/// User messages are appended synchronously on submit; bot and system
/// messages only after the corresponding gateway call settles, so the log
/// reflects response arrival order. Each flag is set when its request
/// starts and must be cleared on every exit path, success or failure.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    processing: bool,
    uploading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// A question request is in flight.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// A document upload is in flight.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Submit controls are gated while either request is in flight.
    pub fn is_busy(&self) -> bool {
        self.processing || self.uploading
    }

    pub fn begin_processing(&mut self) {
        self.processing = true;
    }

    pub fn finish_processing(&mut self) {
        self.processing = false;
    }

    pub fn begin_upload(&mut self) {
        self.uploading = true;
    }

    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_append_order() {
        let mut session = ChatSession::new();
        session.push(Message::user("What is a will?"));
        session.push(Message::bot("A will is..."));
        session.push(Message::system("PDF processed successfully (3 chunks)"));

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::System]);
        assert_eq!(session.last_message().unwrap().sender, Sender::System);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut session = ChatSession::new();
        assert!(!session.is_busy());

        session.begin_processing();
        session.begin_upload();
        assert!(session.is_processing());
        assert!(session.is_uploading());

        session.finish_processing();
        assert!(!session.is_processing());
        assert!(session.is_uploading());
        assert!(session.is_busy());

        session.finish_upload();
        assert!(!session.is_busy());
    }

    #[test]
    fn test_message_builders() {
        let msg = Message::bot("Lawyer Recommendations:")
            .with_details(vec![LawyerRecord::default()])
            .with_source("lawyer_info");
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.details.len(), 1);
        assert_eq!(msg.source.as_deref(), Some("lawyer_info"));
    }
}
