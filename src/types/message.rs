//! Message types
//!
//! Defines conversation message structures and senders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user
    User,
    /// Message emitted by the assistant
    Assistant,
}

/// A quick-action option attached to an assistant reply.
///
/// `label` is what the option shows; `action` is the text that gets sent
/// back as user input when the option is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOption {
    pub label: String,
    pub action: String,
}

impl MessageOption {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// A single conversation message
///
/// Immutable after creation; owned by the conversation log it was appended to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message id
    pub id: Uuid,
    /// The message text
    pub text: String,
    /// Who sent the message
    pub sender: Sender,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    /// Quick-action options, present on some assistant replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<MessageOption>>,
}

impl Message {
    /// Create a new message with a fresh id and the current timestamp
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            options: None,
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    /// Attach quick-action options
    pub fn with_options(mut self, options: Vec<MessageOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Create a message at an explicit timestamp (scripted playback assigns
    /// one shared timestamp per batch)
    pub fn at(sender: Sender, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp,
            options: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello, world!");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello, world!");
        assert!(msg.options.is_none());
    }

    #[test]
    fn test_unique_ids() {
        let a = Message::assistant("one");
        let b = Message::assistant("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_options() {
        let msg = Message::assistant("pick one")
            .with_options(vec![MessageOption::new("Buy Energy", "Buy Energy")]);
        let options = msg.options.expect("options attached");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Buy Energy");
    }

    #[test]
    fn test_sender_serialization() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
