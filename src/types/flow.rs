//! Scripted conversation flows
//!
//! A flow is a static, ordered script of messages that can be played into a
//! conversation, either instantly or paced. Flow content is keyed by language;
//! lookups fall back to the default language when a flow id is missing.

use serde::{Deserialize, Serialize};

use crate::types::message::Sender;

/// One scripted line inside a flow.
///
/// Carries no id or timestamp; those are assigned when the line is
/// materialized into a real [`crate::types::message::Message`] during playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowMessage {
    pub sender: Sender,
    pub text: String,
}

impl FlowMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    /// Scripted user line
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Scripted assistant line
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

/// A complete scripted conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFlow {
    /// Stable flow id, e.g. `"sell_solar_energy"`
    pub id: String,
    /// Human-readable title shown in chat lists
    pub title: String,
    /// Ordered script, played first to last
    pub messages: Vec<FlowMessage>,
}

impl ChatFlow {
    pub fn new(id: impl Into<String>, title: impl Into<String>, messages: Vec<FlowMessage>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_construction() {
        let flow = ChatFlow::new(
            "sell_solar_energy",
            "Selling Energy",
            vec![
                FlowMessage::user("I want to sell my extra solar units."),
                FlowMessage::assistant("Sure, let's list them."),
            ],
        );
        assert_eq!(flow.id, "sell_solar_energy");
        assert_eq!(flow.messages.len(), 2);
        assert_eq!(flow.messages[0].sender, Sender::User);
        assert_eq!(flow.messages[1].sender, Sender::Assistant);
    }

    #[test]
    fn test_flow_message_roundtrip() {
        let line = FlowMessage::assistant("Done.");
        let json = serde_json::to_string(&line).unwrap();
        let back: FlowMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
