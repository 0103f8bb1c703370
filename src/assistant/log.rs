//! Conversation log
//!
//! Append-only record of the current chat. The log is owned by the session
//! that created it and lives only as long as the session; starting a new
//! chat clears it, loading a scripted flow replaces it wholesale.

use crate::types::message::Message;

/// Messages of the current conversation, in append order
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop every message, leaving an empty conversation
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Swap in an already-materialized batch, discarding the current contents
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Copy of the messages in append order
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Most recent message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
