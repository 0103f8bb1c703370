//! Conversation assistant
//!
//! The engine behind the chat screen: an ordered keyword rule table that
//! produces canned replies, a session-scoped conversation log, and a player
//! for scripted demo flows.

pub mod log;
pub mod player;
pub mod responder;
pub mod rules;
pub mod session;
