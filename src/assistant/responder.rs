//! Keyword responder
//!
//! Deterministic reply engine for the chat screen. Input is lowercased and
//! checked against the rule table in order; the first rule with any keyword
//! contained in the input produces the reply, otherwise the fallback is used.

use crate::assistant::rules::{fallback_rule, intent_rules, IntentRule};
use crate::types::message::MessageOption;

/// A computed reply, not yet materialized into a conversation message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub options: Vec<MessageOption>,
}

/// Matches user input against the intent rule table.
///
/// Pure: the same input always yields the same reply.
pub struct Responder {
    rules: Vec<IntentRule>,
    fallback: IntentRule,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rules: intent_rules(),
            fallback: fallback_rule(),
        }
    }

    /// Compute the reply for a user input
    pub fn respond(&self, input: &str) -> Reply {
        let lowered = input.to_lowercase();
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
            .unwrap_or(&self.fallback);
        Reply {
            text: rule.reply.to_string(),
            options: rule.options.clone(),
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match() {
        let responder = Responder::new();
        let reply = responder.respond("I want to sell my extra units");
        assert!(reply.text.contains("sell energy"));
        assert_eq!(reply.options[0].label, "List Energy");
    }

    #[test]
    fn test_first_match_wins() {
        let responder = Responder::new();
        // Matches both the sell rule and the buy/price rule; the earlier
        // sell rule must win.
        let reply = responder.respond("sell at the best price");
        assert!(reply.text.contains("sell energy"));
    }

    #[test]
    fn test_case_insensitive() {
        let responder = Responder::new();
        let upper = responder.respond("SELL MY UNITS");
        let lower = responder.respond("sell my units");
        assert_eq!(upper, lower);
        assert!(upper.text.contains("sell energy"));
    }

    #[test]
    fn test_substring_containment() {
        let responder = Responder::new();
        // "selling" contains "sell"
        let reply = responder.respond("thinking about selling");
        assert!(reply.text.contains("sell energy"));
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let responder = Responder::new();
        let reply = responder.respond("hello there");
        assert!(reply.text.starts_with("Welcome to Iris Energy"));
        assert_eq!(reply.options.len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let responder = Responder::new();
        let first = responder.respond("check my portfolio");
        let second = responder.respond("check my portfolio");
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_rule_reachable() {
        let responder = Responder::new();
        assert!(responder.respond("listing").text.contains("sell energy"));
        assert!(responder.respond("what is the rate").text.contains("market rates"));
        assert!(responder.respond("carbon credit").text.contains("Iris Portfolio"));
        assert!(responder.respond("automated").text.contains("Smart Trading"));
    }
}
