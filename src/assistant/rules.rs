//! Intent rule table
//!
//! Ordered keyword rules behind the assistant's canned replies. Matching is
//! case-insensitive substring containment against the user's input, checked
//! in table order: the first rule with any matching keyword wins. Keep the
//! table explicit; rule order is part of the behavior.

use crate::types::message::MessageOption;

/// One entry in the intent rule table
#[derive(Clone, Debug)]
pub struct IntentRule {
    /// Lowercase keywords matched as substrings of the lowercased input
    pub keywords: Vec<&'static str>,
    /// Canned reply text
    pub reply: &'static str,
    /// Quick actions offered alongside the reply
    pub options: Vec<MessageOption>,
}

/// The ordered rule table consulted by the responder
pub fn intent_rules() -> Vec<IntentRule> {
    vec![
        // Selling energy
        IntentRule {
            keywords: vec!["sell", "listing"],
            reply: "I see you want to sell energy. You can list your excess solar units on the peer-to-peer marketplace. What's your target price?",
            options: vec![
                MessageOption::new("List Energy", "List 5kWh for sale"),
                MessageOption::new("Market Prices", "Current market rates?"),
                MessageOption::new("Check Savings", "My total savings"),
            ],
        },
        // Buying energy and price checks
        IntentRule {
            keywords: vec!["buy", "price", "rate"],
            reply: "Current market rates are optimized for your location. You can buy clean energy from local prosumers starting at ₹6.5/unit. Interested?",
            options: vec![
                MessageOption::new("Browse Units", "Show me available units"),
                MessageOption::new("Set Alerts", "Set a price alert"),
                MessageOption::new("Auto-Buy", "Enable Auto-Buy"),
            ],
        },
        // Portfolio and wallet
        IntentRule {
            keywords: vec!["portfolio", "balance", "credit"],
            reply: "Your Iris Portfolio is performing well. You have 12.5 Carbon Credits and a balance of ₹1,240. Any specific action?",
            options: vec![
                MessageOption::new("Sell Credits", "Redeem Carbon Credits"),
                MessageOption::new("Wallet details", "Show full wallet"),
                MessageOption::new("Top Up", "Add funds"),
            ],
        },
        // Smart trading
        IntentRule {
            keywords: vec!["smart", "trade", "automated"],
            reply: "Smart Trading is Iris's AI optimization. It handles buying/selling based on your usage patterns. Shall we configure it?",
            options: vec![
                MessageOption::new("Enable AI", "Start Smart Trading"),
                MessageOption::new("Trading Logs", "Show trading history"),
                MessageOption::new("Strategy", "Change strategy"),
            ],
        },
    ]
}

/// Reply used when no rule matches
pub fn fallback_rule() -> IntentRule {
    IntentRule {
        keywords: vec![],
        reply: "Welcome to Iris Energy. I'm your AI assistant for the P2P energy market. You can ask me to sell units, check prices, or view your carbon credits.",
        options: vec![
            MessageOption::new("Buy Energy", "Buy Energy"),
            MessageOption::new("Sell Energy", "Sell Energy"),
            MessageOption::new("Smart Trade", "Smart Trade"),
        ],
    }
}
