//! Chat entry points
//!
//! The sidebar's recent-conversation list and the quick actions shown when
//! a conversation is empty. Recent chats open a scripted flow; quick
//! actions send their text as user input.

use serde::{Deserialize, Serialize};

use crate::types::message::MessageOption;

/// A sidebar entry that replays a scripted flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentChat {
    /// Title shown in the sidebar
    pub title: String,
    /// Rough recency label, e.g. `"Today"`
    pub last_active: String,
    /// Flow to play when the entry is opened
    pub flow_id: String,
}

/// Recent conversations, newest first
pub fn recent_chats() -> Vec<RecentChat> {
    vec![
        RecentChat {
            title: "Selling Energy".to_string(),
            last_active: "Today".to_string(),
            flow_id: "sell_solar_energy".to_string(),
        },
        RecentChat {
            title: "Buying Energy".to_string(),
            last_active: "Yesterday".to_string(),
            flow_id: "buy_autorickshaw_charging".to_string(),
        },
        RecentChat {
            title: "Energy Delivery".to_string(),
            last_active: "2 days ago".to_string(),
            flow_id: "delivery_reminders".to_string(),
        },
    ]
}

/// Quick actions offered on an empty conversation
pub fn quick_actions() -> Vec<MessageOption> {
    vec![
        MessageOption::new("Buy Energy", "Buy Energy"),
        MessageOption::new("Sell Energy", "Sell Energy"),
        MessageOption::new("Smart Trade", "Smart Trade"),
        MessageOption::new("Marketplace", "Marketplace"),
    ]
}
