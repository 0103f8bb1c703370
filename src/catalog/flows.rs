//! Scripted flow catalog
//!
//! Demo conversations keyed by language. Lookups fall back to the default
//! language: an unknown language uses the English table, and a flow id
//! missing from a language's table is searched in English before giving up.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::flow::{ChatFlow, FlowMessage};

/// Language used when a requested language or flow id has no entry
pub const DEFAULT_LANGUAGE: &str = "en";

static FLOWS: Lazy<HashMap<&'static str, Vec<ChatFlow>>> = Lazy::new(build_flows);

/// All flows for a language, falling back to the default language's table
pub fn flows_for(language: &str) -> &'static [ChatFlow] {
    FLOWS
        .get(language)
        .or_else(|| FLOWS.get(DEFAULT_LANGUAGE))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Find a flow by id, checking the default language when the requested
/// language has no entry for it
pub fn find_flow(language: &str, flow_id: &str) -> Option<&'static ChatFlow> {
    let lookup = |lang: &str| {
        FLOWS
            .get(lang)
            .and_then(|flows| flows.iter().find(|flow| flow.id == flow_id))
    };
    lookup(language).or_else(|| lookup(DEFAULT_LANGUAGE))
}

/// Languages with their own flow tables, sorted
pub fn languages() -> Vec<&'static str> {
    let mut langs: Vec<&'static str> = FLOWS.keys().copied().collect();
    langs.sort_unstable();
    langs
}

fn build_flows() -> HashMap<&'static str, Vec<ChatFlow>> {
    let mut tables = HashMap::new();

    tables.insert(
        "en",
        vec![
            ChatFlow::new(
                "sell_solar_energy",
                "Selling Energy",
                vec![
                    FlowMessage::user("My rooftop panels generated extra units today. I want to sell 5kWh."),
                    FlowMessage::assistant("Great! Your current surplus is 6.2kWh, so listing 5kWh keeps a safe buffer for your evening usage."),
                    FlowMessage::user("What price should I ask?"),
                    FlowMessage::assistant("Solar is trading at ₹4.25/unit right now. Listing at ₹4.40 keeps you close to market and quick to sell."),
                    FlowMessage::user("Okay, list it at ₹4.40."),
                    FlowMessage::assistant("Done. 5kWh listed at ₹4.40/unit on the marketplace. I'll notify you as soon as a buyer picks it up."),
                ],
            ),
            ChatFlow::new(
                "buy_autorickshaw_charging",
                "Buying Energy",
                vec![
                    FlowMessage::user("I need cheap power to charge my auto-rickshaw overnight."),
                    FlowMessage::assistant("Overnight wind energy is your best option. WIND-TN is at ₹3.80/unit, well below the grid's ₹6.50."),
                    FlowMessage::user("How much will a full charge cost?"),
                    FlowMessage::assistant("A full charge takes about 8kWh, so roughly ₹30.40 from the wind farm against ₹52 from the grid."),
                    FlowMessage::user("Book the wind units for tonight."),
                    FlowMessage::assistant("Booked. 8kWh of wind energy reserved for delivery between 11 PM and 5 AM. Happy charging!"),
                ],
            ),
            ChatFlow::new(
                "delivery_reminders",
                "Energy Delivery",
                vec![
                    FlowMessage::user("When does my purchased energy arrive?"),
                    FlowMessage::assistant("Your 10kWh solar purchase is scheduled for delivery today between 2 PM and 6 PM."),
                    FlowMessage::user("Can you remind me before it starts?"),
                    FlowMessage::assistant("Absolutely. I've set a reminder 30 minutes before delivery begins, and you'll get a confirmation once the transfer completes."),
                ],
            ),
        ],
    );

    tables.insert(
        "hi",
        vec![
            ChatFlow::new(
                "sell_solar_energy",
                "ऊर्जा बेचना",
                vec![
                    FlowMessage::user("आज मेरे सोलर पैनल से अतिरिक्त यूनिट बनी हैं। मुझे 5kWh बेचनी है।"),
                    FlowMessage::assistant("बहुत बढ़िया! आपका सरप्लस 6.2kWh है, इसलिए 5kWh लिस्ट करने के बाद भी शाम के लिए पर्याप्त बचत रहेगी।"),
                    FlowMessage::user("कीमत क्या रखूँ?"),
                    FlowMessage::assistant("सोलर अभी ₹4.25/यूनिट पर चल रहा है। ₹4.40 पर लिस्ट करना ठीक रहेगा, जल्दी बिक जाएगी।"),
                    FlowMessage::user("ठीक है, ₹4.40 पर लिस्ट कर दो।"),
                    FlowMessage::assistant("हो गया। 5kWh ₹4.40/यूनिट पर मार्केटप्लेस में लिस्ट हो गई है। खरीदार मिलते ही आपको सूचना मिलेगी।"),
                ],
            ),
            ChatFlow::new(
                "buy_autorickshaw_charging",
                "ऊर्जा खरीदना",
                vec![
                    FlowMessage::user("मुझे रात में अपना ऑटो-रिक्शा चार्ज करने के लिए सस्ती बिजली चाहिए।"),
                    FlowMessage::assistant("रात की पवन ऊर्जा सबसे अच्छा विकल्प है। WIND-TN ₹3.80/यूनिट पर है, ग्रिड के ₹6.50 से काफी कम।"),
                    FlowMessage::user("पूरी चार्जिंग का खर्च कितना होगा?"),
                    FlowMessage::assistant("पूरी चार्जिंग में लगभग 8kWh लगती है, यानी विंड फार्म से करीब ₹30.40, जबकि ग्रिड से ₹52।"),
                    FlowMessage::user("आज रात के लिए विंड यूनिट बुक कर दो।"),
                    FlowMessage::assistant("बुक हो गया। रात 11 बजे से सुबह 5 बजे के बीच डिलीवरी के लिए 8kWh पवन ऊर्जा आरक्षित है।"),
                ],
            ),
            ChatFlow::new(
                "delivery_reminders",
                "ऊर्जा डिलीवरी",
                vec![
                    FlowMessage::user("मेरी खरीदी हुई बिजली कब आएगी?"),
                    FlowMessage::assistant("आपकी 10kWh सोलर खरीद की डिलीवरी आज दोपहर 2 बजे से शाम 6 बजे के बीच तय है।"),
                    FlowMessage::user("शुरू होने से पहले याद दिला दोगे?"),
                    FlowMessage::assistant("बिल्कुल। डिलीवरी शुरू होने से 30 मिनट पहले रिमाइंडर सेट कर दिया है। ट्रांसफर पूरा होने पर भी पुष्टि मिलेगी।"),
                ],
            ),
        ],
    );

    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_all_flows() {
        let default_ids: Vec<&str> = flows_for(DEFAULT_LANGUAGE)
            .iter()
            .map(|flow| flow.id.as_str())
            .collect();
        assert_eq!(default_ids.len(), 3);

        for language in languages() {
            for id in &default_ids {
                assert!(
                    find_flow(language, id).is_some(),
                    "flow {id} missing for language {language}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_language_falls_back_to_default() {
        let flows = flows_for("xx");
        assert_eq!(flows.len(), flows_for(DEFAULT_LANGUAGE).len());

        let flow = find_flow("xx", "sell_solar_energy").expect("fallback flow");
        assert_eq!(flow.title, "Selling Energy");
    }

    #[test]
    fn test_requested_language_wins_over_default() {
        let flow = find_flow("hi", "sell_solar_energy").expect("hindi flow");
        assert_eq!(flow.title, "ऊर्जा बेचना");
    }

    #[test]
    fn test_unknown_flow_id_is_none() {
        assert!(find_flow("en", "no_such_flow").is_none());
        assert!(find_flow("xx", "no_such_flow").is_none());
    }

    #[test]
    fn test_flows_alternate_sensibly() {
        for flow in flows_for("en") {
            assert!(!flow.messages.is_empty());
            assert_eq!(
                flow.messages[0].sender,
                crate::types::message::Sender::User,
                "flows open with the user speaking"
            );
        }
    }
}
