//! Scripted flow player
//!
//! Materializes catalog flows into the conversation log, either instantly
//! (the whole script lands at once, sharing a timestamp) or paced (one line
//! per delay tick, the way the live demo plays it). Playback carries the
//! generation it was started under and stops itself once the conversation
//! moves on.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use crate::assistant::log::ConversationLog;
use crate::assistant::session::SessionEvent;
use crate::catalog::flows;
use crate::types::flow::ChatFlow;
use crate::types::message::Message;

/// Plays scripted flows into a session's conversation log
pub struct FlowPlayer {
    log: Arc<Mutex<ConversationLog>>,
    generation: Arc<AtomicU64>,
    message_delay: Duration,
    events: mpsc::Sender<SessionEvent>,
}

impl FlowPlayer {
    pub fn new(
        log: Arc<Mutex<ConversationLog>>,
        generation: Arc<AtomicU64>,
        message_delay: Duration,
        events: mpsc::Sender<SessionEvent>,
    ) -> Self {
        Self {
            log,
            generation,
            message_delay,
            events,
        }
    }

    /// Instantly replace the conversation with a scripted flow.
    ///
    /// Returns false, leaving the log untouched, when the flow id is
    /// unknown in both the requested and the default language.
    pub async fn load(&self, language: &str, flow_id: &str) -> bool {
        let Some(flow) = flows::find_flow(language, flow_id) else {
            tracing::warn!("Unknown chat flow: {}", flow_id);
            return false;
        };

        // An instant load also invalidates any playback still in flight
        self.generation.fetch_add(1, Ordering::SeqCst);

        let batch = materialize(flow);
        self.log
            .lock()
            .expect("conversation log mutex poisoned")
            .replace(batch.clone());
        let _ = self.events.send(SessionEvent::Replaced { messages: batch }).await;

        tracing::info!("Loaded flow {} ({} messages)", flow.id, flow.messages.len());
        true
    }

    /// Clear the conversation and play a scripted flow line by line.
    ///
    /// Each line waits one delay tick before it lands, the first included.
    /// Unknown flow ids are a no-op: the log is checked before it is
    /// cleared. Returns whether playback started.
    pub async fn play(&self, language: &str, flow_id: &str) -> bool {
        let Some(flow) = flows::find_flow(language, flow_id) else {
            tracing::warn!("Unknown chat flow: {}", flow_id);
            return false;
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.log
            .lock()
            .expect("conversation log mutex poisoned")
            .clear();
        let _ = self.events.send(SessionEvent::Cleared).await;
        tracing::info!("Playing flow {} ({} messages)", flow.id, flow.messages.len());

        let log = Arc::clone(&self.log);
        let counter = Arc::clone(&self.generation);
        let events = self.events.clone();
        let delay = self.message_delay;
        tokio::spawn(async move {
            for line in &flow.messages {
                sleep(delay).await;
                if counter.load(Ordering::SeqCst) != generation {
                    tracing::debug!("Playback of {} overtaken, stopping", flow.id);
                    return;
                }
                let message = Message::new(line.sender, line.text.clone());
                log.lock()
                    .expect("conversation log mutex poisoned")
                    .append(message.clone());
                let _ = events.send(SessionEvent::MessageAppended { message }).await;
            }
            let _ = events
                .send(SessionEvent::FlowFinished {
                    flow_id: flow.id.clone(),
                })
                .await;
        });
        true
    }
}

/// Turn scripted lines into real messages sharing one timestamp
fn materialize(flow: &ChatFlow) -> Vec<Message> {
    let timestamp = Utc::now();
    flow.messages
        .iter()
        .map(|line| Message::at(line.sender, line.text.clone(), timestamp))
        .collect()
}
