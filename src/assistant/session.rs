//! Chat session
//!
//! Owns the conversation state behind one open chat screen: the append-only
//! log, the responder, and the flow player. Every timed mutation (the
//! delayed canned reply, paced flow playback) carries the generation it was
//! scheduled under and drops itself once the conversation has moved on, so
//! a new chat or a flow load never races stale timers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use crate::assistant::log::ConversationLog;
use crate::assistant::player::FlowPlayer;
use crate::assistant::responder::Responder;
use crate::types::message::Message;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Session tuning knobs
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Language used for scripted flow lookups
    pub language: String,
    /// Delay before the assistant reply lands (ms)
    pub response_delay_ms: u64,
    /// Delay before each paced flow message (ms)
    pub flow_message_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            response_delay_ms: 800,
            flow_message_delay_ms: 1500,
        }
    }
}

/// Event emitted as the conversation changes
#[derive(Clone, Debug, Serialize)]
pub enum SessionEvent {
    /// A message was appended to the log
    MessageAppended { message: Message },
    /// The log was cleared for a fresh conversation
    Cleared,
    /// The log was wholesale replaced by an instant flow load
    Replaced { messages: Vec<Message> },
    /// A paced flow delivered its last line
    FlowFinished { flow_id: String },
}

/// One open conversation
pub struct ChatSession {
    config: SessionConfig,
    log: Arc<Mutex<ConversationLog>>,
    generation: Arc<AtomicU64>,
    responder: Arc<Responder>,
    player: FlowPlayer,
    events: mpsc::Sender<SessionEvent>,
}

impl ChatSession {
    /// Create a session together with the receiving end of its event stream
    pub fn new(config: SessionConfig) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (events, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let log = Arc::new(Mutex::new(ConversationLog::new()));
        let generation = Arc::new(AtomicU64::new(0));
        let player = FlowPlayer::new(
            Arc::clone(&log),
            Arc::clone(&generation),
            Duration::from_millis(config.flow_message_delay_ms),
            events.clone(),
        );
        let session = Self {
            config,
            log,
            generation,
            responder: Arc::new(Responder::new()),
            player,
            events,
        };
        (session, rx)
    }

    /// Record a user message and schedule the assistant's reply.
    ///
    /// Blank input is ignored. The reply text is computed when its timer
    /// fires, not when the message is sent, and is dropped if the
    /// conversation was cleared or replaced in the meantime.
    pub async fn send(&self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let message = Message::user(text);
        self.log
            .lock()
            .expect("conversation log mutex poisoned")
            .append(message.clone());
        let _ = self.events.send(SessionEvent::MessageAppended { message }).await;

        let input = text.to_string();
        let log = Arc::clone(&self.log);
        let counter = Arc::clone(&self.generation);
        let responder = Arc::clone(&self.responder);
        let events = self.events.clone();
        let delay = Duration::from_millis(self.config.response_delay_ms);
        tokio::spawn(async move {
            sleep(delay).await;
            if counter.load(Ordering::SeqCst) != generation {
                tracing::debug!("Reply dropped, conversation moved on");
                return;
            }
            let reply = responder.respond(&input);
            let message = Message::assistant(reply.text).with_options(reply.options);
            log.lock()
                .expect("conversation log mutex poisoned")
                .append(message.clone());
            let _ = events.send(SessionEvent::MessageAppended { message }).await;
        });
        true
    }

    /// Start a fresh conversation, dropping any scheduled reply or playback
    pub async fn new_chat(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.log
            .lock()
            .expect("conversation log mutex poisoned")
            .clear();
        let _ = self.events.send(SessionEvent::Cleared).await;
        tracing::info!("Started a new conversation");
    }

    /// Instantly replace the conversation with a scripted flow
    pub async fn load_flow(&self, flow_id: &str) -> bool {
        self.player.load(&self.config.language, flow_id).await
    }

    /// Clear the conversation and play a scripted flow, paced
    pub async fn play_flow(&self, flow_id: &str) -> bool {
        self.player.play(&self.config.language, flow_id).await
    }

    /// Snapshot of the conversation so far
    pub fn messages(&self) -> Vec<Message> {
        self.log
            .lock()
            .expect("conversation log mutex poisoned")
            .snapshot()
    }

    /// Abandon any pending timed work without touching the log
    pub fn close(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Language the session plays flows in
    pub fn language(&self) -> &str {
        &self.config.language
    }
}
