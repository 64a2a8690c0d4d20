//! The conversation engine — transcript, typing state, and deferred replies.
//!
//! Each chat session owns one `Conversation`: an append-only transcript
//! seeded with a greeting, a two-state session machine (idle /
//! awaiting_reply), and at most one pending assistant reply armed on a
//! one-shot timer. Frontends subscribe to events via tokio::broadcast
//! and drive the engine through a command channel.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::config::Config;
use crate::events::ChatEvent;
use crate::responder;
use crate::types::{Message, Sender, SessionState, SessionStatus, TypingData};

/// Messages that can be sent TO the conversation (from the frontend).
#[derive(Debug)]
pub enum ChatCommand {
    UserMessage(String),
    Stop,
}

/// A reply that has been classified and armed, waiting for its deadline.
struct PendingReply {
    due: Instant,
    text: &'static str,
}

/// One chat session. Owns its transcript and state exclusively.
pub struct Conversation {
    transcript: Vec<Message>,
    next_id: u64,
    state: SessionState,
    pending: Option<PendingReply>,
    reply_latency: Duration,

    event_tx: broadcast::Sender<ChatEvent>,
    command_tx: mpsc::Sender<ChatCommand>,
    command_rx: Option<mpsc::Receiver<ChatCommand>>,
}

impl Conversation {
    /// Create a conversation seeded with the assistant greeting.
    pub fn new(config: &Config) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let (command_tx, command_rx) = mpsc::channel(32);

        let mut conv = Self {
            transcript: Vec::new(),
            next_id: 1,
            state: SessionState::Idle,
            pending: None,
            reply_latency: Duration::from_millis(config.reply_latency_ms),
            event_tx,
            command_tx,
            command_rx: Some(command_rx),
        };
        conv.append(Sender::Assistant, responder::GREETING);
        conv
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.event_tx.subscribe()
    }

    pub fn command_sender(&self) -> mpsc::Sender<ChatCommand> {
        self.command_tx.clone()
    }

    /// Ordered transcript, oldest first. Never empty.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// True while an assistant reply is pending.
    pub fn is_typing(&self) -> bool {
        self.state == SessionState::AwaitingReply
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn broadcast(&self, event: ChatEvent) {
        let _ = self.event_tx.send(event);
    }

    fn broadcast_status(&self) {
        self.broadcast(ChatEvent::Status(SessionStatus {
            state: self.state,
            message_count: self.transcript.len(),
        }));
    }

    fn append(&mut self, sender: Sender, text: &str) {
        let message = Message {
            id: self.next_id,
            text: text.to_string(),
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.broadcast(ChatEvent::Message(message.clone()));
        self.transcript.push(message);
    }

    /// Accept a user utterance. Silently ignored when the trimmed text is
    /// empty or a reply is already pending — the frontend is expected to
    /// have disabled its input in that window, but the guard lives here.
    pub fn submit_user_message(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("ignoring empty message");
            return;
        }
        if self.state == SessionState::AwaitingReply {
            debug!("ignoring message while a reply is pending");
            return;
        }

        self.append(Sender::User, trimmed);
        self.state = SessionState::AwaitingReply;
        self.pending = Some(PendingReply {
            due: Instant::now() + self.reply_latency,
            text: responder::classify(trimmed),
        });
        self.broadcast(ChatEvent::Typing(TypingData { active: true }));
        self.broadcast_status();
        info!("user message accepted ({} chars)", trimmed.len());
    }

    /// Fire the armed reply. No-op when nothing is pending.
    fn deliver_reply(&mut self) {
        let Some(reply) = self.pending.take() else {
            return;
        };
        self.append(Sender::Assistant, reply.text);
        self.state = SessionState::Idle;
        self.broadcast(ChatEvent::Typing(TypingData { active: false }));
        self.broadcast_status();
    }

    /// Drop any pending reply without delivering it. Idempotent —
    /// cancelling twice, or after delivery, is a no-op.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_none() {
            return;
        }
        self.state = SessionState::Idle;
        self.broadcast(ChatEvent::Typing(TypingData { active: false }));
        self.broadcast_status();
        debug!("pending reply cancelled");
    }

    // ── Main loop ──

    /// Drive the conversation: one task, commands in, events out. The
    /// deferred reply is a timer arm of the select loop, so stopping the
    /// task cancels it — a late append can never happen.
    pub async fn run(&mut self) {
        let mut command_rx = self.command_rx.take().expect("command_rx already taken");
        info!("conversation ready");

        loop {
            let due = self.pending.as_ref().map(|p| p.due);
            tokio::select! {
                cmd = command_rx.recv() => match cmd {
                    Some(ChatCommand::UserMessage(text)) => self.submit_user_message(&text),
                    Some(ChatCommand::Stop) | None => break,
                },
                _ = sleep_until(due.unwrap_or_else(Instant::now)), if due.is_some() => {
                    self.deliver_reply();
                }
            }
        }

        self.cancel_pending();
        info!("conversation stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{classify, FALLBACK_REPLY, GREETING};

    fn conversation() -> Conversation {
        Conversation::new(&Config::default())
    }

    #[test]
    fn test_seed_invariant() {
        let conv = conversation();
        assert_eq!(conv.transcript().len(), 1);
        assert_eq!(conv.transcript()[0].sender, Sender::Assistant);
        assert_eq!(conv.transcript()[0].text, GREETING);
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_empty_and_whitespace_are_ignored() {
        let mut conv = conversation();
        conv.submit_user_message("");
        conv.submit_user_message("   ");
        assert_eq!(conv.transcript().len(), 1);
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_accepted_message_is_trimmed_and_typing_starts() {
        let mut conv = conversation();
        conv.submit_user_message("  hello  ");
        assert_eq!(conv.transcript().len(), 2);
        assert_eq!(conv.transcript()[1].text, "hello");
        assert_eq!(conv.transcript()[1].sender, Sender::User);
        assert!(conv.is_typing());
    }

    #[test]
    fn test_second_submit_while_typing_is_a_noop() {
        let mut conv = conversation();
        conv.submit_user_message("hello");
        conv.submit_user_message("hello");
        assert_eq!(conv.transcript().len(), 2);
        assert!(conv.is_typing());

        conv.deliver_reply();
        assert_eq!(conv.transcript().len(), 3);
        assert_eq!(conv.transcript()[2].sender, Sender::Assistant);
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_ids_increase_and_senders_alternate() {
        let mut conv = conversation();
        for text in ["one", "two", "three"] {
            conv.submit_user_message(text);
            conv.deliver_reply();
        }

        let ids: Vec<u64> = conv.transcript().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        // After the greeting, senders alternate user -> assistant.
        for pair in conv.transcript()[1..].chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1].sender, Sender::Assistant);
        }
    }

    #[test]
    fn test_reply_text_comes_from_classifier() {
        let mut conv = conversation();
        conv.submit_user_message("I feel so anxious and stressed");
        conv.deliver_reply();
        assert_eq!(
            conv.transcript()[2].text,
            classify("I feel so anxious and stressed")
        );

        conv.submit_user_message("purple elephants");
        conv.deliver_reply();
        assert_eq!(conv.transcript()[4].text, FALLBACK_REPLY);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut conv = conversation();
        conv.submit_user_message("hello");
        conv.cancel_pending();
        conv.cancel_pending();
        assert_eq!(conv.transcript().len(), 2);
        assert!(!conv.is_typing());

        // Delivering after a cancel must not append anything.
        conv.deliver_reply();
        assert_eq!(conv.transcript().len(), 2);

        // Cancelling with nothing pending is also a no-op.
        conv.cancel_pending();
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_input_reopens_after_delivery() {
        let mut conv = conversation();
        conv.submit_user_message("hello");
        conv.deliver_reply();
        conv.submit_user_message("hello again");
        assert_eq!(conv.transcript().len(), 4);
        assert!(conv.is_typing());
    }

    // ── run() loop, driven with a paused clock ──

    async fn next_message(rx: &mut broadcast::Receiver<ChatEvent>) -> Message {
        loop {
            match rx.recv().await.expect("event stream closed") {
                ChatEvent::Message(m) => return m,
                _ => continue,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_latency() {
        let mut conv = conversation();
        let mut rx = conv.subscribe();
        let commands = conv.command_sender();
        let task = tokio::spawn(async move { conv.run().await });

        let start = Instant::now();
        commands
            .send(ChatCommand::UserMessage("I had a good day".into()))
            .await
            .unwrap();

        let user = next_message(&mut rx).await;
        assert_eq!(user.sender, Sender::User);

        let reply = next_message(&mut rx).await;
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, classify("I had a good day"));
        assert!(start.elapsed() >= Duration::from_millis(1500));

        commands.send(ChatCommand::Stop).await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_latency_cancels_reply() {
        let mut conv = conversation();
        let mut rx = conv.subscribe();
        let commands = conv.command_sender();
        let task = tokio::spawn(async move { conv.run().await });

        commands
            .send(ChatCommand::UserMessage("hello".into()))
            .await
            .unwrap();
        commands.send(ChatCommand::Stop).await.unwrap();
        task.await.unwrap();

        // Drain everything the task broadcast before it stopped: the user
        // message must be there, an assistant reply must not.
        let mut senders = Vec::new();
        while let Ok(event) = rx.recv().await {
            if let ChatEvent::Message(m) = event {
                senders.push(m.sender);
            }
        }
        assert_eq!(senders, vec![Sender::User]);
    }
}
