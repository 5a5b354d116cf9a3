//! Conversation store: the append-only transcript and its flags.
//!
//! Nothing here performs I/O or can fail. Turns are immutable once
//! appended; the only mutations are appending and flipping flags.

use folio_ai::Message;
use folio_common::TurnId;
use serde::Serialize;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    id: TurnId,
    sender: Sender,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            sender,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &TurnId {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn to_message(&self) -> Message {
        match self.sender {
            Sender::User => Message::user(self.text.clone()),
            Sender::Assistant => Message::assistant(self.text.clone()),
        }
    }
}

/// Conversational state owned by exactly one presentation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    transcript: Vec<Turn>,
    composing: bool,
    started: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose transcript opens with an assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.append_turn(Turn::assistant(greeting));
        session
    }

    pub fn append_turn(&mut self, turn: Turn) {
        self.transcript.push(turn);
    }

    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
    }

    /// Latch `has_started`; it never reverts.
    pub fn mark_started(&mut self) {
        self.started = true;
    }

    // -- Getters --

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.transcript.last()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Gateway messages derived 1:1 from the transcript.
    pub fn to_messages(&self) -> Vec<Message> {
        self.transcript.iter().map(Turn::to_message).collect()
    }
}
