//! Shared presentation shell: conversation, dispatcher, input, scroll.
//!
//! Both presentations own one `AssistantCore` and forward to it;
//! only layout and visibility logic differ between them.

use tracing::debug;

use crate::conversation::{Conversation, SubmitError, SubmitOutcome};
use crate::dispatch::{Reply, ReplyDispatcher};
use crate::panel::{InputBox, Scroll};
use crate::store::Session;
use crate::view::{RenderedTurn, TranscriptView};

pub struct AssistantCore {
    conversation: Conversation,
    dispatcher: ReplyDispatcher,
    input: InputBox,
    scroll: Scroll,
}

impl AssistantCore {
    pub fn new(conversation: Conversation, dispatcher: ReplyDispatcher) -> Self {
        Self {
            conversation,
            dispatcher,
            input: InputBox::new(),
            scroll: Scroll::default(),
        }
    }

    pub fn session(&self) -> &Session {
        self.conversation.session()
    }

    pub fn input(&self) -> &InputBox {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBox {
        &mut self.input
    }

    pub fn scroll_up(&mut self, n: usize) {
        let turns = self.session().len();
        self.scroll.scroll_up(n, turns);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll.scroll_down(n);
    }

    /// Submit the input box. The box is cleared before the reply is
    /// requested; empty input is left in place and rejected.
    pub fn submit_input(&mut self) -> Result<(), SubmitError> {
        if !self.input.can_send() {
            return Err(SubmitError::EmptyInput);
        }
        let text = self.input.take();
        self.submit_text(&text)
    }

    pub fn submit_text(&mut self, text: &str) -> Result<(), SubmitError> {
        match self.conversation.submit(text)? {
            SubmitOutcome::Started(request) => {
                self.dispatcher.dispatch(request);
                self.scroll.to_latest();
            }
            SubmitOutcome::Queued { position } => {
                debug!(position, "submission queued behind outstanding reply");
            }
        }
        Ok(())
    }

    /// Commit every reply that has arrived. Returns whether the
    /// transcript changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(reply) = self.dispatcher.try_next() {
            self.apply(reply);
            changed = true;
        }
        changed
    }

    /// Wait until no reply is outstanding and the queue is empty.
    pub async fn settle(&mut self) {
        while !self.conversation.is_idle() {
            match self.dispatcher.next().await {
                Some(reply) => self.apply(reply),
                None => break,
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.conversation.is_idle()
    }

    pub fn render(&self) -> TranscriptView {
        TranscriptView {
            turns: self
                .session()
                .transcript()
                .iter()
                .map(RenderedTurn::from)
                .collect(),
            composing: self.session().is_composing(),
            queued: self.conversation.queued().map(str::to_string).collect(),
            input: self.input.text().to_string(),
            can_send: self.input.can_send(),
            scroll_offset: self.scroll.offset(),
        }
    }

    fn apply(&mut self, reply: Reply) {
        if let Some(next) = self.conversation.resolve(reply.ticket, reply.outcome) {
            self.dispatcher.dispatch(next);
        }
        self.scroll.to_latest();
    }
}
