//! The submission algorithm shared by both presentations.
//!
//! `Conversation` wraps a [`Session`] and sequences exchanges: a
//! submission appends the user turn and yields a [`CompletionRequest`];
//! resolving that request appends the reply (or the fallback apology)
//! and clears the composing flag. Submissions made while a reply is
//! outstanding are queued and started in order, so every reply lands
//! directly after its own user turn.

use std::collections::VecDeque;

use folio_ai::{GatewayError, Message, EMPTY_REPLY_PLACEHOLDER};
use tracing::{debug, warn};

use crate::store::{Session, Turn};

/// Shown in place of a reply whenever the gateway fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble answering right now. Please try again in a moment.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyInput,
    #[error("quick actions are only offered before the conversation starts")]
    QuickActionsUnavailable,
    #[error("unknown quick action: {0}")]
    UnknownQuickAction(String),
    #[error("assistant panel is not open")]
    PanelHidden,
}

/// Matches a reply to the request it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A gateway call to perform: the transcript as of its user turn.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub ticket: Ticket,
    pub messages: Vec<Message>,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The user turn was appended; perform this request.
    Started(CompletionRequest),
    /// A reply is outstanding; the text waits at this queue position.
    Queued { position: usize },
}

#[derive(Debug, Default)]
pub struct Conversation {
    session: Session,
    queue: VecDeque<String>,
    in_flight: Option<Ticket>,
    next_ticket: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            session: Session::with_greeting(greeting),
            ..Self::default()
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Submissions waiting for the outstanding reply, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    /// No reply outstanding and nothing queued.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none() && self.queue.is_empty()
    }

    /// Submit trimmed `text`. Whitespace-only input is rejected and
    /// leaves the session untouched.
    pub fn submit(&mut self, text: &str) -> Result<SubmitOutcome, SubmitError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        self.session.mark_started();

        if self.in_flight.is_some() {
            self.queue.push_back(text.to_string());
            debug!(queued = self.queue.len(), "reply outstanding, queueing submission");
            return Ok(SubmitOutcome::Queued {
                position: self.queue.len(),
            });
        }

        Ok(SubmitOutcome::Started(self.start(text.to_string())))
    }

    /// Commit the outcome of `ticket`'s gateway call.
    ///
    /// Returns the next queued request, if any, already started. A
    /// ticket that is not the outstanding one is ignored.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, GatewayError>,
    ) -> Option<CompletionRequest> {
        if self.in_flight != Some(ticket) {
            warn!(?ticket, "ignoring reply for a request that is not outstanding");
            return None;
        }
        self.in_flight = None;

        let reply = match outcome {
            Ok(text) => normalize_reply(&text),
            Err(e) => {
                warn!(error = %e, "completion failed, showing fallback reply");
                FALLBACK_MESSAGE.to_string()
            }
        };
        self.session.append_turn(Turn::assistant(reply));
        self.session.set_composing(false);

        self.queue.pop_front().map(|text| self.start(text))
    }

    fn start(&mut self, text: String) -> CompletionRequest {
        self.session.append_turn(Turn::user(text));
        self.session.set_composing(true);

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);

        CompletionRequest {
            ticket,
            messages: self.session.to_messages(),
        }
    }
}

fn normalize_reply(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        EMPTY_REPLY_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Sender;
    use folio_ai::{GatewayFailure, Role};

    fn started(outcome: SubmitOutcome) -> CompletionRequest {
        match outcome {
            SubmitOutcome::Started(req) => req,
            SubmitOutcome::Queued { .. } => panic!("expected a started request"),
        }
    }

    fn failure() -> GatewayError {
        GatewayFailure::Network("connection refused".into()).into()
    }

    #[test]
    fn empty_input_is_rejected_without_side_effects() {
        let mut conv = Conversation::new();
        assert_eq!(conv.submit("   \n\t").unwrap_err(), SubmitError::EmptyInput);
        assert!(conv.session().is_empty());
        assert!(!conv.session().has_started());
        assert!(!conv.session().is_composing());
    }

    #[test]
    fn submit_appends_trimmed_user_turn_and_composes() {
        let mut conv = Conversation::new();
        let req = started(conv.submit("  Hello  ").unwrap());

        assert_eq!(conv.session().len(), 1);
        assert_eq!(conv.session().last().unwrap().text(), "Hello");
        assert!(conv.session().is_composing());
        assert!(conv.session().has_started());
        assert_eq!(req.messages, vec![Message::user("Hello")]);
    }

    #[test]
    fn request_includes_prior_turns_and_new_user_turn() {
        let mut conv = Conversation::with_greeting("Hi!");
        let req = started(conv.submit("Show his projects").unwrap());

        let roles: Vec<_> = req.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::Assistant, Role::User]);
        assert_eq!(req.messages[1].content, "Show his projects");
    }

    #[test]
    fn success_appends_reply_and_clears_composing() {
        let mut conv = Conversation::new();
        let req = started(conv.submit("Hi").unwrap());
        assert!(conv.resolve(req.ticket, Ok("Hello!".into())).is_none());

        let last = conv.session().last().unwrap();
        assert_eq!(last.sender(), Sender::Assistant);
        assert_eq!(last.text(), "Hello!");
        assert!(!conv.session().is_composing());
        assert!(conv.is_idle());
    }

    #[test]
    fn failure_appends_fallback_and_clears_composing() {
        let mut conv = Conversation::new();
        let req = started(conv.submit("Tell me about Rachid").unwrap());
        conv.resolve(req.ticket, Err(failure()));

        let t = conv.session().transcript();
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].text(), "Tell me about Rachid");
        assert_eq!(t[1].text(), FALLBACK_MESSAGE);
        assert!(!conv.session().is_composing());
    }

    #[test]
    fn blank_reply_becomes_placeholder() {
        let mut conv = Conversation::new();
        let req = started(conv.submit("Hi").unwrap());
        conv.resolve(req.ticket, Ok("  \n".into()));
        assert_eq!(conv.session().last().unwrap().text(), EMPTY_REPLY_PLACEHOLDER);
    }

    #[test]
    fn overlapping_submission_is_queued_until_reply() {
        let mut conv = Conversation::new();
        let first = started(conv.submit("first").unwrap());

        match conv.submit("second").unwrap() {
            SubmitOutcome::Queued { position } => assert_eq!(position, 1),
            SubmitOutcome::Started(_) => panic!("second submission should queue"),
        }
        // Queued text is not in the transcript yet.
        assert_eq!(conv.session().len(), 1);
        assert_eq!(conv.queued().collect::<Vec<_>>(), ["second"]);

        let second = conv.resolve(first.ticket, Ok("reply one".into())).unwrap();
        assert!(conv.session().is_composing());
        assert_eq!(conv.queued().count(), 0);
        assert_eq!(second.messages.len(), 3);
        assert_eq!(second.messages[2].content, "second");

        assert!(conv.resolve(second.ticket, Ok("reply two".into())).is_none());
        let texts: Vec<_> = conv.session().transcript().iter().map(Turn::text).collect();
        assert_eq!(texts, ["first", "reply one", "second", "reply two"]);
        assert!(conv.is_idle());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut conv = Conversation::new();
        let first = started(conv.submit("first").unwrap());
        conv.resolve(first.ticket, Ok("one".into()));

        assert!(conv.resolve(first.ticket, Ok("again".into())).is_none());
        assert_eq!(conv.session().len(), 2);
    }

    #[test]
    fn session_survives_repeated_failures() {
        let mut conv = Conversation::new();
        for i in 0..3 {
            let req = started(conv.submit(&format!("try {i}")).unwrap());
            conv.resolve(req.ticket, Err(failure()));
        }
        let req = started(conv.submit("last").unwrap());
        conv.resolve(req.ticket, Ok("finally".into()));

        assert_eq!(conv.session().len(), 8);
        assert_eq!(conv.session().last().unwrap().text(), "finally");
    }
}
