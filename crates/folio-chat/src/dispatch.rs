//! Runs gateway calls off the presentation's event loop.
//!
//! Each request is spawned on the tokio runtime; its outcome comes back
//! over a channel and is committed when the presentation next polls.
//! Dropping the dispatcher drops the receiver, so a reply that arrives
//! after the presentation unmounts is discarded. A task that dies before
//! its gateway call returns still reports back, as a failed reply.

use std::sync::Arc;

use folio_ai::{CompletionGateway, GatewayError, GatewayFailure};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::conversation::{CompletionRequest, Ticket};

/// A finished gateway call.
#[derive(Debug)]
pub struct Reply {
    pub ticket: Ticket,
    pub outcome: Result<String, GatewayError>,
}

pub struct ReplyDispatcher {
    gateway: Arc<dyn CompletionGateway>,
    runtime: Handle,
    reply_tx: mpsc::UnboundedSender<Reply>,
    reply_rx: mpsc::UnboundedReceiver<Reply>,
}

impl ReplyDispatcher {
    pub fn new(gateway: Arc<dyn CompletionGateway>, runtime: Handle) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            runtime,
            reply_tx,
            reply_rx,
        }
    }

    /// Start the gateway call for `request` in the background.
    pub fn dispatch(&self, request: CompletionRequest) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.reply_tx.clone();

        debug!(
            ticket = ?request.ticket,
            messages = request.messages.len(),
            "dispatching completion"
        );
        self.runtime.spawn(async move {
            let slot = ReplySlot::new(request.ticket, tx);
            let outcome = gateway.complete(&request.messages).await;
            slot.fill(outcome);
        });
    }

    /// Next finished reply, without waiting.
    pub fn try_next(&mut self) -> Option<Reply> {
        self.reply_rx.try_recv().ok()
    }

    /// Wait for the next finished reply.
    pub async fn next(&mut self) -> Option<Reply> {
        self.reply_rx.recv().await
    }
}

/// Delivers exactly one reply for a ticket. If the task is dropped before
/// `fill` (panic or cancellation), the drop sends an aborted failure so
/// the conversation still leaves the composing state.
struct ReplySlot {
    ticket: Ticket,
    tx: mpsc::UnboundedSender<Reply>,
    filled: bool,
}

impl ReplySlot {
    fn new(ticket: Ticket, tx: mpsc::UnboundedSender<Reply>) -> Self {
        Self {
            ticket,
            tx,
            filled: false,
        }
    }

    fn fill(mut self, outcome: Result<String, GatewayError>) {
        self.filled = true;
        self.deliver(outcome);
    }

    fn deliver(&self, outcome: Result<String, GatewayError>) {
        let reply = Reply {
            ticket: self.ticket,
            outcome,
        };
        if self.tx.send(reply).is_err() {
            debug!(ticket = ?self.ticket, "presentation gone, discarding late reply");
        }
    }
}

impl Drop for ReplySlot {
    fn drop(&mut self) {
        if !self.filled {
            warn!(ticket = ?self.ticket, "completion task ended without a reply");
            let failure = GatewayFailure::Network("completion task aborted".into());
            self.deliver(Err(failure.into()));
        }
    }
}
