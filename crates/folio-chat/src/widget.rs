//! Floating widget assistant.
//!
//! Visibility machine:
//!
//! ```text
//! Closed --open--> Open --minimize--> Minimized --open--> Open --close--> Closed
//! ```
//!
//! Hiding the panel never touches the session. The session itself is
//! created on the first transition into `Open`, seeded with the
//! greeting, and reused on every later open of the same widget.

use std::sync::mpsc;
use std::sync::Arc;

use folio_ai::CompletionGateway;
use folio_config::FolioConfig;
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::conversation::{Conversation, SubmitError};
use crate::dispatch::ReplyDispatcher;
use crate::handle::{WidgetCommand, WidgetHandle};
use crate::shell::AssistantCore;
use crate::store::Session;
use crate::view::WidgetView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Closed,
    Open,
    Minimized,
}

pub struct WidgetAssistant {
    title: String,
    greeting: String,
    gateway: Arc<dyn CompletionGateway>,
    runtime: Handle,
    visibility: Visibility,
    core: Option<AssistantCore>,
    command_tx: mpsc::Sender<WidgetCommand>,
    command_rx: mpsc::Receiver<WidgetCommand>,
}

impl WidgetAssistant {
    /// Mount the widget closed, with no session yet.
    pub fn new(
        title: impl Into<String>,
        greeting: impl Into<String>,
        gateway: Arc<dyn CompletionGateway>,
        runtime: Handle,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::channel();
        Self {
            title: title.into(),
            greeting: greeting.into(),
            gateway,
            runtime,
            visibility: Visibility::Closed,
            core: None,
            command_tx,
            command_rx,
        }
    }

    pub fn from_config(
        config: &FolioConfig,
        gateway: Arc<dyn CompletionGateway>,
        runtime: Handle,
    ) -> Self {
        Self::new(
            config.assistant.name.clone(),
            config.assistant.greeting.clone(),
            gateway,
            runtime,
        )
    }

    /// A handle a launcher can use to drive this widget.
    pub fn handle(&self) -> WidgetHandle {
        WidgetHandle::new(self.command_tx.clone())
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn open(&mut self) {
        if self.core.is_none() {
            let dispatcher = ReplyDispatcher::new(Arc::clone(&self.gateway), self.runtime.clone());
            self.core = Some(AssistantCore::new(
                Conversation::with_greeting(self.greeting.clone()),
                dispatcher,
            ));
            info!("assistant widget session created");
        }
        self.set_visibility(Visibility::Open);
    }

    pub fn close(&mut self) {
        self.set_visibility(Visibility::Closed);
    }

    /// Only an open panel can be minimized.
    pub fn minimize(&mut self) {
        if self.visibility == Visibility::Open {
            self.set_visibility(Visibility::Minimized);
        }
    }

    pub fn toggle_minimize(&mut self) {
        match self.visibility {
            Visibility::Open => self.minimize(),
            Visibility::Minimized => self.open(),
            Visibility::Closed => debug!("toggle_minimize ignored while closed"),
        }
    }

    /// Submit the input box; only possible while the panel is open.
    pub fn submit_input(&mut self) -> Result<(), SubmitError> {
        self.open_core()?.submit_input()
    }

    pub fn submit_text(&mut self, text: &str) -> Result<(), SubmitError> {
        self.open_core()?.submit_text(text)
    }

    /// Apply launcher commands, then commit arrived replies. Replies
    /// keep landing while the panel is hidden.
    pub fn poll(&mut self) -> bool {
        let mut changed = self.apply_commands();
        if let Some(core) = self.core.as_mut() {
            changed |= core.poll();
        }
        changed
    }

    pub async fn settle(&mut self) {
        self.apply_commands();
        if let Some(core) = self.core.as_mut() {
            core.settle().await;
        }
    }

    /// `None` until the widget has been opened once.
    pub fn session(&self) -> Option<&Session> {
        self.core.as_ref().map(AssistantCore::session)
    }

    pub fn core_mut(&mut self) -> Option<&mut AssistantCore> {
        self.core.as_mut()
    }

    pub fn render(&self) -> WidgetView {
        let transcript = match (self.visibility, self.core.as_ref()) {
            (Visibility::Open, Some(core)) => Some(core.render()),
            _ => None,
        };
        WidgetView {
            visibility: self.visibility,
            title: self.title.clone(),
            transcript,
        }
    }

    fn apply_commands(&mut self) -> bool {
        let mut applied = false;
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                WidgetCommand::Open => self.open(),
                WidgetCommand::Close => self.close(),
                WidgetCommand::ToggleMinimize => self.toggle_minimize(),
            }
            applied = true;
        }
        applied
    }

    fn open_core(&mut self) -> Result<&mut AssistantCore, SubmitError> {
        if self.visibility != Visibility::Open {
            return Err(SubmitError::PanelHidden);
        }
        self.core.as_mut().ok_or(SubmitError::PanelHidden)
    }

    fn set_visibility(&mut self, next: Visibility) {
        if self.visibility != next {
            debug!(from = ?self.visibility, to = ?next, "widget visibility");
            self.visibility = next;
        }
    }
}
