//! Full-page assistant: quick-action landing, then a scrolling transcript.

use std::sync::Arc;

use folio_ai::CompletionGateway;
use folio_config::FolioConfig;
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::info;

use crate::conversation::{Conversation, SubmitError};
use crate::dispatch::ReplyDispatcher;
use crate::quick_action::QuickAction;
use crate::shell::AssistantCore;
use crate::store::Session;
use crate::view::PageView;

/// Layout phase. `Landing` shows the quick actions; once the first
/// submission happens the page is `Conversing` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Landing,
    Conversing,
}

pub struct FullPageAssistant {
    core: AssistantCore,
    quick_actions: Vec<QuickAction>,
}

impl FullPageAssistant {
    /// Mount the page with an empty transcript.
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        runtime: Handle,
        quick_actions: Vec<QuickAction>,
    ) -> Self {
        let dispatcher = ReplyDispatcher::new(gateway, runtime);
        Self {
            core: AssistantCore::new(Conversation::new(), dispatcher),
            quick_actions,
        }
    }

    pub fn from_config(
        config: &FolioConfig,
        gateway: Arc<dyn CompletionGateway>,
        runtime: Handle,
    ) -> Self {
        let actions = config.quick_actions.iter().map(QuickAction::from).collect();
        Self::new(gateway, runtime, actions)
    }

    pub fn phase(&self) -> Phase {
        if self.core.session().has_started() {
            Phase::Conversing
        } else {
            Phase::Landing
        }
    }

    /// Quick actions currently on offer; empty once conversing.
    pub fn quick_actions(&self) -> &[QuickAction] {
        match self.phase() {
            Phase::Landing => self.quick_actions.as_slice(),
            Phase::Conversing => &[],
        }
    }

    /// Same as typing and submitting the action's prompt.
    pub fn select_quick_action(&mut self, id: &str) -> Result<(), SubmitError> {
        if self.phase() != Phase::Landing {
            return Err(SubmitError::QuickActionsUnavailable);
        }
        let prompt = self
            .quick_actions
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.prompt_text.clone())
            .ok_or_else(|| SubmitError::UnknownQuickAction(id.to_string()))?;

        self.submit_text(&prompt)
    }

    pub fn submit_input(&mut self) -> Result<(), SubmitError> {
        let was_landing = self.phase() == Phase::Landing;
        self.core.submit_input()?;
        self.log_transition(was_landing);
        Ok(())
    }

    pub fn submit_text(&mut self, text: &str) -> Result<(), SubmitError> {
        let was_landing = self.phase() == Phase::Landing;
        self.core.submit_text(text)?;
        self.log_transition(was_landing);
        Ok(())
    }

    pub fn poll(&mut self) -> bool {
        self.core.poll()
    }

    pub async fn settle(&mut self) {
        self.core.settle().await;
    }

    pub fn core(&self) -> &AssistantCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut AssistantCore {
        &mut self.core
    }

    pub fn session(&self) -> &Session {
        self.core.session()
    }

    pub fn render(&self) -> PageView {
        PageView {
            phase: self.phase(),
            quick_actions: self.quick_actions().to_vec(),
            transcript: self.core.render(),
        }
    }

    fn log_transition(&self, was_landing: bool) {
        if was_landing && self.phase() == Phase::Conversing {
            info!("conversation started");
        }
    }
}
