//! Read-only snapshots handed to whatever draws the assistant.

use folio_common::TurnId;
use serde::Serialize;

use crate::full_page::Phase;
use crate::markdown::render_turn;
use crate::quick_action::QuickAction;
use crate::store::{Sender, Turn};
use crate::widget::Visibility;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTurn {
    pub id: TurnId,
    pub sender: Sender,
    pub html: String,
}

impl From<&Turn> for RenderedTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            id: turn.id().clone(),
            sender: turn.sender(),
            html: render_turn(turn),
        }
    }
}

/// Transcript area, typing indicator and input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptView {
    pub turns: Vec<RenderedTurn>,
    /// Show the typing indicator.
    pub composing: bool,
    /// Submitted texts not yet in the transcript, oldest first.
    pub queued: Vec<String>,
    pub input: String,
    pub can_send: bool,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub phase: Phase,
    /// Empty once the conversation has started.
    pub quick_actions: Vec<QuickAction>,
    pub transcript: TranscriptView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub visibility: Visibility,
    pub title: String,
    /// `None` while the panel is hidden.
    pub transcript: Option<TranscriptView>,
}
