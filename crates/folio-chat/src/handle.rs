//! Imperative control surface for the floating widget.
//!
//! A page-level launcher holds a `WidgetHandle` and drives the widget
//! with three commands, without seeing its state machine. Commands are
//! applied the next time the widget polls.

use std::sync::mpsc;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCommand {
    Open,
    Close,
    ToggleMinimize,
}

#[derive(Debug, Clone)]
pub struct WidgetHandle {
    tx: mpsc::Sender<WidgetCommand>,
}

impl WidgetHandle {
    pub(crate) fn new(tx: mpsc::Sender<WidgetCommand>) -> Self {
        Self { tx }
    }

    pub fn open(&self) {
        self.send(WidgetCommand::Open);
    }

    pub fn close(&self) {
        self.send(WidgetCommand::Close);
    }

    pub fn toggle_minimize(&self) {
        self.send(WidgetCommand::ToggleMinimize);
    }

    fn send(&self, command: WidgetCommand) {
        if self.tx.send(command).is_err() {
            debug!(?command, "widget unmounted, dropping command");
        }
    }
}
