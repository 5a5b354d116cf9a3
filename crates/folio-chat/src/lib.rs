//! Conversational assistant session for the Folio portfolio site.
//!
//! - [`store`]: append-only transcript with composing/started flags
//! - [`conversation`]: the submission algorithm and request queue
//! - [`dispatch`]: background gateway calls, replies polled back in
//! - [`full_page`] and [`widget`]: the two presentation shells
//! - [`shell`]: state both shells share (conversation, input, scroll)
//! - [`handle`]: open/close/minimize surface for a page launcher
//! - [`markdown`]: assistant markup rendering, user text escaping

pub mod conversation;
pub mod dispatch;
pub mod full_page;
pub mod handle;
pub mod markdown;
pub mod panel;
pub mod quick_action;
pub mod shell;
pub mod store;
pub mod view;
pub mod widget;

#[cfg(test)]
mod tests;

pub use conversation::{Conversation, SubmitError, FALLBACK_MESSAGE};
pub use full_page::{FullPageAssistant, Phase};
pub use handle::{WidgetCommand, WidgetHandle};
pub use quick_action::QuickAction;
pub use shell::AssistantCore;
pub use store::{Sender, Session, Turn};
pub use view::{PageView, RenderedTurn, TranscriptView, WidgetView};
pub use widget::{Visibility, WidgetAssistant};
