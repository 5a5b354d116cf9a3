//! Input box and scroll position shared by both presentations.

/// The text field the visitor types into.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    text: String,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Take the current input text, clearing the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the send affordance is enabled.
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Distance, in turns, from the newest turn. Zero means pinned to the
/// latest turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    offset: usize,
}

impl Scroll {
    pub fn scroll_up(&mut self, n: usize, turns: usize) {
        self.offset = self.offset.saturating_add(n).min(turns.saturating_sub(1));
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn to_latest(&mut self) {
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}
