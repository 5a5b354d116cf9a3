//! Turn text to HTML.
//!
//! Assistant text is lightweight markdown (emphasis, lists, links) and
//! is rendered; raw HTML inside it is shown as text. User text is never
//! interpreted as markup.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::store::{Sender, Turn};

/// Render a turn according to its sender.
pub fn render_turn(turn: &Turn) -> String {
    match turn.sender() {
        Sender::Assistant => render_assistant(turn.text()),
        Sender::User => render_user(turn.text()),
    }
}

pub fn render_assistant(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Escaped plain text in a single paragraph; line breaks are kept.
pub fn render_user(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    out.push_str("<p>");
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push_str("<br />");
        }
        html::push_html(&mut out, std::iter::once(Event::Text(line.into())));
    }
    out.push_str("</p>");
    out
}
