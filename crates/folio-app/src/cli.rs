use clap::{Parser, Subcommand};

/// Folio: the portfolio site's conversational assistant, in a terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Completion endpoint override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print assistant replies as rendered HTML instead of raw text.
    #[arg(long)]
    pub html: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-page assistant: quick actions, then the conversation.
    Page,
    /// Floating widget: /open, /min and /close drive the panel.
    Widget,
}

pub fn parse() -> Args {
    Args::parse()
}
