//! Line-oriented terminal driver for both presentations.
//!
//! Each line is one submission. Slash commands select quick actions
//! (page) or drive the panel through a `WidgetHandle` (widget).

use folio_chat::{
    FullPageAssistant, RenderedTurn, Sender, Session, SubmitError, Visibility, WidgetAssistant,
};
use folio_common::FolioError;
use tokio::io::{AsyncBufReadExt, BufReader};

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    QuickAction(usize),
    Open,
    Close,
    Minimize,
    Say(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    match line.trim() {
        "/quit" | "/exit" => Command::Quit,
        "/open" => Command::Open,
        "/close" => Command::Close,
        "/min" => Command::Minimize,
        other => match other.strip_prefix('/').and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => Command::QuickAction(n),
            None => Command::Say(other),
        },
    }
}

/// Format turns `from..` for the terminal; returns the new watermark.
fn format_new_turns(session: &Session, from: usize, html: bool, out: &mut Vec<String>) -> usize {
    for turn in session.transcript().iter().skip(from) {
        let line = match (turn.sender(), html) {
            (Sender::User, _) => format!("you> {}", turn.text()),
            (Sender::Assistant, false) => format!("assistant> {}", turn.text()),
            (Sender::Assistant, true) => {
                format!("assistant> {}", RenderedTurn::from(turn).html.trim_end())
            }
        };
        out.push(line);
    }
    session.len()
}

fn print_new_turns(session: &Session, from: usize, html: bool) -> usize {
    let mut lines = Vec::new();
    let printed = format_new_turns(session, from, html, &mut lines);
    for line in lines {
        println!("{line}");
    }
    printed
}

fn report(err: &SubmitError) {
    match err {
        SubmitError::EmptyInput => {}
        other => println!("! {other}"),
    }
}

pub(crate) async fn run_page(mut page: FullPageAssistant, html: bool) -> Result<(), FolioError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut printed = 0;

    println!("Ask anything, or pick a quick action:");
    for (i, action) in page.quick_actions().iter().enumerate() {
        println!("  /{}  {}", i + 1, action.prompt_text);
    }

    while let Some(line) = lines.next_line().await? {
        let result = match parse_line(&line) {
            Command::Quit => break,
            Command::QuickAction(n) => {
                let id = n
                    .checked_sub(1)
                    .and_then(|i| page.quick_actions().get(i))
                    .map(|a| a.id.clone());
                match id {
                    Some(id) => page.select_quick_action(&id),
                    None if page.quick_actions().is_empty() => {
                        Err(SubmitError::QuickActionsUnavailable)
                    }
                    None => Err(SubmitError::UnknownQuickAction(format!("/{n}"))),
                }
            }
            Command::Open | Command::Close | Command::Minimize => {
                println!("! panel commands only apply to the widget");
                continue;
            }
            Command::Say(text) => {
                page.core_mut().input_mut().set(text);
                page.submit_input()
            }
        };

        if let Err(e) = result {
            report(&e);
            continue;
        }

        printed = print_new_turns(page.session(), printed, html);
        if page.session().is_composing() {
            println!("  ...");
        }
        page.settle().await;
        printed = print_new_turns(page.session(), printed, html);
    }

    Ok(())
}

pub(crate) async fn run_widget(mut widget: WidgetAssistant, html: bool) -> Result<(), FolioError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let launcher = widget.handle();
    let mut printed = 0;

    println!("Widget is closed. /open, /min, /close, /quit.");

    while let Some(line) = lines.next_line().await? {
        let before = widget.visibility();
        match parse_line(&line) {
            Command::Quit => break,
            Command::Open => launcher.open(),
            Command::Close => launcher.close(),
            Command::Minimize => launcher.toggle_minimize(),
            Command::QuickAction(_) => {
                println!("! quick actions are only offered on the full page");
                continue;
            }
            Command::Say(text) => {
                if widget.visibility() == Visibility::Open {
                    if let Some(core) = widget.core_mut() {
                        core.input_mut().set(text);
                    }
                }
                if let Err(e) = widget.submit_input() {
                    report(&e);
                    continue;
                }
            }
        }
        widget.poll();

        let after = widget.visibility();
        if after != before {
            println!("[{}]", visibility_label(after));
            if after == Visibility::Open {
                printed = 0;
            }
        }
        if after != Visibility::Open {
            continue;
        }

        if let Some(session) = widget.session() {
            printed = print_new_turns(session, printed, html);
            if session.is_composing() {
                println!("  ...");
            }
        }
        widget.settle().await;
        if let Some(session) = widget.session() {
            printed = print_new_turns(session, printed, html);
        }
    }

    Ok(())
}

fn visibility_label(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Closed => "closed",
        Visibility::Open => "open",
        Visibility::Minimized => "minimized",
    }
}
