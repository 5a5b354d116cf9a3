use std::time::Duration;

use tokio::runtime::Handle;

use super::gateway_stub::{ScriptedGateway, Step};
use crate::{FullPageAssistant, Phase, QuickAction, Sender, SubmitError, Turn, FALLBACK_MESSAGE};

fn actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("about", "Tell me about Rachid"),
        QuickAction::new("projects", "Show his projects"),
    ]
}

fn page(gateway: std::sync::Arc<ScriptedGateway>) -> FullPageAssistant {
    FullPageAssistant::new(gateway, Handle::current(), actions())
}

fn texts(page: &FullPageAssistant) -> Vec<(Sender, String)> {
    page.session()
        .transcript()
        .iter()
        .map(|t: &Turn| (t.sender(), t.text().to_string()))
        .collect()
}

#[tokio::test]
async fn mounts_in_landing_with_quick_actions() {
    let page = page(ScriptedGateway::new([]));
    assert_eq!(page.phase(), Phase::Landing);
    assert_eq!(page.quick_actions().len(), 2);
    assert!(page.session().is_empty());

    let view = page.render();
    assert_eq!(view.phase, Phase::Landing);
    assert_eq!(view.quick_actions, actions());
    assert!(!view.transcript.can_send);
}

#[tokio::test]
async fn n_exchanges_yield_2n_turns_in_order() {
    let gateway = ScriptedGateway::repeating("ok", 5);
    let mut page = page(gateway.clone());

    for i in 0..5 {
        page.submit_text(&format!("question {i}")).unwrap();
        page.settle().await;
    }

    let t = texts(&page);
    assert_eq!(t.len(), 10);
    for i in 0..5 {
        assert_eq!(t[2 * i], (Sender::User, format!("question {i}")));
        assert_eq!(t[2 * i + 1], (Sender::Assistant, "ok".to_string()));
    }
    assert_eq!(gateway.requests().len(), 5);
}

#[tokio::test]
async fn gateway_failure_yields_user_turn_and_fallback() {
    let mut page = page(ScriptedGateway::new([Step::Fail]));

    page.submit_text("Tell me about Rachid").unwrap();
    assert!(page.session().is_composing());
    page.settle().await;

    assert_eq!(
        texts(&page),
        vec![
            (Sender::User, "Tell me about Rachid".to_string()),
            (Sender::Assistant, FALLBACK_MESSAGE.to_string()),
        ]
    );
    assert!(!page.session().is_composing());
}

#[tokio::test]
async fn successful_reply_is_stored_verbatim() {
    let mut page = page(ScriptedGateway::new([Step::Reply("Hello!")]));
    page.submit_text("Hi").unwrap();
    page.settle().await;
    assert_eq!(page.session().last().unwrap().text(), "Hello!");
}

#[tokio::test]
async fn empty_reply_becomes_placeholder() {
    let mut page = page(ScriptedGateway::new([Step::Reply("")]));
    page.submit_text("Hi").unwrap();
    page.settle().await;
    assert_eq!(
        page.session().last().unwrap().text(),
        folio_ai::EMPTY_REPLY_PLACEHOLDER
    );
}

#[tokio::test]
async fn quick_action_matches_typed_submission() {
    let quick_gw = ScriptedGateway::new([Step::Reply("Here they are.")]);
    let mut quick = page(quick_gw.clone());
    quick.select_quick_action("projects").unwrap();
    quick.settle().await;

    let typed_gw = ScriptedGateway::new([Step::Reply("Here they are.")]);
    let mut typed = page(typed_gw.clone());
    typed.core_mut().input_mut().set("Show his projects");
    typed.submit_input().unwrap();
    typed.settle().await;

    assert_eq!(texts(&quick), texts(&typed));
    assert_eq!(quick_gw.requests(), typed_gw.requests());
}

#[tokio::test]
async fn started_latches_once_and_hides_quick_actions() {
    let mut page = page(ScriptedGateway::repeating("ok", 2));

    page.select_quick_action("about").unwrap();
    assert_eq!(page.phase(), Phase::Conversing);
    assert!(page.quick_actions().is_empty());
    page.settle().await;

    assert_eq!(
        page.select_quick_action("projects").unwrap_err(),
        SubmitError::QuickActionsUnavailable
    );

    page.submit_text("more").unwrap();
    page.settle().await;
    assert_eq!(page.phase(), Phase::Conversing);
    assert!(page.render().quick_actions.is_empty());
}

#[tokio::test]
async fn unknown_quick_action_is_rejected() {
    let mut page = page(ScriptedGateway::new([]));
    assert_eq!(
        page.select_quick_action("nope").unwrap_err(),
        SubmitError::UnknownQuickAction("nope".into())
    );
    assert_eq!(page.phase(), Phase::Landing);
}

#[tokio::test]
async fn empty_input_keeps_landing_and_input() {
    let mut page = page(ScriptedGateway::new([]));
    page.core_mut().input_mut().set("   ");
    assert_eq!(page.submit_input().unwrap_err(), SubmitError::EmptyInput);
    assert_eq!(page.phase(), Phase::Landing);
    assert_eq!(page.core().input().text(), "   ");
}

#[tokio::test]
async fn input_is_cleared_before_reply_arrives() {
    let mut page = page(ScriptedGateway::new([Step::Slow(
        Duration::from_millis(20),
        "done",
    )]));
    page.core_mut().input_mut().set("Hi");
    page.submit_input().unwrap();

    let view = page.render();
    assert_eq!(view.transcript.input, "");
    assert!(view.transcript.composing);
    assert_eq!(view.transcript.turns.len(), 1);

    page.settle().await;
    assert!(!page.render().transcript.composing);
}

#[tokio::test]
async fn rerender_does_not_mutate_transcript() {
    let mut page = page(ScriptedGateway::new([Step::Reply("**bold** reply")]));
    page.submit_text("Hi").unwrap();
    page.settle().await;

    let first = page.render();
    let second = page.render();
    assert_eq!(first, second);
    assert_eq!(page.session().len(), 2);
    assert!(first.transcript.turns[1].html.contains("<strong>bold</strong>"));
}

#[tokio::test]
async fn rapid_double_submit_keeps_replies_after_their_questions() {
    let gateway = ScriptedGateway::new([
        Step::Slow(Duration::from_millis(30), "answer one"),
        Step::Reply("answer two"),
    ]);
    let mut page = page(gateway.clone());

    page.submit_text("one").unwrap();
    page.submit_text("two").unwrap();
    // The second question waits for the first reply.
    assert_eq!(page.session().len(), 1);
    page.settle().await;

    let t: Vec<_> = texts(&page).into_iter().map(|(_, s)| s).collect();
    assert_eq!(t, ["one", "answer one", "two", "answer two"]);

    let requests = gateway.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].len(), 3);
}

#[tokio::test]
async fn poll_commits_arrived_replies() {
    let mut page = page(ScriptedGateway::new([Step::Reply("hey")]));
    page.submit_text("Hi").unwrap();

    let mut changed = false;
    for _ in 0..50 {
        tokio::task::yield_now().await;
        if page.poll() {
            changed = true;
            break;
        }
    }
    assert!(changed);
    assert_eq!(page.session().len(), 2);
    assert!(!page.poll());
}

#[tokio::test]
async fn scroll_returns_to_latest_on_new_turn() {
    let mut page = page(ScriptedGateway::repeating("ok", 2));
    page.submit_text("a").unwrap();
    page.settle().await;

    page.core_mut().scroll_up(1);
    assert_eq!(page.render().transcript.scroll_offset, 1);

    page.submit_text("b").unwrap();
    assert_eq!(page.render().transcript.scroll_offset, 0);
    page.settle().await;
}

#[tokio::test]
async fn late_reply_after_unmount_is_discarded() {
    let gateway = ScriptedGateway::new([Step::Slow(Duration::from_millis(10), "too late")]);
    let mut page = page(gateway.clone());
    page.submit_text("Hi").unwrap();
    drop(page);

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(gateway.requests().len(), 1);
}

#[tokio::test]
async fn panicking_gateway_still_ends_composing() {
    let gateway = ScriptedGateway::new([Step::Panic, Step::Reply("back again")]);
    let mut page = page(gateway.clone());

    page.submit_text("Tell me about Rachid").unwrap();
    tokio::time::timeout(Duration::from_secs(2), page.settle())
        .await
        .expect("settles after the task dies");

    assert!(!page.session().is_composing());
    assert!(page.core().is_idle());
    assert_eq!(
        texts(&page),
        [
            (Sender::User, "Tell me about Rachid".to_string()),
            (Sender::Assistant, FALLBACK_MESSAGE.to_string()),
        ]
    );

    page.submit_text("Show his projects").unwrap();
    tokio::time::timeout(Duration::from_secs(2), page.settle())
        .await
        .expect("next submission runs");
    assert_eq!(page.session().len(), 4);
    assert_eq!(page.session().last().unwrap().text(), "back again");
}

#[tokio::test]
async fn queued_submissions_are_visible_until_they_start() {
    let gateway = ScriptedGateway::new([
        Step::Slow(Duration::from_millis(30), "answer one"),
        Step::Reply("answer two"),
    ]);
    let mut page = page(gateway);

    page.submit_text("one").unwrap();
    page.core_mut().input_mut().set("two");
    page.submit_input().unwrap();

    let view = page.render();
    assert_eq!(view.transcript.input, "");
    assert_eq!(view.transcript.queued, ["two"]);

    page.settle().await;
    assert!(page.render().transcript.queued.is_empty());
}
