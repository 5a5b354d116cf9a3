//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FolioConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_reply_cap_too_small() {
    let mut config = FolioConfig::default();
    config.assistant.max_reply_words = 3;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.max_reply_words"));
}

#[test]
fn catches_blank_greeting() {
    let mut config = FolioConfig::default();
    config.assistant.greeting = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.greeting"));
}

#[test]
fn catches_non_http_endpoint() {
    let mut config = FolioConfig::default();
    config.gateway.endpoint = "ftp://example.com/chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.endpoint"));
}

#[test]
fn catches_bad_quick_action_id() {
    let mut config = FolioConfig::default();
    config.quick_actions = vec![QuickActionConfig::new("Has Spaces", "Hello")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("quick_actions[0].id"));
}

#[test]
fn catches_duplicate_quick_action_id() {
    let mut config = FolioConfig::default();
    config.quick_actions = vec![
        QuickActionConfig::new("about", "Tell me about Rachid"),
        QuickActionConfig::new("about", "Who is he?"),
    ];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate"));
}

#[test]
fn catches_blank_prompt_text() {
    let mut config = FolioConfig::default();
    config.quick_actions = vec![QuickActionConfig::new("empty", "")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("quick_actions[0].prompt_text"));
}

#[test]
fn empty_quick_action_list_is_allowed() {
    let mut config = FolioConfig::default();
    config.quick_actions.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = FolioConfig::default();
    config.assistant.max_reply_words = 0;
    config.gateway.endpoint = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.max_reply_words"));
    assert!(err.contains("gateway.endpoint"));
    assert!(err.contains("; "));
}
