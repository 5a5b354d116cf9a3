//! Validation for the quick-action list.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::schema::FolioConfig;

use super::helpers::validate_not_blank;

static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap());

/// Ids must be slug-like and unique; prompts must be non-empty.
pub(crate) fn validate_quick_actions(errors: &mut Vec<String>, config: &FolioConfig) {
    let mut seen = HashSet::new();
    for (i, action) in config.quick_actions.iter().enumerate() {
        if !ID_RE.is_match(&action.id) {
            errors.push(format!(
                "quick_actions[{i}].id = {:?} must match [a-z0-9][a-z0-9_-]*",
                action.id
            ));
        }
        if !seen.insert(action.id.as_str()) {
            errors.push(format!("quick_actions[{i}].id = {:?} is a duplicate", action.id));
        }
        validate_not_blank(
            errors,
            &format!("quick_actions[{i}].prompt_text"),
            &action.prompt_text,
        );
    }
}
