//! Validation for the assistant and gateway sections.

use crate::schema::FolioConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate persona constraints.
pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_not_blank(errors, "assistant.persona_prompt", &config.assistant.persona_prompt);
    validate_not_blank(errors, "assistant.greeting", &config.assistant.greeting);
    validate_range(
        errors,
        "assistant.max_reply_words",
        config.assistant.max_reply_words,
        10,
        2000,
    );
}

/// Validate the completion endpoint URL.
pub(crate) fn validate_gateway(errors: &mut Vec<String>, config: &FolioConfig) {
    let endpoint = config.gateway.endpoint.trim();
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        errors.push(format!(
            "gateway.endpoint = {endpoint:?} must be an http:// or https:// URL"
        ));
    }
}
