//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Folio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
# name = "Rachid's assistant"
# persona_prompt = "You are the assistant on Rachid's portfolio site. ..."
# max_reply_words = 150     # 10-2000
# greeting = "Hi! I'm Rachid's assistant. Ask me about his work, his projects, or how to get in touch."

[gateway]
# endpoint = "http://127.0.0.1:8787/api/chat"
# api_token = ""            # FOLIO_API_TOKEN overrides

# Quick actions are shown before the first message, in this order.
# Declaring any [[quick_actions]] replaces the built-in list.
# [[quick_actions]]
# id = "about"
# prompt_text = "Tell me about Rachid"

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
