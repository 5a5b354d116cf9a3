//! Assistant persona configuration.

use serde::{Deserialize, Serialize};

/// Persona and reply-shaping settings sent with every completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Display name shown in the panel header.
    pub name: String,
    /// System instruction prepended to every request.
    pub persona_prompt: String,
    /// Reply length cap (valid range: 10-2000 words).
    pub max_reply_words: u32,
    /// First assistant turn synthesized when the widget opens.
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Rachid's assistant".into(),
            persona_prompt: "You are the assistant on Rachid's portfolio site. \
                             Answer questions about Rachid, his projects, his services \
                             and how to contact him. Be friendly and concise."
                .into(),
            max_reply_words: 150,
            greeting: "Hi! I'm Rachid's assistant. Ask me about his work, \
                       his projects, or how to get in touch."
                .into(),
        }
    }
}

impl AssistantConfig {
    /// The full system instruction, persona plus the length cap.
    pub fn system_instruction(&self) -> String {
        format!(
            "{}\nKeep every reply under {} words.",
            self.persona_prompt.trim_end(),
            self.max_reply_words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_carries_length_cap() {
        let config = AssistantConfig {
            persona_prompt: "You are helpful.  ".into(),
            max_reply_words: 42,
            ..Default::default()
        };
        assert_eq!(
            config.system_instruction(),
            "You are helpful.\nKeep every reply under 42 words."
        );
    }
}
