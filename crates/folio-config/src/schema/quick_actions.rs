//! Quick-action configuration types.

use serde::{Deserialize, Serialize};

/// A canned prompt offered before the conversation starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickActionConfig {
    pub id: String,
    pub prompt_text: String,
}

impl QuickActionConfig {
    pub fn new(id: impl Into<String>, prompt_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt_text: prompt_text.into(),
        }
    }
}

/// The built-in quick actions, in display order.
pub fn default_quick_actions() -> Vec<QuickActionConfig> {
    vec![
        QuickActionConfig::new("about", "Tell me about Rachid"),
        QuickActionConfig::new("projects", "Show his projects"),
        QuickActionConfig::new("services", "What services does he offer?"),
        QuickActionConfig::new("contact", "How can I contact him?"),
    ]
}
