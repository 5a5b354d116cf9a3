//! Canned conversation starters.

use folio_config::schema::QuickActionConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: String,
    pub prompt_text: String,
}

impl QuickAction {
    pub fn new(id: impl Into<String>, prompt_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt_text: prompt_text.into(),
        }
    }
}

impl From<&QuickActionConfig> for QuickAction {
    fn from(config: &QuickActionConfig) -> Self {
        Self::new(config.id.clone(), config.prompt_text.clone())
    }
}
