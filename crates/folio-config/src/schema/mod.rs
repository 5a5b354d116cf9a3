//! Configuration schema types for Folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod gateway;
mod quick_actions;
mod system;

pub use assistant::*;
pub use gateway::*;
pub use quick_actions::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub assistant: AssistantConfig,
    pub gateway: GatewayConfig,
    /// Display order is list order.
    pub quick_actions: Vec<QuickActionConfig>,
    pub logging: LoggingConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig::default(),
            gateway: GatewayConfig::default(),
            quick_actions: default_quick_actions(),
            logging: LoggingConfig::default(),
        }
    }
}
