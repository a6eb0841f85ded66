//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

pub mod loader;
pub mod overrides;

pub use loader::{load_config, ENV_PREFIX};
pub use overrides::CliOverrides;

use crate::domain::{GroupOrder, OverridePolicy};
use crate::ini::RenderOptions;
use serde::{Deserialize, Serialize};

/// Effective settings for one merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Keep the first value seen for a key instead of the last.
    pub no_override: bool,
    pub group_order: GroupOrder,
    /// Write a `[General]` header even when no General entries exist.
    pub emit_empty_general: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self { no_override: false, group_order: GroupOrder::FirstSeen, emit_empty_general: true }
    }
}

impl MergeConfig {
    pub fn policy(&self) -> OverridePolicy {
        OverridePolicy::from_no_override(self.no_override)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { group_order: self.group_order, emit_empty_general: self.emit_empty_general }
    }
}
