//! CLI flags layered on top of file and environment configuration.

use super::MergeConfig;
use crate::domain::GroupOrder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `-n/--no-override` can only switch override off, never back on.
    pub no_override: bool,
    pub group_order: Option<GroupOrder>,
}

impl MergeConfig {
    pub fn with_overrides(mut self, cli: &CliOverrides) -> Self {
        if cli.no_override {
            self.no_override = true;
        }
        if let Some(order) = cli.group_order {
            self.group_order = order;
        }
        self
    }
}
