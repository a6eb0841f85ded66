//! Core data model shared by the parser, the writer and the merge driver.

pub mod settings;

pub use settings::{Group, GroupOrder, OverridePolicy, Settings, DEFAULT_GROUP};
