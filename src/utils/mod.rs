//! Shared utilities.

pub mod encoding;
pub mod paths;

pub use encoding::{normalize_bom, read_source};
pub use paths::display_path;
