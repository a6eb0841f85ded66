//! ini-merge: merge several INI configuration files into one.
//!
//! Files are parsed line by line into a single settings model keyed by
//! `(group, key)`, conflicts are resolved with an [`OverridePolicy`], and
//! the result is written back as canonical INI with the `[General]` group
//! first.

pub mod config;
pub mod domain;
pub mod error;
pub mod ini;
pub mod merge;
pub mod utils;

pub use domain::{GroupOrder, OverridePolicy, Settings, DEFAULT_GROUP};
pub use error::{IniError, MergeError};
pub use ini::{parse_bytes, parse_file, parse_str, render, write_file, RenderOptions};
pub use merge::{merge_files, MergeReport, MergeRequest};
