//! Error types for reading, writing and merging INI files.

use std::path::PathBuf;
use thiserror::Error;

/// Failures touching a single INI file.
#[derive(Debug, Error)]
pub enum IniError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be opened or written.
    #[error("unable to open file \"{}\" for writing: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures that abort a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// An output target plus at least one input is required.
    #[error("too few files: expected an output file and at least one input file")]
    TooFewFiles,
}

/// Convenience alias for results with [`MergeError`].
pub type Result<T> = std::result::Result<T, MergeError>;
