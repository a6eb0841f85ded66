//! Merge driver: read every file into one model, then write the output.
//!
//! The output path is read first so its current contents seed the model,
//! then each input is applied in order under the requested override policy.

pub mod report;

use crate::domain::{OverridePolicy, Settings};
use crate::error::{IniError, MergeError, Result};
use crate::ini::{parse_file, write_file, ParseStats, RenderOptions};
use crate::utils::display_path;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Everything one merge run needs.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub output: PathBuf,
    pub inputs: Vec<PathBuf>,
    pub policy: OverridePolicy,
    pub render: RenderOptions,
}

impl MergeRequest {
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Self {
        Self {
            output: output.into(),
            inputs,
            policy: OverridePolicy::default(),
            render: RenderOptions::default(),
        }
    }

    pub fn policy(mut self, policy: OverridePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Role a file played in the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    /// The output target, read first to seed the model.
    Seed,
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Parsed(ParseStats),
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub role: FileRole,
    pub outcome: FileOutcome,
}

/// Summary of one merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub output: String,
    pub policy: OverridePolicy,
    pub files: Vec<FileReport>,
    pub entries: usize,
    pub groups: usize,
    /// `false` when the output file could not be written.
    pub written: bool,
}

impl MergeReport {
    pub fn files_skipped(&self) -> usize {
        self.files.iter().filter(|f| matches!(f.outcome, FileOutcome::Skipped { .. })).count()
    }
}

/// Read `output` and every input into one model, applying `policy`.
pub fn merge_settings(
    output: &Path,
    inputs: &[PathBuf],
    policy: OverridePolicy,
) -> (Settings, Vec<FileReport>) {
    let mut settings = Settings::new();
    let mut files = Vec::with_capacity(inputs.len() + 1);

    files.push(read_one(output, FileRole::Seed, policy, &mut settings));
    for input in inputs {
        files.push(read_one(input, FileRole::Input, policy, &mut settings));
    }

    (settings, files)
}

fn read_one(
    path: &Path,
    role: FileRole,
    policy: OverridePolicy,
    settings: &mut Settings,
) -> FileReport {
    let outcome = match parse_file(path, policy, settings) {
        Ok(stats) => FileOutcome::Parsed(stats),
        Err(e) => {
            match role {
                FileRole::Seed if is_not_found(&e) => {
                    tracing::debug!("No existing output to seed from: {}", e)
                }
                // The file exists but is about to be replaced without its contents.
                FileRole::Seed => {
                    tracing::warn!("Existing output will be replaced without being merged: {}", e)
                }
                FileRole::Input => tracing::warn!("Skipping input file: {}", e),
            }
            FileOutcome::Skipped { reason: e.to_string() }
        }
    };
    FileReport { path: display_path(path), role, outcome }
}

fn is_not_found(err: &IniError) -> bool {
    matches!(err, IniError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
}

/// Run a full merge and write the result to `request.output`.
///
/// Unreadable inputs are skipped. A failure to write the output is logged as
/// a warning and reflected in [`MergeReport::written`]; the previous output
/// file is left as it was.
pub fn merge_files(request: &MergeRequest) -> Result<MergeReport> {
    if request.inputs.is_empty() {
        return Err(MergeError::TooFewFiles);
    }

    let (settings, files) = merge_settings(&request.output, &request.inputs, request.policy);
    if settings.is_empty() {
        tracing::debug!("No entries collected; writing an empty settings file");
    }

    let written = match write_file(&request.output, &settings, &request.render) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    };

    Ok(MergeReport {
        output: display_path(&request.output),
        policy: request.policy,
        files,
        entries: settings.len(),
        groups: settings.group_count(),
        written,
    })
}
