//! Line-oriented INI reader.
//!
//! Parsing is deliberately permissive: anything that is neither a `[group]`
//! header nor contains `=` is dropped without complaint. `;` and `#` carry no
//! special meaning, so `; key=value` is read as an entry named `; key`.
//!
//! Lines are handled as bytes. Only ASCII whitespace is trimmed, so
//! non-ASCII bytes in names and values (including U+00A0) are kept as-is.

use crate::domain::{OverridePolicy, Settings, DEFAULT_GROUP};
use crate::error::IniError;
use crate::utils::read_source;
use serde::Serialize;
use std::path::Path;

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[name]` with `name` already trimmed.
    Header(&'a [u8]),
    /// `key=value` with both sides trimmed.
    Entry { key: &'a [u8], value: &'a [u8] },
    /// Blank, comment-like, unterminated header or otherwise malformed.
    Skip,
}

/// Counters collected while parsing one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines: usize,
    pub stored: usize,
    pub suppressed: usize,
    pub skipped: usize,
}

/// Space, `\t`, `\n`, `\v`, `\f` and `\r`.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_space(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| !is_space(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

pub fn classify_line(raw: &[u8]) -> Line<'_> {
    let line = trim(raw);

    if let Some(rest) = line.strip_prefix(b"[") {
        // Anything after the first `]` is ignored.
        return match rest.iter().position(|&b| b == b']') {
            Some(end) => Line::Header(trim(&rest[..end])),
            None => Line::Skip,
        };
    }

    match line.iter().position(|&b| b == b'=') {
        // An `=` in first position means an empty key.
        Some(0) | None => Line::Skip,
        Some(idx) => Line::Entry { key: trim(&line[..idx]), value: trim(&line[idx + 1..]) },
    }
}

/// Parse INI bytes into `settings`, starting in [`DEFAULT_GROUP`].
pub fn parse_bytes(text: &[u8], policy: OverridePolicy, settings: &mut Settings) -> ParseStats {
    let mut stats = ParseStats::default();
    let mut current_group = DEFAULT_GROUP.as_bytes();

    for raw in text.split_inclusive(|&b| b == b'\n') {
        stats.lines += 1;
        match classify_line(raw) {
            Line::Header(name) => current_group = name,
            Line::Entry { key, value } => {
                if settings.set(current_group, key, value, policy) {
                    stats.stored += 1;
                } else {
                    stats.suppressed += 1;
                }
            }
            Line::Skip => stats.skipped += 1,
        }
    }

    stats
}

pub fn parse_str(text: &str, policy: OverridePolicy, settings: &mut Settings) -> ParseStats {
    parse_bytes(text.as_bytes(), policy, settings)
}

/// Read and parse one file into `settings`.
///
/// A file that cannot be read contributes nothing and `settings` is left
/// untouched; the caller decides how loudly to report it.
pub fn parse_file(
    path: &Path,
    policy: OverridePolicy,
    settings: &mut Settings,
) -> Result<ParseStats, IniError> {
    let bytes = read_source(path)
        .map_err(|source| IniError::Read { path: path.to_path_buf(), source })?;

    let stats = parse_bytes(&bytes, policy, settings);
    tracing::debug!(
        "Parsed {}: {} lines, {} stored, {} suppressed, {} skipped",
        path.display(),
        stats.lines,
        stats.stored,
        stats.suppressed,
        stats.skipped
    );
    Ok(stats)
}
