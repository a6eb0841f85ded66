//! Canonical INI output.
//!
//! Layout: the `[General]` block first with no leading blank line, then one
//! block per remaining group, each introduced by a blank line and a single
//! header. Entries are written as `key=value` with no padding, byte for byte
//! as they were read.

use crate::domain::{Group, GroupOrder, Settings, DEFAULT_GROUP};
use crate::error::IniError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub group_order: GroupOrder,
    /// Write `[General]` even when it holds no entries.
    pub emit_empty_general: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { group_order: GroupOrder::FirstSeen, emit_empty_general: true }
    }
}

pub fn render(settings: &Settings, options: &RenderOptions) -> Vec<u8> {
    let mut out = Vec::new();

    let general = settings.group(DEFAULT_GROUP);
    if general.is_some() || options.emit_empty_general {
        out.extend_from_slice(b"[General]\n");
    }
    if let Some(group) = general {
        push_entries(&mut out, group);
    }

    let mut others: Vec<&Group> =
        settings.groups().filter(|g| g.name() != DEFAULT_GROUP.as_bytes()).collect();
    if options.group_order == GroupOrder::Sorted {
        others.sort_by(|a, b| a.name().cmp(b.name()));
    }

    for group in others {
        if !out.is_empty() {
            out.push(b'\n');
        }
        out.push(b'[');
        out.extend_from_slice(group.name());
        out.extend_from_slice(b"]\n");
        push_entries(&mut out, group);
    }

    out
}

fn push_entries(out: &mut Vec<u8>, group: &Group) {
    for (key, value) in group.entries() {
        out.extend_from_slice(key);
        out.push(b'=');
        out.extend_from_slice(value);
        out.push(b'\n');
    }
}

/// Render `settings` and replace the contents of `path`.
///
/// The file is opened once in truncating mode. If that open fails the
/// existing file is not touched.
pub fn write_file(path: &Path, settings: &Settings, options: &RenderOptions) -> Result<(), IniError> {
    let content = render(settings, options);
    std::fs::write(path, content)
        .map_err(|source| IniError::Write { path: path.to_path_buf(), source })?;
    tracing::debug!("Wrote {} entries to {}", settings.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OverridePolicy;
    use crate::ini::parser::{parse_bytes, parse_str};
    use similar_asserts::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn settings_from(text: &str) -> Settings {
        let mut s = Settings::new();
        parse_str(text, OverridePolicy::LastWins, &mut s);
        s
    }

    fn render_string(settings: &Settings, options: &RenderOptions) -> String {
        String::from_utf8(render(settings, options)).expect("utf8 output")
    }

    #[test]
    fn test_general_first_then_groups() {
        let s = settings_from("[Net]\nhost=x\n[General]\na=1\n");
        let out = render_string(&s, &RenderOptions::default());
        assert_eq!(out, "[General]\na=1\n\n[Net]\nhost=x\n");
    }

    #[test]
    fn test_empty_general_header_always_written_by_default() {
        let s = settings_from("[Net]\nhost=x\n");
        let out = render_string(&s, &RenderOptions::default());
        assert_eq!(out, "[General]\n\n[Net]\nhost=x\n");
    }

    #[test]
    fn test_empty_model_renders_general_header_only() {
        let out = render_string(&Settings::new(), &RenderOptions::default());
        assert_eq!(out, "[General]\n");
    }

    #[test]
    fn test_empty_general_can_be_omitted() {
        let s = settings_from("[Net]\nhost=x\n[Db]\nname=d\n");
        let options = RenderOptions { emit_empty_general: false, ..RenderOptions::default() };
        let out = render_string(&s, &options);
        assert_eq!(out, "[Net]\nhost=x\n\n[Db]\nname=d\n");
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let s = settings_from("[Zeta]\nz=1\n[Alpha]\na=1\n[Zeta]\ny=2\n");
        let out = render_string(&s, &RenderOptions::default());
        assert_eq!(out, "[General]\n\n[Zeta]\ny=2\nz=1\n\n[Alpha]\na=1\n");
    }

    #[test]
    fn test_groups_sorted_when_requested() {
        let s = settings_from("[Zeta]\nz=1\n[Alpha]\na=1\n");
        let options = RenderOptions { group_order: GroupOrder::Sorted, ..RenderOptions::default() };
        let out = render_string(&s, &options);
        assert_eq!(out, "[General]\n\n[Alpha]\na=1\n\n[Zeta]\nz=1\n");
    }

    #[test]
    fn test_each_header_written_once() {
        let s = settings_from("[Net]\na=1\n[Db]\nb=2\n[Net]\nc=3\n");
        let out = render_string(&s, &RenderOptions::default());
        assert_eq!(out.matches("[Net]").count(), 1);
        assert_eq!(out.matches("[Db]").count(), 1);
    }

    #[test]
    fn test_non_utf8_values_written_verbatim() {
        let mut s = Settings::new();
        parse_bytes(b"[User]\nbad=\xff\nname=caf\xe9\n", OverridePolicy::LastWins, &mut s);
        let out = render(&s, &RenderOptions::default());
        assert_eq!(out, b"[General]\n\n[User]\nbad=\xff\nname=caf\xe9\n".to_vec());
    }

    #[test]
    fn test_round_trip_reproduces_entries() {
        let original = settings_from("a = 1\n[Net]\n host = x \nport=\n[]\nk=v\n[Db]\nurl=a=b\n");
        let out = render(&original, &RenderOptions::default());
        let mut reparsed = Settings::new();
        parse_bytes(&out, OverridePolicy::LastWins, &mut reparsed);

        let before: Vec<_> = original.entries().collect();
        let after: Vec<_> = reparsed.entries().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out.ini");
        fs::write(&path, "[Old]\nstale=yes\nmore=lines\n").expect("write");

        let s = settings_from("a=1\n");
        write_file(&path, &s, &RenderOptions::default()).expect("write_file");
        assert_eq!(fs::read_to_string(&path).expect("read"), "[General]\na=1\n");
    }

    #[test]
    fn test_write_file_into_missing_directory_fails() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("no-such-dir").join("out.ini");
        let result = write_file(&path, &Settings::new(), &RenderOptions::default());
        assert!(matches!(result, Err(IniError::Write { .. })));
        assert!(!path.exists());
    }
}
