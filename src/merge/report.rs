//! Human and JSON renderings of a [`MergeReport`].

use super::{FileOutcome, FileRole, MergeReport};
use crate::domain::OverridePolicy;

pub fn render_text(report: &MergeReport) -> String {
    let mut lines = Vec::with_capacity(report.files.len() + 4);

    let policy = match report.policy {
        OverridePolicy::LastWins => "override (last value wins)",
        OverridePolicy::FirstWins => "no-override (first value wins)",
    };
    lines.push(format!("Output: {}", report.output));
    lines.push(format!("Policy: {}", policy));
    lines.push("Files:".to_string());
    for file in &report.files {
        let role = match file.role {
            FileRole::Seed => " (existing output)",
            FileRole::Input => "",
        };
        let status = match &file.outcome {
            FileOutcome::Parsed(stats) => format!(
                "{} stored, {} suppressed, {} skipped lines",
                stats.stored, stats.suppressed, stats.skipped
            ),
            FileOutcome::Skipped { .. } => "not read".to_string(),
        };
        lines.push(format!("  {}{}: {}", file.path, role, status));
    }
    let skipped = report.files_skipped();
    if skipped > 0 {
        lines.push(format!("Skipped: {} of {} files", skipped, report.files.len()));
    }
    lines.push(format!("Result: {} entries in {} groups", report.entries, report.groups));
    if !report.written {
        lines.push("Output was NOT written".to_string());
    }

    format!("{}\n", lines.join("\n"))
}

pub fn render_json(report: &MergeReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::ParseStats;
    use crate::merge::FileReport;
    use serde_json::json;

    fn sample() -> MergeReport {
        MergeReport {
            output: "out.ini".to_string(),
            policy: OverridePolicy::FirstWins,
            files: vec![
                FileReport {
                    path: "out.ini".to_string(),
                    role: FileRole::Seed,
                    outcome: FileOutcome::Skipped { reason: "cannot read out.ini".to_string() },
                },
                FileReport {
                    path: "in.ini".to_string(),
                    role: FileRole::Input,
                    outcome: FileOutcome::Parsed(ParseStats {
                        lines: 3,
                        stored: 2,
                        suppressed: 0,
                        skipped: 1,
                    }),
                },
            ],
            entries: 2,
            groups: 1,
            written: true,
        }
    }

    #[test]
    fn test_render_text_lists_files() {
        let text = render_text(&sample());
        assert!(text.contains("Policy: no-override (first value wins)"));
        assert!(text.contains("  out.ini (existing output): not read"));
        assert!(text.contains("  in.ini: 2 stored, 0 suppressed, 1 skipped lines"));
        assert!(text.contains("Skipped: 1 of 2 files"));
        assert!(text.contains("Result: 2 entries in 1 groups"));
        assert!(!text.contains("NOT written"));
    }

    #[test]
    fn test_render_json_shape() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render_json(&sample()).expect("json")).expect("parse");
        assert_eq!(parsed["policy"], json!("first-wins"));
        assert_eq!(parsed["files"][0]["role"], json!("seed"));
        assert_eq!(parsed["files"][0]["outcome"]["status"], json!("skipped"));
        assert_eq!(parsed["files"][1]["outcome"]["status"], json!("parsed"));
        assert_eq!(parsed["files"][1]["outcome"]["stored"], json!(2));
        assert_eq!(parsed["written"], json!(true));
    }
}
