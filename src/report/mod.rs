//! Human-readable and JSON summaries of a filter run.

use crate::config::Disposition;
use crate::filter::FilterResult;
use serde::Serialize;

/// Serializable view of a filter run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub mode: Disposition,
    pub dry_run: bool,
    pub kept: Vec<String>,
    /// In dry runs these are the files that would be deleted
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deleted: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub moved: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl FilterReport {
    pub fn from_result(result: &FilterResult) -> Self {
        Self {
            mode: result.disposition,
            dry_run: result.dry_run,
            kept: result.kept.clone(),
            deleted: result.deleted.clone(),
            moved: result.moved.clone(),
            ignored: result.ignored.clone(),
            destination: result
                .destination
                .as_ref()
                .map(|p| p.display().to_string()),
        }
    }
}

/// Render the plain-text summary printed on stdout
pub fn render_text(report: &FilterReport) -> String {
    let mut lines = vec!["The following files will be kept:".to_string()];
    lines.extend(report.kept.iter().map(|file| format!("  {file}")));

    match (report.mode, report.dry_run) {
        (Disposition::Delete, false) => {
            lines.push(format!(
                "Deleted {} files that did not match the keep list.",
                report.deleted.len()
            ));
        }
        (Disposition::Delete, true) => {
            if !report.deleted.is_empty() {
                lines.push("The following files would be deleted:".to_string());
                lines.extend(report.deleted.iter().map(|file| format!("  {file}")));
            }
            lines.push("Dry run: No files were deleted.".to_string());
        }
        (Disposition::Move, false) => {
            let destination = report.destination.as_deref().unwrap_or_default();
            lines.push(format!(
                "Moved {} files to {destination}",
                report.moved.len()
            ));
        }
        (Disposition::Move, true) => {
            lines.push("Dry run: No files were moved.".to_string());
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the report as pretty JSON
pub fn render_json(report: &FilterReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(disposition: Disposition, dry_run: bool) -> FilterResult {
        FilterResult {
            disposition,
            dry_run,
            kept: vec!["Sonic.sms".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_delete_mode() {
        let mut result = result(Disposition::Delete, false);
        result.deleted = vec!["Tetris.sms".to_string()];

        let text = render_text(&FilterReport::from_result(&result));

        assert_eq!(
            text,
            "The following files will be kept:\n  Sonic.sms\nDeleted 1 files that did not match the keep list.\n"
        );
    }

    #[test]
    fn test_render_delete_dry_run_lists_rejects() {
        let mut result = result(Disposition::Delete, true);
        result.deleted = vec!["Tetris.sms".to_string()];

        let text = render_text(&FilterReport::from_result(&result));

        assert!(text.contains("would be deleted:\n  Tetris.sms"));
        assert!(text.ends_with("Dry run: No files were deleted.\n"));
        assert!(!text.contains("Deleted 1"));
    }

    #[test]
    fn test_render_move_mode() {
        let mut result = result(Disposition::Move, false);
        result.moved = vec!["Sonic.sms".to_string()];
        result.destination = Some(PathBuf::from("/roms/kept_files"));

        let text = render_text(&FilterReport::from_result(&result));

        assert!(text.contains("Moved 1 files to /roms/kept_files"));
    }

    #[test]
    fn test_render_move_dry_run() {
        let text = render_text(&FilterReport::from_result(&result(Disposition::Move, true)));
        assert!(text.contains("  Sonic.sms"));
        assert!(text.contains("Dry run: No files were moved."));
    }

    #[test]
    fn test_render_json() {
        let mut result = result(Disposition::Delete, false);
        result.deleted = vec!["Tetris.sms".to_string()];

        let json = render_json(&FilterReport::from_result(&result)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "delete");
        assert_eq!(value["dryRun"], false);
        assert_eq!(value["kept"][0], "Sonic.sms");
        assert_eq!(value["deleted"][0], "Tetris.sms");
        assert!(value.get("destination").is_none());
    }
}
