//! Output formatting utilities

use crate::application::RewriteReport;

/// Format the confirmation line for a finished rewrite
pub fn format_report(report: &RewriteReport) -> String {
    if report.dry_run {
        format!(
            "Dry run: {} example code block(s) would be updated to use '{}'",
            report.replacements, report.to_lang
        )
    } else {
        format!(
            "Updated all example code blocks to use '{}'",
            report.to_lang
        )
    }
}
