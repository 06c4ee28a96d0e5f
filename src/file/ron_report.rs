// src/file/ron_report.rs
use super::{Report, ReportHandler};
use anyhow::{Context, Result};

/// Snapshot of the full result as returned by the service.
#[derive(Debug)]
pub struct RonReportHandler;

impl ReportHandler for RonReportHandler {
    fn label(&self) -> &'static str {
        "RON"
    }

    fn extension(&self) -> &'static str {
        "ron"
    }

    fn render(&self, report: &Report) -> Result<String> {
        ron::ser::to_string_pretty(
            report.data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4),
        )
        .context("Failed to serialize report")
    }
}
