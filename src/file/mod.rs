// src/file/mod.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

use crate::api::AnalysisResult;
use crate::config::find_ticker;

pub mod csv_report;
pub mod ron_report;
pub mod text_report;

pub use csv_report::CsvReportHandler;
pub use ron_report::RonReportHandler;
pub use text_report::TextReportHandler;

/// A displayed result plus what is needed to label it.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub ticker: String,
    pub data: &'a AnalysisResult,
    pub crypto: String,
    pub generated_at: DateTime<Local>,
}

impl<'a> Report<'a> {
    pub fn new(ticker: &str, data: &'a AnalysisResult) -> Self {
        Self::at(ticker, data, Local::now())
    }

    pub fn at(ticker: &str, data: &'a AnalysisResult, generated_at: DateTime<Local>) -> Self {
        // Fall back to what the service reported when the ticker is not in the table
        let crypto = find_ticker(ticker)
            .map(|t| t.crypto.to_string())
            .or_else(|| data.crypto_type().map(str::to_string))
            .unwrap_or_else(|| "CRYPTO".to_string());

        Self {
            ticker: ticker.to_string(),
            data,
            crypto,
            generated_at,
        }
    }

    pub fn file_stem(&self) -> String {
        format!(
            "{}_mnav_{}",
            self.ticker.to_lowercase(),
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

// Core trait for report output
pub trait ReportHandler {
    fn label(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn render(&self, report: &Report) -> Result<String>;

    fn save(&self, report: &Report, path: &Path) -> Result<()> {
        let content = self.render(report)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), format = self.label(), "report exported");
        Ok(())
    }
}

pub fn handlers() -> [&'static dyn ReportHandler; 3] {
    [&TextReportHandler, &CsvReportHandler, &RonReportHandler]
}
