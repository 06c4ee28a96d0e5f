// src/file/text_report.rs
use super::{Report, ReportHandler};
use crate::utils::{multiple, or_missing, quantity, usd_cents};
use anyhow::Result;
use std::fmt::Write;

#[derive(Debug)]
pub struct TextReportHandler;

impl ReportHandler for TextReportHandler {
    fn label(&self) -> &'static str {
        "Text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &Report) -> Result<String> {
        let data = report.data;
        let crypto = &report.crypto;
        let ticker = &report.ticker;
        let mut out = String::new();

        writeln!(out, "{} MNAV REPORT", ticker)?;
        writeln!(out, "Generated at: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S %Z"))?;
        writeln!(out, "Data as of: {}", or_missing(data.last_updated(), |s| s))?;
        writeln!(out)?;
        writeln!(out, "{} Price: {}", crypto, or_missing(data.crypto_price(), usd_cents))?;
        writeln!(out, "{} Stock Price: {}", ticker, or_missing(data.stock_price(), usd_cents))?;
        writeln!(out)?;
        writeln!(
            out,
            "Aggregate {} Holdings: {}",
            crypto,
            or_missing(data.crypto_holdings(), |v| format!("{} {}", quantity(v), crypto))
        )?;
        writeln!(out, "Diluted Shares Outstanding: {}", or_missing(data.diluted_shares(), quantity))?;
        writeln!(out)?;
        writeln!(out, "Treasury Value: {}", or_missing(data.treasury_value(), usd_cents))?;
        writeln!(out, "MNAV per Share: {}", or_missing(data.mnav_per_share(), usd_cents))?;
        writeln!(out, "Market Cap: {}", or_missing(data.market_cap(), usd_cents))?;
        writeln!(out, "MNAV Multiple: {}", or_missing(data.mnav_multiple(), multiple))?;
        writeln!(out)?;
        writeln!(out, "Filings Processed: {}", or_missing(data.filings_processed(), |s| s))?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::fixtures;

    #[test]
    fn renders_email_style_body() {
        let data = fixtures::sbet();
        let report = Report::at("SBET", &data, fixtures::generated_at());
        let text = TextReportHandler.render(&report).unwrap();

        assert!(text.starts_with("SBET MNAV REPORT\n"));
        assert!(text.contains("ETH Price: $2,500.00\n"));
        assert!(text.contains("SBET Stock Price: $12.30\n"));
        assert!(text.contains("Aggregate ETH Holdings: 1,000 ETH\n"));
        assert!(text.contains("Diluted Shares Outstanding: 50,000,000\n"));
        assert!(text.contains("Market Cap: $615,000,000.00\n"));
        assert!(text.contains("MNAV Multiple: 246.00x\n"));
        assert!(text.contains("Filings Processed: 3\n"));
    }

    #[test]
    fn null_values_render_placeholder() {
        let data: crate::api::AnalysisResult = serde_json::from_value(serde_json::json!({
            "ticker": "SBET",
            "crypto_price": 2500,
            "last_updated": null,
        }))
        .unwrap();
        let report = Report::at("SBET", &data, fixtures::generated_at());
        let text = TextReportHandler.render(&report).unwrap();

        assert!(text.contains("ETH Price: $2,500.00\n"));
        assert!(text.contains("Data as of: —\n"));
        assert!(text.contains("Market Cap: —\n"));
    }
}
