// src/file/csv_report.rs
use super::{Report, ReportHandler};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct CsvReportHandler;

impl ReportHandler for CsvReportHandler {
    fn label(&self) -> &'static str {
        "CSV"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &Report) -> Result<String> {
        let data = report.data;
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["metric", "value"])?;
        let text = |value: Option<String>| value.unwrap_or_default();
        let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        let rows = [
            ("ticker", report.ticker.clone()),
            ("crypto", report.crypto.clone()),
            ("crypto_price", number(data.crypto_price())),
            ("stock_price", number(data.stock_price())),
            ("crypto_holdings", number(data.crypto_holdings())),
            ("diluted_shares", number(data.diluted_shares())),
            ("treasury_value", number(data.treasury_value())),
            ("mnav_per_share", number(data.mnav_per_share())),
            ("market_cap", number(data.market_cap())),
            ("mnav_multiple", number(data.mnav_multiple())),
            ("last_updated", text(data.last_updated())),
            ("filings_processed", text(data.filings_processed())),
            ("generated_at", report.generated_at.to_rfc3339()),
        ];
        for (metric, value) in &rows {
            writer.write_record([*metric, value.as_str()])?;
        }

        let bytes = writer.into_inner().context("Failed to flush CSV report")?;
        String::from_utf8(bytes).context("CSV report is not valid UTF-8")
    }
}
