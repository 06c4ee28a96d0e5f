//! Client for the external MNAV analysis service.
//!
//! The service does all of the financial work; this side only fetches a
//! finished [`AnalysisResult`] for a ticker and asks the service to email it.

use reqwest::blocking::Response;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::config::Settings;

pub mod worker;

pub use worker::{ApiWorker, Completion, Job};

/// Metrics for one ticker as computed by the service.
///
/// Holds the JSON object exactly as the service sent it, so an email request
/// forwards the same keys and values. Readers get `None` for a missing, null
/// or non-numeric value instead of the whole result being rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    fields: Map<String, Value>,
}

impl AnalysisResult {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Display text for any non-null value.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn ticker(&self) -> Option<&str> {
        self.get("ticker").and_then(Value::as_str)
    }

    pub fn crypto_type(&self) -> Option<&str> {
        self.get("crypto_type").and_then(Value::as_str)
    }

    // The service sends crypto_*; older payloads used eth_*
    pub fn crypto_price(&self) -> Option<f64> {
        self.number("crypto_price").or_else(|| self.number("eth_price"))
    }

    pub fn crypto_holdings(&self) -> Option<f64> {
        self.number("crypto_holdings").or_else(|| self.number("eth_holdings"))
    }

    pub fn stock_price(&self) -> Option<f64> {
        self.number("stock_price")
    }

    pub fn diluted_shares(&self) -> Option<f64> {
        self.number("diluted_shares")
    }

    pub fn treasury_value(&self) -> Option<f64> {
        self.number("treasury_value")
    }

    pub fn mnav_per_share(&self) -> Option<f64> {
        self.number("mnav_per_share")
    }

    pub fn market_cap(&self) -> Option<f64> {
        self.number("market_cap")
    }

    pub fn mnav_multiple(&self) -> Option<f64> {
        self.number("mnav_multiple")
    }

    pub fn last_updated(&self) -> Option<String> {
        self.text("last_updated")
    }

    pub fn filings_processed(&self) -> Option<String> {
        self.text("filings_processed")
    }
}

#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
    pub mnav_data: &'a AnalysisResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analysis,
    Email,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Analysis => write!(f, "Analysis"),
            Operation::Email => write!(f, "Email sending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{operation} failed: {reason}")]
    Status {
        operation: Operation,
        status: u16,
        reason: String,
    },
    #[error("{0}")]
    Network(String),
    #[error("Invalid response from server: {0}")]
    Parse(String),
}

/// Calls against the analysis service. Implementations block until the
/// response is complete; callers keep them off the UI thread.
pub trait MnavService: Send + Sync {
    fn analyze(&self, ticker: &str) -> Result<AnalysisResult, ApiError>;
    fn send_report(&self, email: &str, data: &AnalysisResult) -> Result<(), ApiError>;
}

pub struct MnavClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl MnavClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(concat!("mnav-gui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: settings.api_base.clone(),
            client,
        })
    }

    #[cfg(test)]
    pub fn with_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let settings = Settings {
            api_base: base_url.into().trim_end_matches('/').to_string(),
            ..Settings::default()
        };
        Self::new(&settings)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MnavService for MnavClient {
    fn analyze(&self, ticker: &str) -> Result<AnalysisResult, ApiError> {
        let url = format!("{}/analyze/{}", self.base_url, ticker);
        tracing::debug!(%url, "requesting analysis");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response, Operation::Analysis)?
            .json()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn send_report(&self, email: &str, data: &AnalysisResult) -> Result<(), ApiError> {
        let url = format!("{}/email", self.base_url);
        tracing::debug!(%url, ticker = data.ticker().unwrap_or_default(), "sending email report");

        let response = self
            .client
            .post(&url)
            .json(&EmailRequest { email, mnav_data: data })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response, Operation::Email)?;
        Ok(())
    }
}

fn ensure_success(response: Response, operation: Operation) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let reason = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string());

    Err(ApiError::Status {
        operation,
        status: status.as_u16(),
        reason,
    })
}
