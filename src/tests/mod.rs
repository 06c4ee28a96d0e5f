//! Scenario tests for the MNAV client
//!
//! - `state_test` - view transitions, driven event by event
//! - `api_test` - HTTP client against a local one-shot listener
//! - `worker_test` - background request worker with a fake service
//! - `flow_test` - whole app: clock-driven loading, responses, email

use serde_json::json;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use crate::api::{AnalysisResult, ApiError, MnavService, Operation};




#[cfg(test)]
mod flow_test;

pub fn sbet_json() -> serde_json::Value {
    json!({
        "ticker": "SBET",
        "eth_price": 2500,
        "stock_price": 12.3,
        "eth_holdings": 1000,
        "diluted_shares": 50000000,
        "treasury_value": 2500000,
        "mnav_per_share": 0.05,
        "market_cap": 615000000,
        "mnav_multiple": 246,
        "last_updated": "2024-01-01",
        "filings_processed": 3
    })
}

pub fn sbet_result() -> AnalysisResult {
    serde_json::from_value(sbet_json()).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Analyze(String),
    SendReport(String, AnalysisResult),
}

/// Service double that records calls and answers from canned outcomes.
pub struct FakeService {
    pub calls: Mutex<Vec<Call>>,
    pub analysis: Mutex<Result<AnalysisResult, ApiError>>,
    pub email: Mutex<Result<(), ApiError>>,
    /// Ticker whose analysis blocks until the paired sender fires.
    hold: Mutex<Option<(String, Receiver<()>)>>,
}

impl FakeService {
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            analysis: Mutex::new(Ok(sbet_result())),
            email: Mutex::new(Ok(())),
            hold: Mutex::new(None),
        }
    }

    pub fn holding(ticker: &str) -> (Self, Sender<()>) {
        let (release, gate) = mpsc::channel();
        let service = Self::ok();
        *service.hold.lock().unwrap() = Some((ticker.to_string(), gate));
        (service, release)
    }

    pub fn failing_analysis(status: u16, reason: &str) -> Self {
        let service = Self::ok();
        *service.analysis.lock().unwrap() = Err(ApiError::Status {
            operation: Operation::Analysis,
            status,
            reason: reason.to_string(),
        });
        service
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl MnavService for FakeService {
    fn analyze(&self, ticker: &str) -> Result<AnalysisResult, ApiError> {
        self.calls.lock().unwrap().push(Call::Analyze(ticker.to_string()));

        let gate = {
            let mut hold = self.hold.lock().unwrap();
            match hold.take() {
                Some((held, gate)) if held == ticker => Some(gate),
                other => {
                    *hold = other;
                    None
                }
            }
        };
        if let Some(gate) = gate {
            let _ = gate.recv();
        }

        self.analysis.lock().unwrap().clone()
    }

    fn send_report(&self, email: &str, data: &AnalysisResult) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::SendReport(email.to_string(), data.clone()));
        self.email.lock().unwrap().clone()
    }
}
