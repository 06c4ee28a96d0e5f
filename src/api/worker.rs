// src/api/worker.rs
use anyhow::{anyhow, Result};
use eframe::egui;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use super::{AnalysisResult, ApiError, MnavService};
use crate::state::RequestId;

#[derive(Debug, Clone)]
pub enum Job {
    Analyze {
        request: RequestId,
        ticker: String,
    },
    SendReport {
        request: RequestId,
        email: String,
        data: AnalysisResult,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Analysis {
        request: RequestId,
        outcome: Result<AnalysisResult, ApiError>,
    },
    Email {
        request: RequestId,
        outcome: Result<(), ApiError>,
    },
}

/// Runs each service call on its own thread and hands the tagged results back
/// to the UI thread. A slow call never holds up a later one.
pub struct ApiWorker {
    service: Arc<dyn MnavService>,
    repaint: Option<egui::Context>,
    done_tx: Sender<Completion>,
    completions: Receiver<Completion>,
}

impl ApiWorker {
    pub fn new(service: Arc<dyn MnavService>, repaint: Option<egui::Context>) -> Self {
        let (done_tx, completions) = mpsc::channel();
        Self {
            service,
            repaint,
            done_tx,
            completions,
        }
    }

    pub fn submit(&self, job: Job) -> Result<()> {
        let service = Arc::clone(&self.service);
        let repaint = self.repaint.clone();
        let done_tx = self.done_tx.clone();

        thread::Builder::new()
            .name("mnav-api".to_string())
            .spawn(move || {
                let completion = run_job(service.as_ref(), job);
                // UI side gone: nobody is waiting for this result
                if done_tx.send(completion).is_err() {
                    return;
                }
                if let Some(ctx) = &repaint {
                    ctx.request_repaint();
                }
            })
            .map_err(|e| anyhow!("Failed to start request: {}", e))?;

        Ok(())
    }

    /// Completions that arrived since the last call, without blocking.
    pub fn drain(&self) -> Vec<Completion> {
        self.completions.try_iter().collect()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Completion> {
        self.completions.recv_timeout(timeout).ok()
    }
}

fn run_job(service: &dyn MnavService, job: Job) -> Completion {
    match job {
        Job::Analyze { request, ticker } => {
            let outcome = service.analyze(&ticker);
            match &outcome {
                Ok(_) => tracing::info!(%ticker, %request, "analysis completed"),
                Err(e) => tracing::warn!(%ticker, %request, error = %e, "analysis failed"),
            }
            Completion::Analysis { request, outcome }
        }
        Job::SendReport { request, email, data } => {
            let outcome = service.send_report(&email, &data);
            match &outcome {
                Ok(()) => tracing::info!(ticker = data.ticker().unwrap_or_default(), %request, "email report sent"),
                Err(e) => tracing::warn!(ticker = data.ticker().unwrap_or_default(), %request, error = %e, "email report failed"),
            }
            Completion::Email { request, outcome }
        }
    }
}
