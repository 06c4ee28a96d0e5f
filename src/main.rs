// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use std::sync::Arc;

mod api;
mod app;
mod config;
mod file;
mod state;
mod ui;
mod utils;

#[cfg(test)]
mod tests;

use crate::api::MnavClient;
use crate::app::MnavApp;
use crate::config::Settings;
use crate::state::LoadingSchedule;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let service = Arc::new(MnavClient::new(&settings).context("Failed to build HTTP client")?);
    tracing::info!(api_base = service.base_url(), "starting MNAV client");
    let schedule = LoadingSchedule::new(settings.step_delays());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 820.0])
            .with_title("MNAV Analysis Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "MNAV Analysis Tool",
        options,
        Box::new(move |cc| -> Box<dyn eframe::App> {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(MnavApp::new(schedule, service, Some(cc.egui_ctx.clone())))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
