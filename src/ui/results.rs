// src/ui/results.rs
use eframe::egui::{self, Color32, RichText};

use super::components::{metric_card, metric_card_with_caption, section, wide_button, PANEL_FILL};
use super::UiAction;
use crate::api::AnalysisResult;
use crate::config::{find_ticker, TickerConfig};
use crate::file::handlers;
use crate::state::Event;
use crate::utils::{multiple, or_missing, quantity, usd, usd_whole};

const HEADER_FILL: Color32 = Color32::from_rgb(37, 99, 235);
const EMAIL_FILL: Color32 = Color32::from_rgb(22, 163, 74);
const RESET_FILL: Color32 = Color32::from_rgb(75, 85, 99);

pub fn show_results(ui: &mut egui::Ui, ticker: &str, data: &AnalysisResult, actions: &mut Vec<UiAction>) {
    let config = find_ticker(ticker);

    show_market_header(ui, ticker, data, config);
    show_metrics(ui, data, config);

    section(ui, PANEL_FILL, |ui| {
        ui.horizontal_wrapped(|ui| {
            if wide_button(ui, "✉ Email Report", EMAIL_FILL, true).clicked() {
                actions.push(Event::OpenEmail.into());
            }
            if wide_button(ui, "⬅ Analyze Another", RESET_FILL, true).clicked() {
                actions.push(Event::Reset.into());
            }
        });
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("📋 Copy Report").clicked() {
                actions.push(UiAction::CopyReport);
            }
            for handler in handlers() {
                if ui.button(format!("💾 Export {}", handler.label())).clicked() {
                    actions.push(UiAction::ExportReport(handler));
                }
            }
        });
    });
}

fn show_market_header(ui: &mut egui::Ui, ticker: &str, data: &AnalysisResult, config: Option<&TickerConfig>) {
    let crypto_name = config.map_or("Crypto", |c| c.crypto_name);

    section(ui, HEADER_FILL, |ui| {
        ui.columns(2, |columns| {
            columns[0].vertical_centered(|ui| {
                ui.label(RichText::new(format!("{} Price", crypto_name)).color(Color32::WHITE));
                ui.label(RichText::new(or_missing(data.crypto_price(), usd)).size(24.0).strong().color(Color32::WHITE));
            });
            columns[1].vertical_centered(|ui| {
                ui.label(RichText::new(format!("{} Stock Price", ticker)).color(Color32::WHITE));
                ui.label(RichText::new(or_missing(data.stock_price(), usd)).size(24.0).strong().color(Color32::WHITE));
            });
        });
    });
}

fn show_metrics(ui: &mut egui::Ui, data: &AnalysisResult, config: Option<&TickerConfig>) {
    let crypto = config.map(|c| c.crypto).or_else(|| data.crypto_type()).unwrap_or("");

    section(ui, PANEL_FILL, |ui| {
        ui.heading(RichText::new("MNAV Metrics").color(Color32::WHITE));
        ui.add_space(12.0);

        egui::Grid::new("mnav_metrics_grid")
            .num_columns(4)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                metric_card(
                    ui,
                    &format!("{} Holdings", crypto),
                    &or_missing(data.crypto_holdings(), |v| format!("{} {}", quantity(v), crypto).trim_end().to_string()),
                );
                metric_card(ui, "Diluted Shares", &or_missing(data.diluted_shares(), quantity));
                metric_card(ui, "Treasury Value", &or_missing(data.treasury_value(), usd_whole));
                metric_card(ui, "MNAV per Share", &or_missing(data.mnav_per_share(), usd));
                ui.end_row();

                metric_card(ui, "Market Cap", &or_missing(data.market_cap(), usd_whole));
                metric_card_with_caption(
                    ui,
                    "MNAV Multiple",
                    &or_missing(data.mnav_multiple(), multiple),
                    Some("Market Cap / Treasury Value"),
                );
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Last Updated:").color(Color32::WHITE));
            ui.label(RichText::new(or_missing(data.last_updated(), |s| s)).strong().color(Color32::WHITE));
            ui.add_space(24.0);
            ui.label(RichText::new("Filings Processed:").color(Color32::WHITE));
            ui.label(RichText::new(or_missing(data.filings_processed(), |s| s)).strong().color(Color32::WHITE));
        });
    });
}
