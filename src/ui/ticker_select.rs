// src/ui/ticker_select.rs
use eframe::egui::{self, Color32, RichText, Sense};

use super::components::section;
use super::UiAction;
use crate::config::{TickerConfig, TICKERS};
use crate::state::Event;

pub fn show_ticker_selection(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    section(ui, Color32::TRANSPARENT, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Select Ticker").color(Color32::WHITE));
            ui.add_space(16.0);

            for ticker in TICKERS {
                if ticker_card(ui, ticker).clicked() {
                    actions.push(Event::select(ticker.symbol).into());
                }
                ui.add_space(12.0);
            }
        });
    });
}

fn ticker_card(ui: &mut egui::Ui, ticker: &TickerConfig) -> egui::Response {
    let frame = egui::Frame::none()
        .fill(ticker.theme.primary)
        .stroke(egui::Stroke::new(2.0, ticker.theme.accent))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(32.0, 20.0));

    let response = frame
        .show(ui, |ui| {
            ui.set_width(360.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(ticker.crypto).size(22.0).strong().color(Color32::WHITE));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(ticker.symbol).size(18.0).strong().color(Color32::WHITE));
                    ui.label(RichText::new(ticker.name).color(Color32::WHITE));
                    ui.label(
                        RichText::new(format!("{} Holdings · {}", ticker.crypto, ticker.description))
                            .small()
                            .color(Color32::from_white_alpha(200)),
                    );
                });
            });
        })
        .response;

    response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
