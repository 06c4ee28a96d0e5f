// src/ui/error.rs
use eframe::egui::{self, Color32, RichText};

use super::components::{section, DANGER, PANEL_FILL};
use super::UiAction;
use crate::state::Event;

pub fn show_error(ui: &mut egui::Ui, message: &str, actions: &mut Vec<UiAction>) {
    section(ui, PANEL_FILL, |ui| {
        egui::Frame::none()
            .fill(Color32::from_rgb(69, 10, 10))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(185, 28, 28)))
            .rounding(8.0)
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading(RichText::new("Error").color(DANGER));
                ui.label(RichText::new(message).color(Color32::from_rgb(252, 165, 165)));
                ui.add_space(12.0);
                let retry = egui::Button::new(RichText::new("Try Again").color(Color32::WHITE))
                    .fill(Color32::from_rgb(220, 38, 38));
                if ui.add(retry).clicked() {
                    actions.push(Event::Reset.into());
                }
            });
    });
}
