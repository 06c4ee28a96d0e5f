// src/ui/components.rs
use eframe::egui::{self, Color32, RichText};

pub const PANEL_FILL: Color32 = Color32::from_rgb(17, 24, 39);
pub const CARD_FILL: Color32 = Color32::from_rgb(31, 41, 55);
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
pub const ACTIVE: Color32 = Color32::from_rgb(96, 165, 250);
pub const DANGER: Color32 = Color32::from_rgb(248, 113, 113);

pub fn section<R>(ui: &mut egui::Ui, fill: Color32, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn metric_card(ui: &mut egui::Ui, label: &str, value: &str) {
    metric_card_with_caption(ui, label, value, None);
}

pub fn metric_card_with_caption(ui: &mut egui::Ui, label: &str, value: &str, caption: Option<&str>) {
    egui::Frame::none()
        .fill(CARD_FILL)
        .rounding(8.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(label).small().color(MUTED));
                ui.label(RichText::new(value).size(20.0).strong().color(Color32::WHITE));
                if let Some(caption) = caption {
                    ui.label(RichText::new(caption).small().color(MUTED));
                }
            });
        });
}

pub fn wide_button(ui: &mut egui::Ui, text: &str, fill: Color32, enabled: bool) -> egui::Response {
    let button = egui::Button::new(RichText::new(text).color(Color32::WHITE).strong())
        .fill(fill)
        .min_size(egui::vec2(180.0, 36.0));
    ui.add_enabled(enabled, button)
}
