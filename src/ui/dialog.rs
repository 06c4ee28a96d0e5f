// src/ui/dialog.rs
use eframe::egui::{self, RichText};

use super::components::{DANGER, SUCCESS};
use crate::state::Notice;

/// Modal-style window for transient notices. Cleared when dismissed.
pub fn show_notice(ctx: &egui::Context, notice: &mut Option<Notice>) {
    let Some(current) = notice.clone() else {
        return;
    };

    let (title, color) = match &current {
        Notice::Success(_) => ("Success", SUCCESS),
        Notice::Failure(_) => ("Error", DANGER),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(current.message()).color(color));
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                *notice = None;
            }
        });
}
