// src/ui/loading.rs
use eframe::egui::{self, Color32, RichText};

use super::components::{section, ACTIVE, MUTED, SUCCESS};
use super::UiAction;
use crate::state::loading::{step_status, StepStatus, STEP_LABELS};
use crate::state::Event;

pub fn show_loading(ui: &mut egui::Ui, ticker: &str, step: u8, actions: &mut Vec<UiAction>) {
    section(ui, Color32::TRANSPARENT, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.heading(RichText::new(format!("Analyzing {}...", ticker)).color(Color32::LIGHT_GRAY));
            ui.add_space(12.0);

            for (index, label) in STEP_LABELS.iter().enumerate() {
                let (marker, color) = match step_status(index as u8 + 1, step) {
                    StepStatus::Done => ("✓", SUCCESS),
                    StepStatus::Current => ("⏳", ACTIVE),
                    StepStatus::Pending => ("⏳", MUTED.gamma_multiply(0.5)),
                };
                ui.label(RichText::new(format!("{} {}", marker, label)).color(color));
            }

            ui.add_space(16.0);
            if ui.button("Cancel").clicked() {
                actions.push(Event::Reset.into());
            }
        });
    });
}
