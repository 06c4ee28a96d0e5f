// src/ui/email.rs
use eframe::egui::{self, Color32, RichText};

use super::components::{section, wide_button, PANEL_FILL};
use super::UiAction;
use crate::state::Event;

const SEND_FILL: Color32 = Color32::from_rgb(59, 130, 246);

pub fn show_email_form(ui: &mut egui::Ui, address: &str, sending: bool, actions: &mut Vec<UiAction>) {
    section(ui, PANEL_FILL, |ui| {
        ui.heading(RichText::new("Send Email Report").color(Color32::WHITE));
        ui.add_space(12.0);

        ui.label(RichText::new("Email Address").color(Color32::LIGHT_GRAY));
        let mut text = address.to_string();
        let response = ui.add_enabled(
            !sending,
            egui::TextEdit::singleline(&mut text)
                .hint_text("Enter your email address")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            actions.push(Event::EditAddress(text.clone()).into());
        }

        let can_send = !sending && !text.trim().is_empty();
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let label = if sending { "Sending..." } else { "✉ Send Report" };
            let clicked = wide_button(ui, label, SEND_FILL, can_send).clicked();
            if sending {
                ui.spinner();
            }
            if can_send && (clicked || submitted) {
                actions.push(Event::send_email().into());
            }

            if ui.add_enabled(!sending, egui::Button::new("Cancel")).clicked() {
                actions.push(Event::CancelEmail.into());
            }
        });
    });
}
