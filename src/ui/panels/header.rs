// CE Autopilot - ui/panels/header.rs
//
// Tenant header bar above the central view.

use crate::app::state::AppState;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let org = &state.organisation;
    ui.horizontal_centered(|ui| {
        ui.label(
            egui::RichText::new(format!(" {} ", org.initials))
                .strong()
                .color(theme::BLUE)
                .background_color(theme::tint(theme::BLUE)),
        );
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&org.company).strong());
            ui.label(egui::RichText::new(&org.plan).small().color(theme::SLATE));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("Welcome, {}", org.user)).color(theme::SLATE));
        });
    });
}
