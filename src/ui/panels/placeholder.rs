// CE Autopilot - ui/panels/placeholder.rs
//
// Shown for sections that have no view yet.

use crate::app::state::AppState;
use crate::core::model::Tab;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("\u{1f5a5}")
                .size(64.0)
                .color(theme::SLATE_LIGHT),
        );
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Module Under Construction")
                .size(20.0)
                .strong()
                .color(theme::SLATE),
        );
        ui.label(
            egui::RichText::new("This prototype focuses on the Dashboard and Evidence views.")
                .color(theme::SLATE_LIGHT),
        );
        ui.add_space(12.0);
        if ui.link("Return to Dashboard").clicked() {
            state.select_tab(Tab::Dashboard);
        }
    });
}
