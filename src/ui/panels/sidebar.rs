// CE Autopilot - ui/panels/sidebar.rs
//
// Left navigation rail. Stateless: renders the static navigation table and
// reports a click by calling `AppState::select_tab`.

use crate::app::state::AppState;
use crate::core::nav::{NavItem, NAV_ITEMS};
use crate::ui::theme;

/// Render the sidebar contents into the side panel's `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(" \u{1f6e1} ")
                .size(20.0)
                .color(egui::Color32::WHITE)
                .background_color(theme::BLUE),
        );
        ui.label(
            egui::RichText::new("CE Autopilot")
                .size(18.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
    });
    ui.add_space(20.0);

    for item in NAV_ITEMS {
        match *item {
            NavItem::Heading(caption) => {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(caption.to_uppercase())
                        .small()
                        .strong()
                        .color(theme::SIDEBAR_CAPTION),
                );
                ui.add_space(2.0);
            }
            NavItem::Entry { tab, label } => {
                let active = state.active_tab == tab;
                let text = egui::RichText::new(label).color(if active {
                    egui::Color32::WHITE
                } else {
                    theme::SIDEBAR_TEXT
                });
                let button = egui::Button::new(text)
                    .fill(if active {
                        theme::BLUE
                    } else {
                        egui::Color32::TRANSPARENT
                    })
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    state.select_tab(tab);
                }
            }
        }
    }

    // Footer pinned to the bottom of the rail.
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(12.0);
        let sign_out = egui::RichText::new("\u{21aa}  Sign Out").color(theme::SLATE_LIGHT);
        if ui.add(egui::Button::new(sign_out).frame(false)).clicked() {
            state.prototype_action("Sign Out");
        }
        let settings = egui::RichText::new("\u{2699}  Settings").color(theme::SIDEBAR_TEXT);
        if ui.add(egui::Button::new(settings).frame(false)).clicked() {
            state.prototype_action("Settings");
        }
        ui.separator();
    });
}
