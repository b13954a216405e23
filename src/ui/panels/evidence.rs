// CE Autopilot - ui/panels/evidence.rs
//
// Evidence & Assessment view: the fixed controls checklist and the
// evidence pack card driven by the mounted `EvidenceSession`.

use crate::app::state::AppState;
use crate::core::demo_data::QUESTIONNAIRE;
use crate::core::evidence::{
    self, ControlsProgress, EvidenceControls, EvidenceStatus, DOWNLOAD_LABEL, NEW_VERSION_LABEL,
};
use crate::core::model::ChecklistItem;
use crate::ui::theme;

#[derive(Clone, Copy)]
enum Action {
    Generate,
    NewVersion,
    Download,
    OpenControl,
}

/// Render the evidence view into the central panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let controls = state
        .evidence
        .as_ref()
        .map(|s| s.controls())
        .unwrap_or_else(|| evidence::controls(EvidenceStatus::Idle));
    let pack_caption = state
        .evidence
        .as_ref()
        .and_then(|s| s.pack())
        .map(|p| p.caption());
    let progress = ControlsProgress::fixed();
    let mut action: Option<Action> = None;

    ui.heading(egui::RichText::new("Evidence & Assessment").strong());
    ui.label(egui::RichText::new(QUESTIONNAIRE).color(theme::SLATE));
    ui.add_space(16.0);

    ui.columns(2, |cols| {
        // ---- Checklist ----
        for item in &state.checklist {
            if checklist_row(&mut cols[0], item) {
                action = Some(Action::OpenControl);
            }
            cols[0].add_space(8.0);
        }

        // ---- Evidence pack card ----
        let ui = &mut cols[1];
        egui::Frame::group(ui.style())
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.strong("Evidence Pack");
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Generate a PDF report containing all telemetry data mapped to the {} key controls.",
                        progress.total
                    ))
                    .color(theme::SLATE),
                );
                ui.add_space(12.0);

                egui::Frame::group(ui.style())
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("Controls Met:").color(theme::SLATE));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.strong(progress.text());
                                },
                            );
                        });
                        ui.add(
                            egui::ProgressBar::new(progress.fraction())
                                .fill(theme::YELLOW)
                                .desired_height(8.0),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(progress.warning)
                                .small()
                                .color(theme::RED),
                        );
                    });
                ui.add_space(12.0);

                let full_width = egui::vec2(ui.available_width(), 40.0);
                match controls {
                    EvidenceControls::Generate {
                        label,
                        enabled,
                        busy,
                    } => {
                        ui.horizontal(|ui| {
                            if busy {
                                ui.add(egui::Spinner::new());
                            }
                            let text = if busy {
                                egui::RichText::new(label)
                            } else {
                                egui::RichText::new(format!("\u{1f4c4} {label}"))
                            };
                            let button = egui::Button::new(
                                text.strong().color(egui::Color32::WHITE),
                            )
                            .fill(if enabled { theme::BLUE } else { theme::SLATE_LIGHT })
                            .min_size(egui::vec2(ui.available_width(), full_width.y));
                            if ui.add_enabled(enabled, button).clicked() {
                                action = Some(Action::Generate);
                            }
                        });
                    }
                    EvidenceControls::Download => {
                        let download = egui::Button::new(
                            egui::RichText::new(format!("\u{2b07} {DOWNLOAD_LABEL}"))
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(theme::GREEN)
                        .min_size(full_width);
                        if ui.add(download).clicked() {
                            action = Some(Action::Download);
                        }
                        if let Some(ref caption) = pack_caption {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(caption)
                                        .small()
                                        .color(theme::SLATE),
                                );
                            });
                        }
                        ui.vertical_centered(|ui| {
                            let reset = egui::Button::new(
                                egui::RichText::new(NEW_VERSION_LABEL).color(theme::SLATE),
                            )
                            .frame(false);
                            if ui.add(reset).clicked() {
                                action = Some(Action::NewVersion);
                            }
                        });
                    }
                }
            });
    });

    match action {
        Some(Action::Generate) => state.request_generate(),
        Some(Action::NewVersion) => state.request_new_version(),
        Some(Action::Download) => state.prototype_action(DOWNLOAD_LABEL),
        Some(Action::OpenControl) => state.prototype_action("Control details"),
        None => {}
    }
}

/// One checklist row. Returns true when its chevron was clicked.
fn checklist_row(ui: &mut egui::Ui, item: &ChecklistItem) -> bool {
    let colour = theme::check_colour(item.status);
    let mut clicked = false;
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(theme::check_icon(item.status))
                        .size(20.0)
                        .color(colour),
                );
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&item.label).strong());
                        ui.label(
                            egui::RichText::new(format!(" {} ", item.status.badge()))
                                .small()
                                .strong()
                                .color(colour)
                                .background_color(theme::tint(colour)),
                        );
                    });
                    ui.label(egui::RichText::new(&item.detail).color(theme::SLATE));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    clicked = ui
                        .add(egui::Button::new("\u{203a}").frame(false))
                        .clicked();
                });
            });
        });
    clicked
}
