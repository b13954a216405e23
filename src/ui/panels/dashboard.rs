// CE Autopilot - ui/panels/dashboard.rs
//
// Dashboard view: four summary cards, the action-required list, and the
// data-source badges. Everything shown is derived from the state's stats,
// issues, and integrations; no control here changes them.

use crate::app::state::AppState;
use crate::core::demo_data::NEXT_SCAN_TEXT;
use crate::core::model::{Integration, IntegrationKind, Issue};
use crate::core::summary::{DashboardSummary, RatioCard};
use crate::ui::theme;

/// A click collected during rendering and applied afterwards, so the state
/// is not mutated while its lists are borrowed.
enum Action {
    Prototype(String),
    Configure(String),
}

/// Render the dashboard view into the central panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let summary = state.dashboard_summary();
    let mut action: Option<Action> = None;

    // ---- Title row ----
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new("Dashboard").strong());
            ui.label(
                egui::RichText::new(format!(
                    "Real-time overview for {}",
                    state.organisation.company
                ))
                .color(theme::SLATE),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{27f3} Scan Now").clicked() {
                action = Some(Action::Prototype("Scan Now".to_string()));
            }
        });
    });
    ui.add_space(16.0);

    // ---- Summary cards ----
    ui.columns(4, |cols| {
        score_card(&mut cols[0], &summary);
        ratio_card(
            &mut cols[1],
            "\u{1f465}",
            "Identity Status",
            &summary.identity,
            "Users MFA Enabled",
        );
        ratio_card(
            &mut cols[2],
            "\u{1f5a5}",
            "Device Health",
            &summary.devices,
            "Endpoints Patched",
        );
        stat_card(
            &mut cols[3],
            "\u{26a0}",
            "Critical Issues",
            &summary.open_issues.to_string(),
            "Requires Action",
            true,
        );
    });
    ui.add_space(16.0);

    // ---- Issues and data sources ----
    ui.columns(2, |cols| {
        card(&mut cols[0], |ui| {
            ui.horizontal(|ui| {
                ui.strong("Action Required");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.link("View All").clicked() {
                        action = Some(Action::Prototype("View All".to_string()));
                    }
                });
            });
            ui.add_space(8.0);
            for issue in &state.issues {
                if let Some(a) = issue_row(ui, issue) {
                    action = Some(a);
                }
                ui.add_space(6.0);
            }
            highlight_row(ui, &state.highlight.title, &state.highlight.detail);
        });

        card(&mut cols[1], |ui| {
            ui.strong("Data Sources");
            ui.add_space(8.0);
            for integration in &state.integrations {
                if integration_badge(ui, integration) {
                    action = Some(Action::Configure(integration.name.clone()));
                }
                ui.add_space(4.0);
            }
            ui.separator();
            ui.label(
                egui::RichText::new(format!("Last full sync: {}", state.stats.last_scan))
                    .small()
                    .color(theme::SLATE_LIGHT),
            );
            let manage = egui::Button::new(
                egui::RichText::new("Manage Integrations").color(egui::Color32::WHITE),
            )
            .fill(egui::Color32::from_rgb(30, 41, 59))
            .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(manage).clicked() {
                action = Some(Action::Prototype("Manage Integrations".to_string()));
            }
        });
    });

    match action {
        Some(Action::Prototype(name)) => state.prototype_action(&name),
        Some(Action::Configure(name)) => state.configure_integration(&name),
        None => {}
    }
}

/// White rounded card used for every dashboard block.
fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn score_card(ui: &mut egui::Ui, summary: &DashboardSummary) {
    let colour = theme::readiness_colour(summary.readiness);
    card(ui, |ui| {
        ui.set_min_height(theme::CARD_MIN_HEIGHT);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Live Compliance Score").color(theme::SLATE));
            ui.add_space(6.0);

            let d = theme::SCORE_RING_DIAMETER;
            let (rect, _) = ui.allocate_exact_size(egui::vec2(d, d), egui::Sense::hover());
            let radius = (d - theme::SCORE_RING_STROKE) / 2.0;
            ui.painter().circle_stroke(
                rect.center(),
                radius,
                egui::Stroke::new(theme::SCORE_RING_STROKE, colour),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &summary.score_text,
                egui::FontId::proportional(30.0),
                colour,
            );

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(summary.readiness.label())
                    .strong()
                    .color(colour),
            );
            ui.label(
                egui::RichText::new(NEXT_SCAN_TEXT)
                    .small()
                    .color(theme::SLATE_LIGHT),
            );
        });
    });
}

fn ratio_card(ui: &mut egui::Ui, icon: &str, label: &str, ratio: &RatioCard, subtext: &str) {
    stat_card(ui, icon, label, &ratio.value, subtext, ratio.alert);
}

fn stat_card(ui: &mut egui::Ui, icon: &str, label: &str, value: &str, subtext: &str, alert: bool) {
    let accent = if alert { theme::RED } else { theme::BLUE };
    card(ui, |ui| {
        ui.set_min_height(theme::CARD_MIN_HEIGHT);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(" {icon} "))
                    .size(20.0)
                    .color(accent)
                    .background_color(theme::tint(accent)),
            );
            if alert {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(egui::RichText::new("\u{25cf}").color(theme::RED));
                });
            }
        });
        ui.add_space(24.0);
        ui.label(egui::RichText::new(value).size(24.0).strong());
        ui.label(egui::RichText::new(label).color(theme::SLATE));
        ui.label(egui::RichText::new(subtext).small().color(theme::SLATE_LIGHT));
    });
}

fn issue_row(ui: &mut egui::Ui, issue: &Issue) -> Option<Action> {
    let colour = theme::severity_colour(issue.severity);
    let mut action = None;
    egui::Frame::group(ui.style())
        .fill(theme::tint(colour))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{26a0}").size(18.0).color(colour));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&issue.title).strong());
                    ui.label(
                        egui::RichText::new(format!(
                            "{} \u{2022} via {}",
                            issue.target, issue.source
                        ))
                        .color(theme::SLATE),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Fix").clicked() {
                        action = Some(Action::Prototype(format!("Fix \"{}\"", issue.title)));
                    }
                    ui.label(
                        egui::RichText::new(issue.severity.label())
                            .small()
                            .color(colour),
                    );
                });
            });
        });
    action
}

fn highlight_row(ui: &mut egui::Ui, title: &str, detail: &str) {
    egui::Frame::group(ui.style())
        .fill(theme::tint(theme::GREEN))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{2714}").size(18.0).color(theme::GREEN));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(detail).color(theme::SLATE));
                });
            });
        });
}

/// Returns true when "Configure" was clicked.
fn integration_badge(ui: &mut egui::Ui, integration: &Integration) -> bool {
    let colour = theme::integration_colour(integration.status);
    let icon = match integration.kind {
        IntegrationKind::Cloud => "\u{2601}",
        IntegrationKind::Agent => "\u{1f5a5}",
        IntegrationKind::Mobile => "\u{1f4f1}",
    };
    let mut clicked = false;
    egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(" {icon} "))
                        .color(colour)
                        .background_color(theme::tint(colour)),
                );
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&integration.name).strong());
                    let caption = if integration.is_connected() {
                        format!("\u{25cf} {}", integration.status.caption())
                    } else {
                        integration.status.caption().to_string()
                    };
                    ui.label(egui::RichText::new(caption).small().color(colour));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    clicked = ui.link("Configure").clicked();
                });
            });
        });
    clicked
}
