// CE Autopilot - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and owns the live-update ticker.

use crate::app::state::AppState;
use crate::app::ticker::LiveUpdateTicker;
use crate::core::nav::ViewKind;
use crate::platform::config::AppConfig;
use crate::ui;
use crate::util::constants::GENERATING_REPAINT_INTERVAL_MS;
use std::time::Duration;

/// The CE Autopilot application.
pub struct AutopilotApp {
    pub state: AppState,
    pub ticker: LiveUpdateTicker,
}

impl AutopilotApp {
    /// Create the application and start the live-update ticker (unless
    /// disabled in config). The ticker stops when the app is dropped.
    pub fn new(state: AppState, config: &AppConfig) -> Self {
        let mut ticker = LiveUpdateTicker::new();
        if config.live_updates {
            ticker.start(config.live_update_interval());
        } else {
            tracing::info!("Live updates disabled in config");
        }
        Self { state, ticker }
    }
}

impl eframe::App for AutopilotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Live-update ticks.
        for _tick in self.ticker.poll() {
            self.state.apply_live_update();
        }
        if self.ticker.is_active() {
            ctx.request_repaint_after(self.ticker.interval());
        }

        // Evidence pack compile.
        self.state.poll_evidence();
        if self.state.is_generating() {
            ctx.request_repaint_after(Duration::from_millis(GENERATING_REPAINT_INTERVAL_MS));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.ticker.is_active() {
                    ui.label(
                        egui::RichText::new(" \u{25cf} LIVE ")
                            .strong()
                            .color(ui::theme::GREEN)
                            .background_color(ui::theme::tint(ui::theme::GREEN)),
                    );
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.state.warnings.is_empty() {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} warning(s)",
                                self.state.warnings.len()
                            ))
                            .color(ui::theme::YELLOW),
                        )
                        .on_hover_text(self.state.warnings.join("\n"));
                    }
                    if self.state.debug_mode {
                        ui.label(format!("ticks: {}", self.state.live_updates_applied));
                    }
                });
            });
        });

        // Navigation rail
        egui::SidePanel::left("sidebar")
            .exact_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(ui::theme::SIDEBAR_BG)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui::panels::sidebar::render(ui, &mut self.state);
            });

        // Tenant header
        egui::TopBottomPanel::top("header")
            .exact_height(ui::theme::HEADER_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::header::render(ui, &self.state);
            });

        // Central view
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                    ui.add_space(8.0);
                    match self.state.view() {
                        ViewKind::Dashboard => ui::panels::dashboard::render(ui, &mut self.state),
                        ViewKind::Evidence => ui::panels::evidence::render(ui, &mut self.state),
                        ViewKind::Placeholder => {
                            ui::panels::placeholder::render(ui, &mut self.state)
                        }
                    }
                });
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
