// CE Autopilot - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use ce_autopilot::app;
pub use ce_autopilot::core;
pub use ce_autopilot::platform;
pub use ce_autopilot::ui;
pub use ce_autopilot::util;

use clap::Parser;
use std::path::PathBuf;

/// Parse a `--tab` value into a `Tab`, listing valid ids on failure.
fn parse_tab(s: &str) -> Result<core::model::Tab, String> {
    core::model::Tab::from_id(s).ok_or_else(|| {
        let valid: Vec<&str> = core::model::Tab::all().iter().map(|t| t.id()).collect();
        format!("unknown tab '{s}' (valid: {})", valid.join(", "))
    })
}

/// CE Autopilot - Cyber Essentials compliance dashboard prototype.
///
/// Shows readiness score, open issues, data sources, and the evidence
/// checklist for a demonstration tenant.
#[derive(Parser, Debug)]
#[command(name = "ce-autopilot", version, about)]
struct Cli {
    /// Section to open at start-up (dashboard, evidence, endpoints, identity, mobile).
    #[arg(short = 't', long = "tab", value_parser = parse_tab, default_value = "dashboard")]
    tab: core::model::Tab,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config first: it may set the log level.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let config_path = match cli.config_dir {
        Some(ref dir) => platform::config::config_file_in(dir),
        None => platform_paths.config_file(),
    };
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        tab = %cli.tab,
        config = %config_path.display(),
        "CE Autopilot starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let mut state = app::state::AppState::new(cli.tab, config.evidence_delay(), cli.debug);
    if !config_warnings.is_empty() {
        state.status_message = format!(
            "config.toml: {} problem(s), defaults used. See warnings.",
            config_warnings.len()
        );
        state.warnings.extend(config_warnings);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, config.dark_mode, config.font_size);
            Ok(Box::new(gui::AutopilotApp::new(state, &config)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CE Autopilot GUI: {e}");
        std::process::exit(1);
    }
}
