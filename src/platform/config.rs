// CE Autopilot - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. The file is only ever read.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for CE Autopilot configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/ceautopilot/ or %APPDATA%\CEAutopilot\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
            }
        } else {
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml for this set of paths.
    pub fn config_file(&self) -> PathBuf {
        config_file_in(&self.config_dir)
    }
}

/// config.toml sits directly inside `config_dir`.
pub fn config_file_in(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[simulation]` section.
    pub simulation: SimulationSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "light" or "dark".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[simulation]` config section: timings of the simulated behaviour.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Run the dashboard live-update ticker.
    pub live_updates: Option<bool>,
    /// Live-update period in ms.
    pub live_update_interval_ms: Option<u64>,
    /// Simulated evidence pack compile time in ms.
    pub evidence_generation_ms: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Simulation --
    pub live_updates: bool,
    pub live_update_interval_ms: u64,
    pub evidence_generation_ms: u64,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            live_updates: true,
            live_update_interval_ms: constants::DEFAULT_LIVE_UPDATE_INTERVAL_MS,
            evidence_generation_ms: constants::DEFAULT_EVIDENCE_GENERATION_MS,
            log_level: None,
        }
    }
}

impl AppConfig {
    pub fn live_update_interval(&self) -> Duration {
        Duration::from_millis(self.live_update_interval_ms)
    }

    pub fn evidence_delay(&self) -> Duration {
        Duration::from_millis(self.evidence_generation_ms)
    }
}

/// Read and parse the raw file.
///
/// `Ok(None)` when the file does not exist (first run).
pub fn read_raw_config(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Check `value` against an inclusive range, describing a violation as a
/// `ConfigError::ValueOutOfRange`.
fn in_range<T>(field: &str, value: T, min: T, max: T) -> Result<T, ConfigError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: format!("{min}-{max}"),
        })
    }
}

/// Validate a parsed file against the named limits.
///
/// Every invalid field yields one warning and keeps its default.
pub fn validate(raw: &RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"light\" or \"dark\". Using default (light).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        match in_range(
            "ui.font_size",
            size,
            constants::MIN_FONT_SIZE,
            constants::MAX_FONT_SIZE,
        ) {
            Ok(v) => config.font_size = v,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_FONT_SIZE
            )),
        }
    }

    // -- Simulation --
    if let Some(enabled) = raw.simulation.live_updates {
        config.live_updates = enabled;
    }

    if let Some(ms) = raw.simulation.live_update_interval_ms {
        match in_range(
            "simulation.live_update_interval_ms",
            ms,
            constants::MIN_LIVE_UPDATE_INTERVAL_MS,
            constants::MAX_LIVE_UPDATE_INTERVAL_MS,
        ) {
            Ok(v) => config.live_update_interval_ms = v,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_LIVE_UPDATE_INTERVAL_MS
            )),
        }
    }

    if let Some(ms) = raw.simulation.evidence_generation_ms {
        match in_range(
            "simulation.evidence_generation_ms",
            ms,
            constants::MIN_EVIDENCE_GENERATION_MS,
            constants::MAX_EVIDENCE_GENERATION_MS,
        ) {
            Ok(v) => config.evidence_generation_ms = v,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_EVIDENCE_GENERATION_MS
            )),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

/// Load and validate `config.toml` from `config_dir`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings; an unreadable or
/// unparseable file yields defaults with one warning. The application always
/// starts.
///
/// Called before logging is initialised (the file may set the level), so it
/// does not log; the caller logs the returned warnings.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_file_in(config_dir);
    match read_raw_config(&path) {
        Ok(Some(raw)) => validate(&raw),
        Ok(None) => (AppConfig::default(), Vec::new()),
        Err(e) => (
            AppConfig::default(),
            vec![format!("{e}. Using defaults.")],
        ),
    }
}
