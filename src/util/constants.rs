// CE Autopilot - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CE Autopilot";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CEAutopilot";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Live-update ticker
// =============================================================================

/// Default period of the dashboard live-update ticker (ms).
pub const DEFAULT_LIVE_UPDATE_INTERVAL_MS: u64 = 5_000;

/// Minimum user-configurable live-update period (ms).
pub const MIN_LIVE_UPDATE_INTERVAL_MS: u64 = 1_000;

/// Maximum user-configurable live-update period (ms).
pub const MAX_LIVE_UPDATE_INTERVAL_MS: u64 = 60_000;

// =============================================================================
// Evidence pack generation
// =============================================================================

/// Default simulated evidence-pack compile time (ms).
pub const DEFAULT_EVIDENCE_GENERATION_MS: u64 = 2_000;

/// Minimum user-configurable compile time (ms).
pub const MIN_EVIDENCE_GENERATION_MS: u64 = 100;

/// Maximum user-configurable compile time (ms).
pub const MAX_EVIDENCE_GENERATION_MS: u64 = 30_000;

// =============================================================================
// Timer threads
// =============================================================================

/// How often a sleeping timer thread wakes to check its cancel flag (ms).
/// Bounds the time between a cancel request and the thread exiting.
pub const TIMER_CANCEL_CHECK_INTERVAL_MS: u64 = 50;

/// Repaint cadence while an evidence pack is compiling (ms), so the spinner
/// animates and the completion is picked up without user input.
pub const GENERATING_REPAINT_INTERVAL_MS: u64 = 100;

// =============================================================================
// Score thresholds
// =============================================================================

/// Lowest score classified as "Almost Ready".
pub const ALMOST_READY_THRESHOLD: u8 = 80;

/// The only score classified as "Certified Ready".
pub const CERTIFIED_SCORE: u8 = 100;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
