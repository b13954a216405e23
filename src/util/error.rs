// CE Autopilot - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation between layers.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CE Autopilot operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum AutopilotError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Evidence pack generation failed.
    Evidence(EvidenceError),

    /// A data-source integration could not be used.
    Integration(IntegrationError),
}

impl fmt::Display for AutopilotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Evidence(e) => write!(f, "Evidence error: {e}"),
            Self::Integration(e) => write!(f, "Integration error: {e}"),
        }
    }
}

impl std::error::Error for AutopilotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Evidence(e) => Some(e),
            Self::Integration(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for AutopilotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Evidence errors
// ---------------------------------------------------------------------------

/// Errors related to evidence pack generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceError {
    /// The generator reported a failure.
    GenerationFailed { reason: String },

    /// The generation timer went away without reporting completion.
    TimerDisconnected,
}

impl fmt::Display for EvidenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationFailed { reason } => {
                write!(f, "Evidence pack generation failed: {reason}")
            }
            Self::TimerDisconnected => write!(
                f,
                "Evidence pack generation stopped before completing. Try again."
            ),
        }
    }
}

impl std::error::Error for EvidenceError {}

impl From<EvidenceError> for AutopilotError {
    fn from(e: EvidenceError) -> Self {
        Self::Evidence(e)
    }
}

// ---------------------------------------------------------------------------
// Integration errors
// ---------------------------------------------------------------------------

/// Errors related to data-source integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationError {
    /// The integration is not connected, so it cannot be configured or synced.
    Unavailable { integration: String },
}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { integration } => {
                write!(f, "'{integration}' is disconnected")
            }
        }
    }
}

impl std::error::Error for IntegrationError {}

impl From<IntegrationError> for AutopilotError {
    fn from(e: IntegrationError) -> Self {
        Self::Integration(e)
    }
}

/// Convenience type alias for CE Autopilot results.
pub type Result<T> = std::result::Result<T, AutopilotError>;
