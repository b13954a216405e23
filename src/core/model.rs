// CE Autopilot - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Every record here is immutable demo data: nothing in the application
// creates, updates, or deletes them after start-up.

use crate::util::error::IntegrationError;

// =============================================================================
// Compliance statistics
// =============================================================================

/// Headline numbers shown on the dashboard summary cards.
///
/// `devices_compliant <= devices_total` and `users_mfa <= users_total` are
/// expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceStats {
    /// Overall readiness, 0-100.
    pub score: u8,
    pub devices_total: u32,
    pub devices_compliant: u32,
    pub users_total: u32,
    pub users_mfa: u32,
    /// Human-readable age of the last full sync (e.g. "2 hours ago").
    pub last_scan: String,
}

// =============================================================================
// Issues
// =============================================================================

/// Severity of an action-required issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

impl IssueSeverity {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            IssueSeverity::High => "High",
            IssueSeverity::Medium => "Medium",
            IssueSeverity::Low => "Low",
        }
    }
}

/// A problem detected on a user, device, or tenant that needs fixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: u32,
    pub title: String,
    /// The affected user or device.
    pub target: String,
    /// The data source that reported it.
    pub source: String,
    pub severity: IssueSeverity,
}

/// A positive event listed under the issues (e.g. a finished campaign).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub title: String,
    pub detail: String,
}

// =============================================================================
// Checklist
// =============================================================================

/// Evaluation outcome of a single compliance control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

impl CheckStatus {
    /// Lowercase identifier ("pass", "fail", "warning").
    pub fn id(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
        }
    }

    /// Upper-case badge text.
    pub fn badge(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warning => "WARNING",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One of the five Cyber Essentials controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub status: CheckStatus,
    pub detail: String,
}

// =============================================================================
// Integrations
// =============================================================================

/// Connection state of a telemetry data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
}

impl IntegrationStatus {
    /// Caption shown under the integration name.
    pub fn caption(&self) -> &'static str {
        match self {
            IntegrationStatus::Connected => "Syncing",
            IntegrationStatus::Disconnected => "Disconnected",
        }
    }
}

/// What kind of telemetry an integration provides (selects the icon).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationKind {
    Cloud,
    Agent,
    Mobile,
}

/// A data source badge on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub name: String,
    pub status: IntegrationStatus,
    pub kind: IntegrationKind,
}

impl Integration {
    pub fn is_connected(&self) -> bool {
        self.status == IntegrationStatus::Connected
    }

    /// Fails with `IntegrationError::Unavailable` unless connected.
    pub fn require_connected(&self) -> Result<(), IntegrationError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(IntegrationError::Unavailable {
                integration: self.name.clone(),
            })
        }
    }
}

// =============================================================================
// Organisation
// =============================================================================

/// The tenant shown in the header bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organisation {
    pub company: String,
    pub initials: String,
    pub plan: String,
    pub user: String,
}

// =============================================================================
// Navigation
// =============================================================================

/// Selectable sections of the application.
///
/// Only `Dashboard` and `Evidence` have real views; the asset sections
/// render a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Evidence,
    Endpoints,
    Identity,
    Mobile,
}

impl Tab {
    /// All tabs in navigation order.
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Evidence,
            Tab::Endpoints,
            Tab::Identity,
            Tab::Mobile,
        ]
    }

    /// Stable string identifier (used on the command line).
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Evidence => "evidence",
            Tab::Endpoints => "endpoints",
            Tab::Identity => "identity",
            Tab::Mobile => "mobile",
        }
    }

    /// Look up a tab by its identifier.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.id() == id)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_round_trip_through_lookup() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_id(tab.id()), Some(*tab));
        }
        assert_eq!(Tab::from_id("settings"), None);
        assert_eq!(Tab::from_id("Dashboard"), None);
    }

    #[test]
    fn test_default_tab_is_dashboard() {
        assert_eq!(Tab::default(), Tab::Dashboard);
    }

    #[test]
    fn test_check_status_badges() {
        assert_eq!(CheckStatus::Pass.badge(), "PASS");
        assert_eq!(CheckStatus::Fail.badge(), "FAIL");
        assert_eq!(CheckStatus::Warning.badge(), "WARNING");
        assert_eq!(CheckStatus::Warning.to_string(), "warning");
    }
}
