// CE Autopilot - core/summary.rs
//
// Dashboard view model: the display values of the four summary cards,
// derived from the shell's stats and issues.

use crate::core::model::{ComplianceStats, Issue};
use crate::core::score::{self, Readiness};

/// Display values for one ratio card ("12/15").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioCard {
    pub value: String,
    /// True when the ratio is not complete (numerator != denominator).
    pub alert: bool,
}

impl RatioCard {
    fn new(part: u32, total: u32) -> Self {
        Self {
            value: format!("{part}/{total}"),
            alert: part != total,
        }
    }
}

/// Everything the dashboard summary row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub score: u8,
    /// Score ring caption, e.g. "68%".
    pub score_text: String,
    pub readiness: Readiness,
    /// Users with MFA enabled over tracked users.
    pub identity: RatioCard,
    /// Compliant devices over tracked devices.
    pub devices: RatioCard,
    /// Number of open issues.
    pub open_issues: usize,
}

impl DashboardSummary {
    pub fn build(stats: &ComplianceStats, issues: &[Issue]) -> Self {
        Self {
            score: stats.score,
            score_text: format!("{}%", stats.score),
            readiness: score::classify(stats.score),
            identity: RatioCard::new(stats.users_mfa, stats.users_total),
            devices: RatioCard::new(stats.devices_compliant, stats.devices_total),
            open_issues: issues.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::demo_data;

    #[test]
    fn test_initial_dashboard_values() {
        let summary =
            DashboardSummary::build(&demo_data::initial_stats(), &demo_data::critical_issues());
        assert_eq!(summary.score_text, "68%");
        assert_eq!(summary.readiness, Readiness::NotCertified);
        assert_eq!(summary.identity.value, "12/15");
        assert!(summary.identity.alert);
        assert_eq!(summary.devices.value, "19/24");
        assert!(summary.devices.alert);
        assert_eq!(summary.open_issues, 3);
    }

    #[test]
    fn test_full_ratio_clears_alert() {
        let stats = ComplianceStats {
            users_mfa: 15,
            users_total: 15,
            ..demo_data::initial_stats()
        };
        let summary = DashboardSummary::build(&stats, &[]);
        assert_eq!(summary.identity.value, "15/15");
        assert!(!summary.identity.alert);
        assert_eq!(summary.open_issues, 0);
    }
}
