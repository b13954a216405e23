// CE Autopilot - core/demo_data.rs
//
// Built-in demonstration tenant. Every value the UI shows comes from here;
// there is no telemetry ingestion behind the prototype.

use crate::core::model::{
    CheckStatus, ChecklistItem, ComplianceStats, Highlight, Integration, IntegrationKind,
    IntegrationStatus, Issue, IssueSeverity, Organisation,
};

/// Controls counted as met on the evidence summary card.
///
/// Fixed display value; it is not derived from the checklist.
pub const CONTROLS_MET: u32 = 4;

/// Total controls on the evidence summary card.
pub const CONTROLS_TOTAL: u32 = 5;

/// Warning shown under the controls progress bar.
pub const CONTROLS_WARNING: &str =
    "Warning: Fix \"Secure Configuration\" before generating final report.";

/// Questionnaire the evidence view is mapped to.
pub const QUESTIONNAIRE: &str = "Cyber Essentials Questionnaire (IASME v3.1)";

/// Countdown text under the score ring.
pub const NEXT_SCAN_TEXT: &str = "Next scan in 15 mins";

pub fn organisation() -> Organisation {
    Organisation {
        company: "Acme Logistics Ltd".to_string(),
        initials: "AL".to_string(),
        plan: "Premium Plan \u{2022} MSP Managed".to_string(),
        user: "Admin User".to_string(),
    }
}

pub fn initial_stats() -> ComplianceStats {
    ComplianceStats {
        score: 68,
        devices_total: 24,
        devices_compliant: 19,
        users_total: 15,
        users_mfa: 12,
        last_scan: "2 hours ago".to_string(),
    }
}

fn issue(id: u32, title: &str, target: &str, source: &str, severity: IssueSeverity) -> Issue {
    Issue {
        id,
        title: title.to_string(),
        target: target.to_string(),
        source: source.to_string(),
        severity,
    }
}

pub fn critical_issues() -> Vec<Issue> {
    vec![
        issue(
            1,
            "MFA Disabled",
            "Sarah Jenkins (Finance)",
            "Microsoft 365",
            IssueSeverity::High,
        ),
        issue(
            2,
            "Windows Update Failed",
            "Warehouse-PC-04",
            "Agent",
            IssueSeverity::High,
        ),
        issue(
            3,
            "iOS Version Outdated",
            "Director iPad",
            "Intune",
            IssueSeverity::Medium,
        ),
    ]
}

/// The success entry listed after the open issues.
pub fn highlight() -> Highlight {
    Highlight {
        title: "Phishing Simulation Complete".to_string(),
        detail: "November Campaign \u{2022} 98% pass rate".to_string(),
    }
}

fn check(id: &str, label: &str, status: CheckStatus, detail: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        status,
        detail: detail.to_string(),
    }
}

/// The five Cyber Essentials controls, in display order.
pub fn checklist() -> Vec<ChecklistItem> {
    vec![
        check(
            "firewalls",
            "Firewalls",
            CheckStatus::Pass,
            "Software firewalls active on all 24 endpoints.",
        ),
        check(
            "config",
            "Secure Configuration",
            CheckStatus::Fail,
            "3 devices have guest accounts enabled.",
        ),
        check(
            "patching",
            "Security Update Management",
            CheckStatus::Warning,
            "1 device pending critical update (KB5034441).",
        ),
        check(
            "access",
            "User Access Control",
            CheckStatus::Pass,
            "Admin privileges restricted correctly.",
        ),
        check(
            "malware",
            "Malware Protection",
            CheckStatus::Pass,
            "Defender real-time protection active.",
        ),
    ]
}

fn integration(name: &str, status: IntegrationStatus, kind: IntegrationKind) -> Integration {
    Integration {
        name: name.to_string(),
        status,
        kind,
    }
}

pub fn integrations() -> Vec<Integration> {
    vec![
        integration(
            "Microsoft 365",
            IntegrationStatus::Connected,
            IntegrationKind::Cloud,
        ),
        integration(
            "Azure AD / Entra",
            IntegrationStatus::Connected,
            IntegrationKind::Cloud,
        ),
        integration(
            "Local Agents",
            IntegrationStatus::Connected,
            IntegrationKind::Agent,
        ),
        integration(
            "Intune MDM",
            IntegrationStatus::Disconnected,
            IntegrationKind::Mobile,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_order_and_statuses() {
        let items = checklist();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["firewalls", "config", "patching", "access", "malware"]);
        let statuses: Vec<_> = items.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            [
                CheckStatus::Pass,
                CheckStatus::Fail,
                CheckStatus::Warning,
                CheckStatus::Pass,
                CheckStatus::Pass,
            ]
        );
    }

    #[test]
    fn test_only_intune_is_disconnected() {
        let disconnected: Vec<_> = integrations()
            .into_iter()
            .filter(|i| !i.is_connected())
            .map(|i| i.name)
            .collect();
        assert_eq!(disconnected, ["Intune MDM"]);
    }

    #[test]
    fn test_initial_stats_respect_totals() {
        let stats = initial_stats();
        assert!(stats.devices_compliant <= stats.devices_total);
        assert!(stats.users_mfa <= stats.users_total);
        assert!(CONTROLS_MET <= CONTROLS_TOTAL);
    }
}
