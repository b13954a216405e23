// CE Autopilot - app/state.rs
//
// Application state management. Holds the active tab, the demo tenant's
// stats/issues/checklist/integrations, the mounted evidence session, and
// the status bar message.
// Owned by the eframe::App implementation and passed to panels explicitly.

use crate::app::evidence::EvidenceSession;
use crate::core::demo_data;
use crate::core::evidence::EvidenceStatus;
use crate::core::model::{
    ChecklistItem, ComplianceStats, Highlight, Integration, Issue, Organisation, Tab,
};
use crate::core::nav::{self, ViewKind};
use crate::core::score;
use crate::core::summary::DashboardSummary;
use std::time::Duration;

/// Top-level application state.
pub struct AppState {
    /// Tenant shown in the header.
    pub organisation: Organisation,

    /// Section currently selected in the sidebar.
    pub active_tab: Tab,

    /// Headline numbers for the dashboard cards.
    pub stats: ComplianceStats,

    /// Open action-required issues.
    pub issues: Vec<Issue>,

    /// Success entry listed after the issues.
    pub highlight: Highlight,

    /// Cyber Essentials controls for the evidence view.
    pub checklist: Vec<ChecklistItem>,

    /// Data-source badges.
    pub integrations: Vec<Integration>,

    /// Evidence view session; `Some` only while the Evidence tab is active.
    pub evidence: Option<EvidenceSession>,

    /// Simulated compile time for evidence packs.
    pub evidence_delay: Duration,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (configuration problems, failed compiles).
    pub warnings: Vec<String>,

    /// Live-update ticks applied since start-up.
    pub live_updates_applied: u64,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create the initial state showing `initial_tab`.
    pub fn new(initial_tab: Tab, evidence_delay: Duration, debug_mode: bool) -> Self {
        let mut state = Self {
            organisation: demo_data::organisation(),
            active_tab: Tab::Dashboard,
            stats: demo_data::initial_stats(),
            issues: demo_data::critical_issues(),
            highlight: demo_data::highlight(),
            checklist: demo_data::checklist(),
            integrations: demo_data::integrations(),
            evidence: None,
            evidence_delay,
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            live_updates_applied: 0,
            show_about: false,
            debug_mode,
        };
        state.select_tab(initial_tab);
        state
    }

    /// Navigation callback: make `tab` the active section.
    ///
    /// Leaving the Evidence tab drops its session (cancelling any compile in
    /// flight); entering it mounts a fresh idle session. Re-selecting the
    /// active tab changes nothing.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        tracing::info!(from = %self.active_tab, to = %tab, "Tab selected");

        if nav::route(tab) == ViewKind::Evidence {
            self.evidence = Some(EvidenceSession::new(self.evidence_delay));
        } else {
            self.evidence = None;
        }
        self.active_tab = tab;
    }

    /// The single view the central panel renders for the active tab.
    pub fn view(&self) -> ViewKind {
        nav::route(self.active_tab)
    }

    /// Apply one live-update tick. Leaves every visible value unchanged.
    pub fn apply_live_update(&mut self) {
        self.stats = score::refresh_stats(&self.stats);
        self.live_updates_applied += 1;
        tracing::trace!(
            ticks = self.live_updates_applied,
            score = self.stats.score,
            "Live update applied"
        );
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary::build(&self.stats, &self.issues)
    }

    /// True while an evidence pack compile is pending.
    pub fn is_generating(&self) -> bool {
        self.evidence
            .as_ref()
            .is_some_and(|s| s.status() == EvidenceStatus::Generating)
    }

    /// "Generate Draft Pack" pressed.
    pub fn request_generate(&mut self) {
        if let Some(session) = self.evidence.as_mut() {
            if session.request_generate() {
                self.status_message = "Compiling evidence pack...".to_string();
            }
        }
    }

    /// "Generate New Version" pressed.
    pub fn request_new_version(&mut self) {
        if let Some(session) = self.evidence.as_mut() {
            if session.request_new_version() {
                self.status_message = "Ready for a new evidence pack draft.".to_string();
            }
        }
    }

    /// Pick up a finished compile, if any.
    pub fn poll_evidence(&mut self) {
        let Some(session) = self.evidence.as_mut() else {
            return;
        };
        match session.poll() {
            Some(Ok(pack)) => {
                self.status_message = format!("Evidence pack ready: {}.", pack.caption());
            }
            Some(Err(e)) => {
                let msg = e.to_string();
                self.status_message = msg.clone();
                self.warnings.push(msg);
            }
            None => {}
        }
    }

    /// "Configure" pressed on an integration badge.
    pub fn configure_integration(&mut self, name: &str) {
        let Some(integration) = self.integrations.iter().find(|i| i.name == name) else {
            tracing::warn!(integration = name, "Unknown integration");
            return;
        };
        match integration.require_connected() {
            Ok(()) => self.prototype_action(&format!("Configure {name}")),
            Err(e) => {
                tracing::info!(error = %e, "Integration unavailable");
                self.status_message = format!("{e}. Reconnect it before configuring.");
            }
        }
    }

    /// A control with no behaviour in the prototype was pressed.
    pub fn prototype_action(&mut self, action: &str) {
        tracing::info!(action, "Prototype-only action pressed");
        self.status_message = format!("{action}: not available in this prototype.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Tab::Dashboard, Duration::from_millis(30), false)
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.active_tab, Tab::Dashboard);
        assert_eq!(s.view(), ViewKind::Dashboard);
        assert!(s.evidence.is_none());
        assert_eq!(s.stats, demo_data::initial_stats());
        assert_eq!(s.issues.len(), 3);
    }

    #[test]
    fn test_select_tab_routes_to_exactly_one_view() {
        let mut s = state();
        for tab in Tab::all() {
            s.select_tab(*tab);
            assert_eq!(s.active_tab, *tab);
            assert_eq!(s.view(), nav::route(*tab));
            assert_eq!(s.evidence.is_some(), *tab == Tab::Evidence);
        }
    }

    #[test]
    fn test_initial_tab_evidence_mounts_session() {
        let s = AppState::new(Tab::Evidence, Duration::from_millis(30), false);
        assert_eq!(s.view(), ViewKind::Evidence);
        assert_eq!(
            s.evidence.as_ref().map(|e| e.status()),
            Some(EvidenceStatus::Idle)
        );
    }

    #[test]
    fn test_reselecting_evidence_keeps_session() {
        let mut s = state();
        s.select_tab(Tab::Evidence);
        s.request_generate();
        s.select_tab(Tab::Evidence);
        assert!(s.is_generating());
    }

    #[test]
    fn test_leaving_evidence_mid_compile_cancels() {
        let mut s = state();
        s.select_tab(Tab::Evidence);
        s.request_generate();
        assert!(s.is_generating());

        s.select_tab(Tab::Endpoints);
        assert!(s.evidence.is_none());
        assert!(!s.is_generating());

        // Longer than the compile delay: nothing may surface afterwards.
        std::thread::sleep(Duration::from_millis(80));
        s.poll_evidence();
        s.select_tab(Tab::Evidence);
        assert_eq!(
            s.evidence.as_ref().map(|e| e.status()),
            Some(EvidenceStatus::Idle)
        );
        assert!(s.warnings.is_empty());
    }

    #[test]
    fn test_live_updates_never_change_stats() {
        let mut s = state();
        let before = s.dashboard_summary();
        for _ in 0..50 {
            s.apply_live_update();
        }
        assert_eq!(s.dashboard_summary(), before);
        assert_eq!(s.stats, demo_data::initial_stats());
        assert_eq!(s.live_updates_applied, 50);
    }

    #[test]
    fn test_configure_disconnected_integration_reports_unavailable() {
        let mut s = state();
        s.configure_integration("Intune MDM");
        assert!(s.status_message.contains("'Intune MDM' is disconnected"));
        s.configure_integration("Microsoft 365");
        assert!(s.status_message.contains("not available in this prototype"));
    }

    #[test]
    fn test_generate_outside_evidence_tab_is_noop() {
        let mut s = state();
        s.request_generate();
        assert!(!s.is_generating());
        assert_eq!(s.status_message, "Ready.");
    }
}
