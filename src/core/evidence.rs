// CE Autopilot - core/evidence.rs
//
// Evidence pack state machine and the evidence view model.
//
// States:   Idle --Generate--> Generating --Completed--> Complete
//           Generating --Failed--> Idle
//           Complete --NewVersion--> Idle
// Every other (state, event) pair is ignored.

use crate::core::demo_data::{CONTROLS_MET, CONTROLS_TOTAL, CONTROLS_WARNING};
use chrono::{DateTime, Utc};

pub const GENERATE_LABEL: &str = "Generate Draft Pack";
pub const COMPILING_LABEL: &str = "Compiling PDF...";
pub const DOWNLOAD_LABEL: &str = "Download PDF";
pub const NEW_VERSION_LABEL: &str = "Generate New Version";

/// Where the evidence pack flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvidenceStatus {
    #[default]
    Idle,
    Generating,
    Complete,
}

/// Inputs to the evidence state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceEvent {
    /// "Generate Draft Pack" pressed.
    Generate,
    /// The generation delay elapsed.
    Completed,
    /// Generation stopped without producing a pack.
    Failed,
    /// "Generate New Version" pressed.
    NewVersion,
}

impl EvidenceStatus {
    /// Next state for `event`, or `None` if the event is ignored here.
    pub fn on(self, event: EvidenceEvent) -> Option<EvidenceStatus> {
        use EvidenceEvent as E;
        use EvidenceStatus as S;
        match (self, event) {
            (S::Idle, E::Generate) => Some(S::Generating),
            (S::Generating, E::Completed) => Some(S::Complete),
            (S::Generating, E::Failed) => Some(S::Idle),
            (S::Complete, E::NewVersion) => Some(S::Idle),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvidenceStatus::Idle => "idle",
            EvidenceStatus::Generating => "generating",
            EvidenceStatus::Complete => "complete",
        }
    }
}

impl std::fmt::Display for EvidenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What the evidence card's action area shows for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceControls {
    /// The single generate button (idle and generating share it).
    Generate {
        label: &'static str,
        enabled: bool,
        /// Spinner instead of the document icon.
        busy: bool,
    },
    /// "Download PDF" plus the "Generate New Version" reset.
    Download,
}

pub fn controls(status: EvidenceStatus) -> EvidenceControls {
    match status {
        EvidenceStatus::Idle => EvidenceControls::Generate {
            label: GENERATE_LABEL,
            enabled: true,
            busy: false,
        },
        EvidenceStatus::Generating => EvidenceControls::Generate {
            label: COMPILING_LABEL,
            enabled: false,
            busy: true,
        },
        EvidenceStatus::Complete => EvidenceControls::Download,
    }
}

/// An in-memory record of a simulated compiled pack. Nothing is rendered
/// or written; it only carries what the UI shows about the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidencePack {
    /// 1-based count of drafts compiled in this session.
    pub version: u32,
    pub generated_at: DateTime<Utc>,
}

impl EvidencePack {
    pub fn caption(&self) -> String {
        format!(
            "Draft v{} compiled at {} UTC",
            self.version,
            self.generated_at.format("%H:%M:%S")
        )
    }
}

/// The "Controls Met" summary on the evidence card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsProgress {
    pub met: u32,
    pub total: u32,
    pub warning: &'static str,
}

impl ControlsProgress {
    /// The fixed summary shipped with the demo tenant.
    pub fn fixed() -> Self {
        Self {
            met: CONTROLS_MET,
            total: CONTROLS_TOTAL,
            warning: CONTROLS_WARNING,
        }
    }

    pub fn text(&self) -> String {
        format!("{}/{}", self.met, self.total)
    }

    /// Progress bar fill, 0.0-1.0.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.met as f32 / self.total as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ALL_EVENTS: [EvidenceEvent; 4] = [
        EvidenceEvent::Generate,
        EvidenceEvent::Completed,
        EvidenceEvent::Failed,
        EvidenceEvent::NewVersion,
    ];

    #[test]
    fn test_happy_path() {
        let s = EvidenceStatus::default();
        let s = s.on(EvidenceEvent::Generate).unwrap();
        assert_eq!(s, EvidenceStatus::Generating);
        let s = s.on(EvidenceEvent::Completed).unwrap();
        assert_eq!(s, EvidenceStatus::Complete);
        let s = s.on(EvidenceEvent::NewVersion).unwrap();
        assert_eq!(s, EvidenceStatus::Idle);
    }

    #[test]
    fn test_generate_ignored_while_generating() {
        assert_eq!(
            EvidenceStatus::Generating.on(EvidenceEvent::Generate),
            None
        );
    }

    #[test]
    fn test_only_four_transitions_exist() {
        let statuses = [
            EvidenceStatus::Idle,
            EvidenceStatus::Generating,
            EvidenceStatus::Complete,
        ];
        let accepted = statuses
            .iter()
            .flat_map(|s| ALL_EVENTS.iter().map(move |e| s.on(*e)))
            .filter(Option::is_some)
            .count();
        assert_eq!(accepted, 4);
    }

    #[test]
    fn test_controls_per_status() {
        assert_eq!(
            controls(EvidenceStatus::Idle),
            EvidenceControls::Generate {
                label: "Generate Draft Pack",
                enabled: true,
                busy: false
            }
        );
        assert_eq!(
            controls(EvidenceStatus::Generating),
            EvidenceControls::Generate {
                label: "Compiling PDF...",
                enabled: false,
                busy: true
            }
        );
        assert_eq!(
            controls(EvidenceStatus::Complete),
            EvidenceControls::Download
        );
    }

    #[test]
    fn test_controls_progress_is_fixed() {
        let p = ControlsProgress::fixed();
        assert_eq!(p.text(), "4/5");
        assert!((p.fraction() - 0.8).abs() < f32::EPSILON);
        assert!(p.warning.contains("Secure Configuration"));
    }

    #[test]
    fn test_pack_caption() {
        let pack = EvidencePack {
            version: 2,
            generated_at: Utc.with_ymd_and_hms(2024, 11, 5, 9, 7, 3).unwrap(),
        };
        assert_eq!(pack.caption(), "Draft v2 compiled at 09:07:03 UTC");
    }
}
