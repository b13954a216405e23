// CE Autopilot - core/score.rs
//
// Readiness classification of the compliance score, and the live-update
// policy applied on each ticker tick.

use crate::core::model::ComplianceStats;
use crate::util::constants::{ALMOST_READY_THRESHOLD, CERTIFIED_SCORE};

/// Certification readiness band for a compliance score.
///
/// Fixed threshold table: below 80 is not certified, 80 to 99 is almost
/// ready, and only exactly 100 is certified ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readiness {
    NotCertified,
    AlmostReady,
    CertifiedReady,
}

impl Readiness {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Readiness::NotCertified => "Not Certified",
            Readiness::AlmostReady => "Almost Ready",
            Readiness::CertifiedReady => "Certified Ready",
        }
    }
}

impl std::fmt::Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a score into its readiness band.
///
/// Only a perfect score is Certified Ready; anything from the threshold up
/// (including out-of-range values above 100) is Almost Ready.
pub fn classify(score: u8) -> Readiness {
    if score == CERTIFIED_SCORE {
        Readiness::CertifiedReady
    } else if score >= ALMOST_READY_THRESHOLD {
        Readiness::AlmostReady
    } else {
        Readiness::NotCertified
    }
}

/// Re-derive the stats on a live-update tick.
///
/// A score below 100 is left unchanged and anything else is clamped to 100,
/// so for valid scores this is the identity. It is the hook a real polling
/// source would replace.
pub fn refresh_stats(prev: &ComplianceStats) -> ComplianceStats {
    ComplianceStats {
        score: prev.score.min(CERTIFIED_SCORE),
        ..prev.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::demo_data;

    #[test]
    fn test_classify_every_score() {
        for s in 0..=100u8 {
            let expected = if s < 80 {
                Readiness::NotCertified
            } else if s < 100 {
                Readiness::AlmostReady
            } else {
                Readiness::CertifiedReady
            };
            assert_eq!(classify(s), expected, "score {s}");
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(79).label(), "Not Certified");
        assert_eq!(classify(80).label(), "Almost Ready");
        assert_eq!(classify(99).label(), "Almost Ready");
        assert_eq!(classify(100).label(), "Certified Ready");
    }

    #[test]
    fn test_classify_above_perfect_is_not_certified_ready() {
        for s in 101..=u8::MAX {
            assert_eq!(classify(s), Readiness::AlmostReady, "score {s}");
        }
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let initial = demo_data::initial_stats();
        let mut stats = initial.clone();
        for _ in 0..1_000 {
            stats = refresh_stats(&stats);
        }
        assert_eq!(stats, initial);
    }

    #[test]
    fn test_refresh_clamps_out_of_range_score() {
        let stats = ComplianceStats {
            score: 140,
            ..demo_data::initial_stats()
        };
        assert_eq!(refresh_stats(&stats).score, 100);
        let perfect = ComplianceStats {
            score: 100,
            ..demo_data::initial_stats()
        };
        assert_eq!(refresh_stats(&perfect), perfect);
    }
}
