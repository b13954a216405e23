// CE Autopilot - app/evidence.rs
//
// Evidence view session: the evidence state machine plus the timer that
// drives its automatic Generating -> Complete transition.
//
// A session exists only while the Evidence tab is shown. `AppState` creates
// it on entering the tab and drops it on leaving, which cancels any compile
// in flight; coming back starts from Idle.

use crate::app::generation::GenerationTimer;
use crate::core::evidence::{self, EvidenceControls, EvidenceEvent, EvidencePack, EvidenceStatus};
use crate::util::error::EvidenceError;
use std::time::Duration;

pub struct EvidenceSession {
    status: EvidenceStatus,
    timer: GenerationTimer,
    delay: Duration,
    pack: Option<EvidencePack>,
    drafts_compiled: u32,
}

impl EvidenceSession {
    /// New idle session whose compiles take `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            status: EvidenceStatus::Idle,
            timer: GenerationTimer::new(),
            delay,
            pack: None,
            drafts_compiled: 0,
        }
    }

    pub fn status(&self) -> EvidenceStatus {
        self.status
    }

    pub fn controls(&self) -> EvidenceControls {
        evidence::controls(self.status)
    }

    /// The most recently compiled draft (only while Complete).
    pub fn pack(&self) -> Option<&EvidencePack> {
        self.pack.as_ref()
    }

    fn apply(&mut self, event: EvidenceEvent) -> bool {
        match self.status.on(event) {
            Some(next) => {
                tracing::debug!(from = %self.status, to = %next, ?event, "Evidence status changed");
                self.status = next;
                true
            }
            None => {
                tracing::debug!(status = %self.status, ?event, "Evidence event ignored");
                false
            }
        }
    }

    /// "Generate Draft Pack". Returns false (and does nothing) unless Idle.
    pub fn request_generate(&mut self) -> bool {
        if !self.apply(EvidenceEvent::Generate) {
            return false;
        }
        self.timer.start(self.delay);
        true
    }

    /// "Generate New Version". Returns false (and does nothing) unless Complete.
    pub fn request_new_version(&mut self) -> bool {
        if !self.apply(EvidenceEvent::NewVersion) {
            return false;
        }
        self.pack = None;
        true
    }

    /// Advance the session if the compile has finished.
    ///
    /// Returns the finished pack or the failure that sent the session back to
    /// Idle; `None` while nothing changed.
    pub fn poll(&mut self) -> Option<Result<&EvidencePack, EvidenceError>> {
        if self.status != EvidenceStatus::Generating {
            return None;
        }
        match self.timer.poll()? {
            Ok(()) => {
                self.apply(EvidenceEvent::Completed);
                self.drafts_compiled += 1;
                let pack = self.pack.insert(EvidencePack {
                    version: self.drafts_compiled,
                    generated_at: chrono::Utc::now(),
                });
                tracing::info!(version = pack.version, "Evidence pack compiled");
                Some(Ok(&*pack))
            }
            Err(e) => {
                self.apply(EvidenceEvent::Failed);
                tracing::warn!(error = %e, "Evidence pack compile failed");
                Some(Err(e))
            }
        }
    }
}

impl Drop for EvidenceSession {
    fn drop(&mut self) {
        if self.status == EvidenceStatus::Generating {
            tracing::info!("Evidence view closed while compiling; compile discarded");
        }
        // The timer's own Drop cancels the background thread.
    }
}
