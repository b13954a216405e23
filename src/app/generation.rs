// CE Autopilot - app/generation.rs
//
// One-shot timer that stands in for compiling the evidence pack PDF.
//
// Same shape as the live-update ticker: a background thread sleeps for the
// configured delay (checking its cancel flag), then sends a single
// `GenerationProgress` message. Dropping or cancelling the timer sets the
// flag and drops the receiver, so a completion can never be delivered to an
// owner that no longer exists.

use crate::app::ticker::sleep_unless_cancelled;
use crate::util::error::EvidenceError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

/// Message from the generation thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationProgress {
    Completed,
    Failed { reason: String },
}

/// Manages a single pending evidence pack compile.
pub struct GenerationTimer {
    progress_rx: Option<mpsc::Receiver<GenerationProgress>>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl GenerationTimer {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
        }
    }

    /// Start a compile that completes after `delay`. A pending compile is
    /// cancelled first.
    pub fn start(&mut self, delay: Duration) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_generation(delay, tx, cancel);
        });

        tracing::info!(delay_ms = delay.as_millis() as u64, "Evidence pack compile started");
    }

    /// Cancel the pending compile, if any.
    pub fn cancel(&mut self) {
        if let Some(flag) = self.cancel_flag.take() {
            flag.store(true, Ordering::SeqCst);
            tracing::debug!("Evidence pack compile cancelled");
        }
        self.progress_rx = None;
    }

    /// Check for the outcome without blocking.
    ///
    /// `None` while still pending (or when nothing was started). Once an
    /// outcome is returned the timer is idle again.
    pub fn poll(&mut self) -> Option<Result<(), EvidenceError>> {
        let rx = self.progress_rx.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(GenerationProgress::Completed) => Ok(()),
            Ok(GenerationProgress::Failed { reason }) => {
                Err(EvidenceError::GenerationFailed { reason })
            }
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(EvidenceError::TimerDisconnected),
        };
        self.progress_rx = None;
        self.cancel_flag = None;
        Some(outcome)
    }
}

impl Default for GenerationTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GenerationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run_generation(delay: Duration, tx: mpsc::Sender<GenerationProgress>, cancel: Arc<AtomicBool>) {
    if !sleep_unless_cancelled(delay, &cancel) {
        tracing::debug!("Evidence pack compile thread cancelled before completion");
        return;
    }
    // A send error means the owner is gone; nothing left to notify.
    let _ = tx.send(GenerationProgress::Completed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wait_for_outcome(timer: &mut GenerationTimer) -> Option<Result<(), EvidenceError>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(outcome) = timer.poll() {
                return Some(outcome);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_completes_after_delay() {
        let mut timer = GenerationTimer::new();
        let started = Instant::now();
        timer.start(Duration::from_millis(60));
        assert_eq!(timer.poll(), None);
        assert_eq!(wait_for_outcome(&mut timer), Some(Ok(())));
        assert!(started.elapsed() >= Duration::from_millis(60));
        // One outcome per start.
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(timer.poll(), None);
    }

    #[test]
    fn test_cancel_discards_outcome() {
        let mut timer = GenerationTimer::new();
        timer.start(Duration::from_millis(20));
        timer.cancel();
        std::thread::sleep(Duration::from_millis(80));
        assert_eq!(timer.poll(), None);
    }

    #[test]
    fn test_nothing_started_polls_none() {
        let mut timer = GenerationTimer::default();
        assert_eq!(timer.poll(), None);
    }
}
