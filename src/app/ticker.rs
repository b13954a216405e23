// CE Autopilot - app/ticker.rs
//
// Live-update ticker: a periodic timer on a background thread that tells the
// UI thread to re-derive the dashboard stats.
//
// Architecture:
//   - `LiveUpdateTicker` lives on the UI thread; `run_ticker` runs on a
//     background thread sleeping in short sub-intervals.
//   - An `Arc<AtomicBool>` cancel flag stops the thread; dropping the ticker
//     sets it, so the thread never outlives its owner by more than one
//     cancel-check interval.
//   - Ticks are sent over an mpsc channel and drained by `poll` each frame.

use crate::util::constants::TIMER_CANCEL_CHECK_INTERVAL_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

/// One elapsed ticker period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// 1-based count of ticks since the ticker started.
    pub sequence: u64,
}

/// Sleep for `duration`, waking every `TIMER_CANCEL_CHECK_INTERVAL_MS` to
/// check `cancel`.
///
/// Returns `true` if the full duration elapsed, `false` if cancelled.
pub(crate) fn sleep_unless_cancelled(duration: Duration, cancel: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    let step = Duration::from_millis(TIMER_CANCEL_CHECK_INTERVAL_MS);
    loop {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        std::thread::sleep(step.min(deadline - now));
    }
}

/// Manages the periodic live-update timer.
pub struct LiveUpdateTicker {
    progress_rx: Option<mpsc::Receiver<Tick>>,
    cancel_flag: Option<Arc<AtomicBool>>,
    interval: Duration,
}

impl LiveUpdateTicker {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
            interval: Duration::ZERO,
        }
    }

    /// Start ticking every `interval`. A running ticker is stopped first.
    pub fn start(&mut self, interval: Duration) {
        self.stop();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));
        self.interval = interval;

        std::thread::spawn(move || {
            run_ticker(interval, tx, cancel);
        });

        tracing::info!(interval_ms = interval.as_millis() as u64, "Live-update ticker started");
    }

    /// Stop the background thread. Ticks not yet polled are discarded.
    pub fn stop(&mut self) {
        if let Some(flag) = self.cancel_flag.take() {
            flag.store(true, Ordering::SeqCst);
            tracing::debug!("Live-update ticker stopped");
        }
        self.progress_rx = None;
    }

    pub fn is_active(&self) -> bool {
        self.cancel_flag.is_some()
    }

    /// Period of the running ticker (zero when never started).
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Drain all pending ticks without blocking.
    pub fn poll(&self) -> Vec<Tick> {
        let mut ticks = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(tick) = rx.try_recv() {
                ticks.push(tick);
            }
        }
        ticks
    }
}

impl Default for LiveUpdateTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LiveUpdateTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_ticker(interval: Duration, tx: mpsc::Sender<Tick>, cancel: Arc<AtomicBool>) {
    let mut sequence = 0u64;
    while sleep_unless_cancelled(interval, &cancel) {
        sequence += 1;
        if tx.send(Tick { sequence }).is_err() {
            // Receiver dropped (owner gone); exit quietly.
            break;
        }
    }
    tracing::debug!(ticks = sequence, "Live-update ticker thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_ticks(ticker: &LiveUpdateTicker, want: usize) -> Vec<Tick> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut ticks = Vec::new();
        while ticks.len() < want && Instant::now() < deadline {
            ticks.extend(ticker.poll());
            std::thread::sleep(Duration::from_millis(5));
        }
        ticks
    }

    #[test]
    fn test_ticker_delivers_sequenced_ticks() {
        let mut ticker = LiveUpdateTicker::new();
        ticker.start(Duration::from_millis(10));
        assert!(ticker.is_active());
        let ticks = wait_for_ticks(&ticker, 3);
        assert!(ticks.len() >= 3, "got {ticks:?}");
        assert_eq!(ticks[0].sequence, 1);
        assert_eq!(ticks[1].sequence, 2);
        ticker.stop();
        assert!(!ticker.is_active());
        assert!(ticker.poll().is_empty());
    }

    #[test]
    fn test_sleep_returns_false_when_cancelled() {
        let cancel = AtomicBool::new(true);
        let started = Instant::now();
        assert!(!sleep_unless_cancelled(Duration::from_secs(10), &cancel));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_sleep_completes_when_not_cancelled() {
        let cancel = AtomicBool::new(false);
        assert!(sleep_unless_cancelled(Duration::from_millis(20), &cancel));
    }
}
