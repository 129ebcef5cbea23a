//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::progress::{ProgressObserver, ProgressUpdate};

/// Observer that logs progress updates, throttled to one line per
/// [`PROGRESS_REPORT_THRESHOLD`] of progress.
pub struct LoggingObserver {
    last_reported: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_reported: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Whether `update` moves progress far enough to be logged.
    fn should_report(&self, update: &ProgressUpdate) -> bool {
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        update.done || (update.progress - last) >= PROGRESS_REPORT_THRESHOLD
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if !self.should_report(update) {
            return;
        }
        if update.done {
            info!(
                rank = update.rank,
                iterations = update.total_steps,
                "Divisor loop complete"
            );
        } else {
            info!(
                rank = update.rank,
                divisor = update.divisor,
                progress = format!("{:.1}%", update.progress * 100.0),
                step = update.current_step,
                total = update.total_steps,
                "Sieve progress"
            );
        }
        self.last_reported
            .store(update.progress.to_bits(), Ordering::Relaxed);
    }
}

/// Null object: discards progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
