//! Progress tracking for the divisor loop.

/// Progress update emitted by the coordinator once per divisor iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Rank of the reporting worker.
    pub rank: usize,
    /// Divisor processed by this iteration (0 for the completion update).
    pub divisor: u64,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Iterations completed so far.
    pub current_step: u64,
    /// Total number of iterations.
    pub total_steps: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create an update after `current` of `total` iterations.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(rank: usize, divisor: u64, current: u64, total: u64) -> Self {
        let progress = if total == 0 {
            1.0
        } else {
            current as f64 / total as f64
        };
        Self {
            rank,
            divisor,
            progress,
            current_step: current,
            total_steps: total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(rank: usize, total: u64) -> Self {
        Self {
            rank,
            divisor: 0,
            progress: 1.0,
            current_step: total,
            total_steps: total,
            done: true,
        }
    }
}

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}
