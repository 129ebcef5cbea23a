//! Error type shared by every sieve crate.

/// Error type for the distributed sieve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SieveError {
    /// The upper bound is outside the supported interval.
    #[error("N should be between 2 and 10000000 (got {n})")]
    OutOfRange {
        /// The rejected bound.
        n: u64,
    },

    /// Configuration error (worker count, topology).
    #[error("configuration error: {0}")]
    Config(String),

    /// A rank outside the world was addressed.
    #[error("rank {rank} is outside a world of {size} workers")]
    InvalidRank {
        /// The offending rank.
        rank: usize,
        /// Number of workers in the world.
        size: usize,
    },

    /// A peer left the world before the exchange completed.
    #[error("worker {peer} disconnected")]
    Disconnected {
        /// Rank of the vanished peer.
        peer: usize,
    },

    /// A malformed or unexpected message was received.
    #[error("transfer error: {0}")]
    Transfer(String),

    /// A worker thread panicked.
    #[error("worker {rank} panicked")]
    WorkerPanicked {
        /// Rank of the panicked worker.
        rank: usize,
    },
}

impl SieveError {
    /// Whether the error came from the message-passing layer.
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        matches!(
            self,
            Self::Disconnected { .. } | Self::Transfer(_) | Self::WorkerPanicked { .. }
        )
    }
}
