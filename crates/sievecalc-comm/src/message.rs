//! Messages exchanged between workers.

use std::fmt;

/// A single message on the wire.
///
/// Termination has no variant of its own: a worker that leaves the world
/// drops its endpoint, and peers observe the disconnect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Coordinator's primality verdict for one divisor.
    Verdict {
        /// The divisor the verdict applies to.
        divisor: u64,
        /// Whether the divisor is prime.
        is_prime: bool,
    },
    /// Number of primes in the payload that follows.
    PrimeCount(usize),
    /// A worker's ascending prime list.
    PrimePayload(Vec<u64>),
}

impl Message {
    /// Short name of the message kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Verdict { .. } => "verdict",
            Self::PrimeCount(_) => "prime-count",
            Self::PrimePayload(_) => "prime-payload",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verdict { divisor, is_prime } => {
                write!(f, "verdict({divisor} prime={is_prime})")
            }
            Self::PrimeCount(count) => write!(f, "prime-count({count})"),
            Self::PrimePayload(values) => write!(f, "prime-payload({} values)", values.len()),
        }
    }
}
