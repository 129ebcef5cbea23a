//! Sieve options and the divisor strategy.

use std::fmt;
use std::str::FromStr;

use crate::error::SieveError;

/// How workers learn which divisors are prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisorMode {
    /// The coordinator tests each divisor and broadcasts the verdict; every
    /// iteration is a synchronization point.
    #[default]
    Broadcast,
    /// Every worker tests the divisors itself; no messages are exchanged
    /// until aggregation.
    Redundant,
}

impl DivisorMode {
    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Broadcast => "broadcast",
            Self::Redundant => "redundant",
        }
    }
}

impl fmt::Display for DivisorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DivisorMode {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broadcast" | "bcast" => Ok(Self::Broadcast),
            "redundant" | "local" => Ok(Self::Redundant),
            other => Err(SieveError::Config(format!(
                "unknown divisor mode: {other} (expected broadcast or redundant)"
            ))),
        }
    }
}

/// Options for a sieve run.
#[derive(Debug, Clone, Default)]
pub struct SieveOptions {
    /// Divisor strategy.
    pub divisor_mode: DivisorMode,
}
