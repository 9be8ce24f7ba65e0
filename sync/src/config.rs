//! Engine configuration.

use state::StateLimits;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Caps on what a topology may announce.
    pub limits: StateLimits,
    /// Recompute tally after reports that can change it.
    pub track_tally: bool,
    /// Reports that arrive before the topology are errors. When `false`
    /// they are dropped with a warning.
    pub strict_topology: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limits: StateLimits::default(),
            track_tally: true,
            strict_topology: true,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration suitable for testing with smaller limits.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            limits: StateLimits::for_testing(),
            track_tally: true,
            strict_topology: true,
        }
    }

    /// Creates a configuration with no topology limits (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            limits: StateLimits::unlimited(),
            track_tally: true,
            strict_topology: true,
        }
    }
}
