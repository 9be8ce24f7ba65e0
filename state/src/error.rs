//! State tree errors.

use thiserror::Error;

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;

/// Indexed or keyed part of the tree an address can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    MixEffect,
    Keyer,
    KeyFrame,
    DownstreamKeyer,
    Auxiliary,
    ColorGenerator,
    SuperSource,
    SuperSourceBox,
    MediaPlayer,
    MediaPoolStill,
    MediaPoolClip,
    Stinger,
    Dve,
    Input,
    AudioInput,
}

/// Topology count a [`StateLimits`](crate::StateLimits) entry caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LimitKind {
    MixEffects,
    KeyersPerMixEffect,
    DownstreamKeyers,
    Auxiliaries,
    ColorGenerators,
    SuperSources,
    SuperSourceBoxes,
    MediaPlayers,
    MediaPoolStills,
    MediaPoolClips,
}

/// Errors raised while mutating or querying the state tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A command arrived before the device announced its topology.
    #[error("topology not yet known")]
    TopologyUnknown,

    /// Address points past the instances the topology announced.
    #[error("{kind} index {index} out of range (count {count})")]
    IndexOutOfRange {
        kind: NodeKind,
        index: usize,
        count: usize,
    },

    /// Address names a keyed entry the device has not reported.
    #[error("{kind} {key} not present")]
    UnknownEntry { kind: NodeKind, key: String },

    /// Topology announces more instances than the configured limits allow.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}
