//! Mirrored state tree of a broadcast switcher.
//!
//! The tree is shaped by the device's topology and then mutated in two ways:
//! [`apply`] folds in the device's own reports, and [`predict`] computes what
//! a request should produce. Both consult the same coupling tables, so a
//! prediction and the device's answer can be checked against each other with
//! [`compare`].
//!
//! # Design Principles
//!
//! - **Shape before values** - nothing but identity is accepted until the
//!   topology is known.
//! - **Reports are snapshots** - applying a report twice equals applying it once.
//! - **Couplings are data** - shared fields are listed once in [`coupling`].
//! - **Tally is derived** - it is recomputed from the tree, never stored by hand.

mod apply;
mod audio;
pub mod coupling;
mod downstream;
mod error;
mod info;
mod keyer;
mod limits;
mod media;
mod mix_effect;
mod predict;
mod routing;
mod super_source;
pub mod tally;
mod topology;
mod tree;

pub use apply::apply;
pub use audio::{AudioChannel, AudioMasterState, AudioMonitorState, AudioState};
pub use downstream::DownstreamKeyerState;
pub use error::{LimitKind, NodeKind, StateError, StateResult};
pub use info::{InfoState, InputState, ProtocolVersion, SettingsState};
pub use keyer::{
    ChromaSettings, DveKeySettings, FlyKeyFrameState, FlyState, KeyerProperties, KeyerState,
    LumaSettings, MaskState, PatternSettings,
};
pub use limits::StateLimits;
pub use media::{ClipSlot, MediaPlayerState, MediaState, StillSlot};
pub use mix_effect::{
    DipSettings, DveTransitionSettings, FadeToBlack, MixEffectState, MixSettings,
    StingerSettings, TransitionPositionState, TransitionState, WipeSettings,
};
pub use predict::predict;
pub use routing::{AuxiliaryState, ColorGeneratorState};
pub use super_source::{SuperSourceBoxState, SuperSourceState};
pub use tally::TallyState;
pub use topology::apply_topology;
pub use tree::MixerState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = MixerState::new();
        let _ = StateLimits::default();
        let _: StateResult<()> = Ok(());
        let _ = TallyState::default();
    }
}
