//! Shaping the tree from an announced topology.

use command::Topology;
use tracing::{debug, info};

use crate::downstream::DownstreamKeyerState;
use crate::error::StateResult;
use crate::limits::StateLimits;
use crate::media::{ClipSlot, MediaPlayerState, StillSlot};
use crate::mix_effect::MixEffectState;
use crate::routing::{AuxiliaryState, ColorGeneratorState};
use crate::super_source::{SuperSourceBoxState, SuperSourceState};
use crate::tree::MixerState;

/// Shapes every indexed collection to match `topology`.
///
/// Re-announcing the current topology leaves the tree untouched. A different
/// topology rebuilds every indexed node from defaults; keyed maps and device
/// identity are kept. Returns `true` if the tree was rebuilt.
pub fn apply_topology(
    state: &mut MixerState,
    topology: &Topology,
    limits: &StateLimits,
) -> StateResult<bool> {
    limits.check(topology)?;
    if state.info.topology.as_ref() == Some(topology) {
        debug!("topology re-announced unchanged");
        return Ok(false);
    }

    state.mix_effects = topology
        .mix_effect_keyers
        .iter()
        .enumerate()
        .map(|(index, &keyers)| {
            MixEffectState::with_shape(
                usize::from(keyers),
                index < usize::from(topology.stingers),
                index < usize::from(topology.dves),
            )
        })
        .collect();
    state.downstream_keyers =
        vec![DownstreamKeyerState::default(); usize::from(topology.downstream_keyers)];
    state.auxiliaries = vec![AuxiliaryState::default(); usize::from(topology.auxiliaries)];
    state.color_generators =
        vec![ColorGeneratorState::default(); usize::from(topology.color_generators)];
    let super_source = SuperSourceState {
        boxes: vec![SuperSourceBoxState::default(); usize::from(topology.super_source_boxes)],
        ..SuperSourceState::default()
    };
    state.super_sources = vec![super_source; usize::from(topology.super_sources)];
    state.media.players = vec![MediaPlayerState::default(); usize::from(topology.media_players)];
    state.media.stills = vec![StillSlot::default(); usize::from(topology.media_pool_stills)];
    state.media.clips = vec![ClipSlot::default(); usize::from(topology.media_pool_clips)];
    state.info.topology = Some(topology.clone());

    info!(
        mix_effects = topology.mix_effects(),
        downstream_keyers = topology.downstream_keyers,
        auxiliaries = topology.auxiliaries,
        super_sources = topology.super_sources,
        media_players = topology.media_players,
        "state tree shaped from topology"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LimitKind, StateError};

    fn topology() -> Topology {
        Topology {
            mix_effect_keyers: vec![4, 1],
            downstream_keyers: 2,
            auxiliaries: 3,
            color_generators: 2,
            stingers: 1,
            dves: 2,
            super_sources: 1,
            super_source_boxes: 4,
            media_players: 2,
            media_pool_stills: 20,
            media_pool_clips: 2,
        }
    }

    #[test]
    fn shapes_every_collection() {
        let mut state = MixerState::new();
        assert!(apply_topology(&mut state, &topology(), &StateLimits::default()).unwrap());
        assert_eq!(state.mix_effects.len(), 2);
        assert_eq!(state.mix_effects[0].keyers.len(), 4);
        assert_eq!(state.mix_effects[1].keyers.len(), 1);
        assert!(state.mix_effects[0].transition.stinger.is_some());
        assert!(state.mix_effects[1].transition.stinger.is_none());
        assert!(state.mix_effects[1].transition.dve.is_some());
        assert_eq!(state.downstream_keyers.len(), 2);
        assert_eq!(state.auxiliaries.len(), 3);
        assert_eq!(state.super_sources[0].boxes.len(), 4);
        assert_eq!(state.media.stills.len(), 20);
        assert_eq!(state.media.clips.len(), 2);
    }

    #[test]
    fn reannounce_keeps_values() {
        let mut state = MixerState::new();
        apply_topology(&mut state, &topology(), &StateLimits::default()).unwrap();
        state.mix_effects[0].keyers[2].on_air = true;
        assert!(!apply_topology(&mut state, &topology(), &StateLimits::default()).unwrap());
        assert!(state.mix_effects[0].keyers[2].on_air);
    }

    #[test]
    fn changed_topology_rebuilds() {
        let mut state = MixerState::new();
        apply_topology(&mut state, &topology(), &StateLimits::default()).unwrap();
        state.mix_effects[0].keyers[0].on_air = true;
        let smaller = Topology {
            mix_effect_keyers: vec![1],
            ..topology()
        };
        assert!(apply_topology(&mut state, &smaller, &StateLimits::default()).unwrap());
        assert_eq!(state.mix_effects.len(), 1);
        assert!(!state.mix_effects[0].keyers[0].on_air);
    }

    #[test]
    fn limits_reject_before_mutation() {
        let mut state = MixerState::new();
        let large = Topology {
            media_pool_stills: 40,
            ..topology()
        };
        let err = apply_topology(&mut state, &large, &StateLimits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            StateError::LimitsExceeded {
                kind: LimitKind::MediaPoolStills,
                limit: 32,
                actual: 40,
            }
        );
        assert!(!state.has_topology());
    }
}
