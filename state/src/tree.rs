//! The root of the mirrored device state and address resolution.

use std::collections::BTreeMap;

use command::{
    Address, AuxiliaryId, ColorGeneratorId, DownstreamKeyerId, KeyerId, MediaPlayerId,
    MixEffectId, SuperSourceBoxId, SuperSourceId, Topology,
};
use compare::compare_record;
use mapping::{AudioSource, FlyKeyFrame, VideoSource};

use crate::audio::{AudioChannel, AudioState};
use crate::downstream::DownstreamKeyerState;
use crate::error::{NodeKind, StateError, StateResult};
use crate::info::{InfoState, InputState, SettingsState};
use crate::keyer::{FlyKeyFrameState, KeyerState};
use crate::media::{ClipSlot, MediaPlayerState, MediaState, StillSlot};
use crate::mix_effect::{DveTransitionSettings, MixEffectState, StingerSettings};
use crate::routing::{AuxiliaryState, ColorGeneratorState};
use crate::super_source::{SuperSourceBoxState, SuperSourceState};
use crate::tally::TallyState;

/// Everything the client knows about one device.
///
/// Indexed collections take their length from the announced topology and
/// keep it until the topology changes. Keyed maps grow as the device reports
/// entries.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixerState {
    pub info: InfoState,
    pub settings: SettingsState,
    pub mix_effects: Vec<MixEffectState>,
    pub downstream_keyers: Vec<DownstreamKeyerState>,
    pub auxiliaries: Vec<AuxiliaryState>,
    pub color_generators: Vec<ColorGeneratorState>,
    pub super_sources: Vec<SuperSourceState>,
    pub media: MediaState,
    pub audio: AudioState,
    /// Derived from the rest of the tree; see [`crate::tally`].
    pub tally: BTreeMap<VideoSource, TallyState>,
}

compare_record!(MixerState {
    info: record,
    settings: record,
    mix_effects: sequence,
    downstream_keyers: sequence,
    auxiliaries: sequence,
    color_generators: sequence,
    super_sources: sequence,
    media: record,
    audio: record,
    tally: map,
});

fn slot<T>(items: &[T], kind: NodeKind, index: usize) -> StateResult<&T> {
    items.get(index).ok_or(StateError::IndexOutOfRange {
        kind,
        index,
        count: items.len(),
    })
}

fn slot_mut<T>(items: &mut [T], kind: NodeKind, index: usize) -> StateResult<&mut T> {
    let count = items.len();
    items
        .get_mut(index)
        .ok_or(StateError::IndexOutOfRange { kind, index, count })
}

const fn frame_index(frame: FlyKeyFrame) -> usize {
    match frame {
        FlyKeyFrame::A => 0,
        FlyKeyFrame::B => 1,
    }
}

impl MixerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the announced topology.
    pub fn topology(&self) -> StateResult<&Topology> {
        self.info.topology.as_ref().ok_or(StateError::TopologyUnknown)
    }

    #[must_use]
    pub const fn has_topology(&self) -> bool {
        self.info.topology.is_some()
    }

    /// Checks that `address` names a node that exists.
    ///
    /// Input and audio channel addresses must have been reported by the device.
    pub fn validate_address(&self, address: &Address) -> StateResult<()> {
        if *address == Address::Global {
            return Ok(());
        }
        self.topology()?;
        match *address {
            Address::Global => Ok(()),
            Address::MixEffect(me) => self.mix_effect(me).map(drop),
            Address::Keyer(me, key) | Address::KeyFrame(me, key, _) => {
                self.keyer(me, key).map(drop)
            }
            Address::DownstreamKeyer(id) => {
                slot(&self.downstream_keyers, NodeKind::DownstreamKeyer, id.index()).map(drop)
            }
            Address::Auxiliary(id) => {
                slot(&self.auxiliaries, NodeKind::Auxiliary, id.index()).map(drop)
            }
            Address::ColorGenerator(id) => {
                slot(&self.color_generators, NodeKind::ColorGenerator, id.index()).map(drop)
            }
            Address::SuperSource(id) => {
                slot(&self.super_sources, NodeKind::SuperSource, id.index()).map(drop)
            }
            Address::SuperSourceBox(id, index) => {
                let super_source = slot(&self.super_sources, NodeKind::SuperSource, id.index())?;
                slot(&super_source.boxes, NodeKind::SuperSourceBox, index.index()).map(drop)
            }
            Address::MediaPlayer(id) => {
                slot(&self.media.players, NodeKind::MediaPlayer, id.index()).map(drop)
            }
            Address::MediaPoolStill(slot_index) => {
                slot(&self.media.stills, NodeKind::MediaPoolStill, usize::from(slot_index)).map(drop)
            }
            Address::MediaPoolClip(slot_index) => {
                slot(&self.media.clips, NodeKind::MediaPoolClip, usize::from(slot_index)).map(drop)
            }
            Address::Input(source) => {
                if self.settings.inputs.contains_key(&source) {
                    Ok(())
                } else {
                    Err(unknown(NodeKind::Input, source))
                }
            }
            Address::AudioInput(source) => {
                if self.audio.inputs.contains_key(&source) {
                    Ok(())
                } else {
                    Err(unknown(NodeKind::AudioInput, source))
                }
            }
        }
    }

    pub fn mix_effect(&self, me: MixEffectId) -> StateResult<&MixEffectState> {
        slot(&self.mix_effects, NodeKind::MixEffect, me.index())
    }

    pub fn mix_effect_mut(&mut self, me: MixEffectId) -> StateResult<&mut MixEffectState> {
        slot_mut(&mut self.mix_effects, NodeKind::MixEffect, me.index())
    }

    pub fn keyer(&self, me: MixEffectId, key: KeyerId) -> StateResult<&KeyerState> {
        slot(&self.mix_effect(me)?.keyers, NodeKind::Keyer, key.index())
    }

    pub fn keyer_mut(&mut self, me: MixEffectId, key: KeyerId) -> StateResult<&mut KeyerState> {
        slot_mut(&mut self.mix_effect_mut(me)?.keyers, NodeKind::Keyer, key.index())
    }

    pub fn key_frame_mut(
        &mut self,
        me: MixEffectId,
        key: KeyerId,
        frame: FlyKeyFrame,
    ) -> StateResult<&mut FlyKeyFrameState> {
        let keyer = self.keyer_mut(me, key)?;
        slot_mut(&mut keyer.fly.key_frames, NodeKind::KeyFrame, frame_index(frame))
    }

    /// Fails if the block has no stinger transition.
    pub fn stinger_mut(&mut self, me: MixEffectId) -> StateResult<&mut StingerSettings> {
        let count = usize::from(self.topology()?.stingers);
        self.mix_effect_mut(me)?
            .transition
            .stinger
            .as_mut()
            .ok_or(StateError::IndexOutOfRange {
                kind: NodeKind::Stinger,
                index: me.index(),
                count,
            })
    }

    /// Fails if the block has no DVE transition.
    pub fn dve_transition_mut(
        &mut self,
        me: MixEffectId,
    ) -> StateResult<&mut DveTransitionSettings> {
        let count = usize::from(self.topology()?.dves);
        self.mix_effect_mut(me)?
            .transition
            .dve
            .as_mut()
            .ok_or(StateError::IndexOutOfRange {
                kind: NodeKind::Dve,
                index: me.index(),
                count,
            })
    }

    pub fn downstream_keyer_mut(
        &mut self,
        id: DownstreamKeyerId,
    ) -> StateResult<&mut DownstreamKeyerState> {
        slot_mut(&mut self.downstream_keyers, NodeKind::DownstreamKeyer, id.index())
    }

    pub fn auxiliary_mut(&mut self, id: AuxiliaryId) -> StateResult<&mut AuxiliaryState> {
        slot_mut(&mut self.auxiliaries, NodeKind::Auxiliary, id.index())
    }

    pub fn color_generator_mut(
        &mut self,
        id: ColorGeneratorId,
    ) -> StateResult<&mut ColorGeneratorState> {
        slot_mut(&mut self.color_generators, NodeKind::ColorGenerator, id.index())
    }

    pub fn super_source_mut(&mut self, id: SuperSourceId) -> StateResult<&mut SuperSourceState> {
        slot_mut(&mut self.super_sources, NodeKind::SuperSource, id.index())
    }

    pub fn super_source_box_mut(
        &mut self,
        id: SuperSourceId,
        index: SuperSourceBoxId,
    ) -> StateResult<&mut SuperSourceBoxState> {
        let super_source = self.super_source_mut(id)?;
        slot_mut(&mut super_source.boxes, NodeKind::SuperSourceBox, index.index())
    }

    pub fn media_player_mut(&mut self, id: MediaPlayerId) -> StateResult<&mut MediaPlayerState> {
        slot_mut(&mut self.media.players, NodeKind::MediaPlayer, id.index())
    }

    pub fn still_mut(&mut self, index: u16) -> StateResult<&mut StillSlot> {
        slot_mut(&mut self.media.stills, NodeKind::MediaPoolStill, usize::from(index))
    }

    pub fn clip_mut(&mut self, index: u8) -> StateResult<&mut ClipSlot> {
        slot_mut(&mut self.media.clips, NodeKind::MediaPoolClip, usize::from(index))
    }

    /// Returns a reported input.
    pub fn input_mut(&mut self, source: VideoSource) -> StateResult<&mut InputState> {
        self.settings
            .inputs
            .get_mut(&source)
            .ok_or_else(|| unknown(NodeKind::Input, source))
    }

    /// Returns a reported audio channel.
    pub fn audio_input_mut(&mut self, source: AudioSource) -> StateResult<&mut AudioChannel> {
        self.audio
            .inputs
            .get_mut(&source)
            .ok_or_else(|| unknown(NodeKind::AudioInput, source))
    }
}

fn unknown(kind: NodeKind, key: impl ToString) -> StateError {
    StateError::UnknownEntry {
        kind,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped() -> MixerState {
        let mut state = MixerState::new();
        let topology = Topology {
            mix_effect_keyers: vec![2],
            downstream_keyers: 1,
            stingers: 1,
            super_sources: 1,
            super_source_boxes: 4,
            ..Topology::default()
        };
        crate::topology::apply_topology(&mut state, &topology, &crate::StateLimits::default())
            .unwrap();
        state
    }

    #[test]
    fn addresses_need_topology() {
        let state = MixerState::new();
        assert_eq!(state.validate_address(&Address::Global), Ok(()));
        assert_eq!(
            state.validate_address(&Address::MixEffect(MixEffectId::new(0))),
            Err(StateError::TopologyUnknown)
        );
    }

    #[test]
    fn keyer_past_count_is_out_of_range() {
        let state = shaped();
        assert!(state
            .validate_address(&Address::Keyer(MixEffectId::new(0), KeyerId::new(1)))
            .is_ok());
        assert_eq!(
            state.validate_address(&Address::Keyer(MixEffectId::new(0), KeyerId::new(2))),
            Err(StateError::IndexOutOfRange {
                kind: NodeKind::Keyer,
                index: 2,
                count: 2,
            })
        );
    }

    #[test]
    fn missing_dve_transition_is_reported() {
        let mut state = shaped();
        assert!(state.stinger_mut(MixEffectId::new(0)).is_ok());
        assert_eq!(
            state.dve_transition_mut(MixEffectId::new(0)).unwrap_err(),
            StateError::IndexOutOfRange {
                kind: NodeKind::Dve,
                index: 0,
                count: 0,
            }
        );
    }

    #[test]
    fn unreported_input_is_unknown() {
        let state = shaped();
        assert_eq!(
            state.validate_address(&Address::Input(VideoSource::Input4)),
            Err(StateError::UnknownEntry {
                kind: NodeKind::Input,
                key: "Input4".into(),
            })
        );
    }

    #[test]
    fn box_addresses_resolve() {
        let mut state = shaped();
        let id = SuperSourceId::new(0);
        assert!(state.super_source_box_mut(id, SuperSourceBoxId::new(3)).is_ok());
        assert!(state.super_source_box_mut(id, SuperSourceBoxId::new(4)).is_err());
    }
}
