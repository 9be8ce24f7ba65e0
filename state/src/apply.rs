//! Applying device reports to the tree.

use command::GetCommand;
use tracing::trace;

use crate::audio::{AudioChannel, AudioMasterState, AudioMonitorState};
use crate::coupling::{self, TransitionField};
use crate::error::StateResult;
use crate::info::{InputState, ProtocolVersion};
use crate::keyer::{
    ChromaSettings, DveKeySettings, FlyKeyFrameState, LumaSettings, MaskState, PatternSettings,
};
use crate::limits::StateLimits;
use crate::media::{ClipSlot, StillSlot};
use crate::mix_effect::{
    DipSettings, DveTransitionSettings, StingerSettings, TransitionPositionState, WipeSettings,
};
use crate::routing::ColorGeneratorState;
use crate::topology::apply_topology;
use crate::tree::MixerState;

const DVE_MIRRORED: &[TransitionField] = &[
    TransitionField::DveReverse,
    TransitionField::DveFlipFlop,
    TransitionField::DveClip,
    TransitionField::DveGain,
    TransitionField::DveInvertKey,
];

const WIPE_MIRRORED: &[TransitionField] = &[TransitionField::WipeReverse, TransitionField::WipeFlipFlop];

/// Applies one device report.
///
/// Each report overwrites the node it addresses, so applying the same report
/// twice leaves the tree as applying it once. Shared transition fields are
/// mirrored into their partners. Identity and topology reports are accepted
/// at any time; every other report needs the topology first.
pub fn apply(state: &mut MixerState, command: &GetCommand, limits: &StateLimits) -> StateResult<()> {
    trace!(command = %command.name(), address = %command.address(), "apply");
    match command {
        GetCommand::Version(version) => {
            state.info.version = ProtocolVersion {
                major: version.major,
                minor: version.minor,
            };
            return Ok(());
        }
        GetCommand::ProductName(product) => {
            state.info.product_name.clone_from(&product.name);
            return Ok(());
        }
        GetCommand::Topology(topology) => {
            apply_topology(state, topology, limits)?;
            return Ok(());
        }
        _ => {}
    }
    state.topology()?;

    match command {
        GetCommand::Version(_) | GetCommand::ProductName(_) | GetCommand::Topology(_) => {}

        GetCommand::CurrentVideoMode(mode) => state.settings.video_mode = mode.mode,
        GetCommand::InputProperties(input) => {
            state.settings.inputs.insert(
                input.input,
                InputState {
                    long_name: input.long_name.clone(),
                    short_name: input.short_name.clone(),
                    are_names_default: input.are_names_default,
                    available_external_ports: input.available_external_ports.clone(),
                    external_port: input.external_port,
                    internal_port: input.internal_port,
                    source_availability: input.source_availability.clone(),
                    me_availability: input.me_availability.clone(),
                },
            );
        }

        GetCommand::ProgramInput(input) => {
            state.mix_effect_mut(input.mix_effect)?.program_input = input.source;
        }
        GetCommand::PreviewInput(input) => {
            state.mix_effect_mut(input.mix_effect)?.preview_input = input.source;
        }
        GetCommand::TransitionProperties(properties) => {
            let transition = &mut state.mix_effect_mut(properties.mix_effect)?.transition;
            transition.style = properties.style;
            transition.selection.clone_from(&properties.selection);
            transition.next_style = properties.next_style;
            transition.next_selection.clone_from(&properties.next_selection);
        }
        GetCommand::PreviewTransition(preview) => {
            state.mix_effect_mut(preview.mix_effect)?.transition.preview_enabled = preview.enabled;
        }
        GetCommand::TransitionPosition(position) => {
            state.mix_effect_mut(position.mix_effect)?.transition.position = TransitionPositionState {
                in_transition: position.in_transition,
                remaining_frames: position.remaining_frames,
                handle_position: position.handle_position,
            };
        }
        GetCommand::MixTransition(mix) => {
            state.mix_effect_mut(mix.mix_effect)?.transition.mix.rate = mix.rate;
        }
        GetCommand::DipTransition(dip) => {
            state.mix_effect_mut(dip.mix_effect)?.transition.dip = DipSettings {
                rate: dip.rate,
                input: dip.input,
            };
        }
        GetCommand::WipeTransition(wipe) => {
            let transition = &mut state.mix_effect_mut(wipe.mix_effect)?.transition;
            transition.wipe = WipeSettings {
                rate: wipe.rate,
                pattern: wipe.pattern,
                border_width: wipe.border_width,
                border_input: wipe.border_input,
                symmetry: wipe.symmetry,
                border_softness: wipe.border_softness,
                x_position: wipe.x_position,
                y_position: wipe.y_position,
                reverse_direction: wipe.reverse_direction,
                flip_flop: wipe.flip_flop,
            };
            coupling::propagate(transition, WIPE_MIRRORED);
        }
        GetCommand::StingerTransition(stinger) => {
            *state.stinger_mut(stinger.mix_effect)? = StingerSettings {
                source: stinger.source,
                pre_multiplied: stinger.pre_multiplied,
                clip: stinger.clip,
                gain: stinger.gain,
                invert: stinger.invert,
                preroll: stinger.preroll,
                clip_duration: stinger.clip_duration,
                trigger_point: stinger.trigger_point,
                mix_rate: stinger.mix_rate,
            };
        }
        GetCommand::DveTransition(dve) => {
            *state.dve_transition_mut(dve.mix_effect)? = DveTransitionSettings {
                rate: dve.rate,
                logo_rate: dve.logo_rate,
                style: dve.style,
                fill_source: dve.fill_source,
                key_source: dve.key_source,
                enable_key: dve.enable_key,
                pre_multiplied: dve.pre_multiplied,
                clip: dve.clip,
                gain: dve.gain,
                invert_key: dve.invert_key,
                reverse: dve.reverse,
                flip_flop: dve.flip_flop,
            };
            let transition = &mut state.mix_effect_mut(dve.mix_effect)?.transition;
            coupling::propagate(transition, DVE_MIRRORED);
        }
        GetCommand::FadeToBlackRate(rate) => {
            state.mix_effect_mut(rate.mix_effect)?.fade_to_black.rate = rate.rate;
        }
        GetCommand::FadeToBlackState(fade) => {
            let target = &mut state.mix_effect_mut(fade.mix_effect)?.fade_to_black;
            target.fully_black = fade.fully_black;
            target.in_transition = fade.in_transition;
            target.remaining_frames = fade.remaining_frames;
        }

        GetCommand::KeyerOnAir(on_air) => {
            state.keyer_mut(on_air.mix_effect, on_air.keyer)?.on_air = on_air.on_air;
        }
        GetCommand::KeyerBase(base) => {
            let properties = &mut state.keyer_mut(base.mix_effect, base.keyer)?.properties;
            properties.key_type = base.key_type;
            properties.can_fly_key = base.can_fly_key;
            properties.fly_enabled = base.fly_enabled;
            properties.fill_source = base.fill_source;
            properties.cut_source = base.cut_source;
            properties.mask = MaskState {
                enabled: base.mask_enabled,
                top: base.mask_top,
                bottom: base.mask_bottom,
                left: base.mask_left,
                right: base.mask_right,
            };
        }
        GetCommand::LumaKey(luma) => {
            state.keyer_mut(luma.mix_effect, luma.keyer)?.luma = LumaSettings {
                pre_multiplied: luma.pre_multiplied,
                clip: luma.clip,
                gain: luma.gain,
                invert: luma.invert,
            };
        }
        GetCommand::ChromaKey(chroma) => {
            state.keyer_mut(chroma.mix_effect, chroma.keyer)?.chroma = ChromaSettings {
                hue: chroma.hue,
                gain: chroma.gain,
                y_suppress: chroma.y_suppress,
                lift: chroma.lift,
                narrow: chroma.narrow,
            };
        }
        GetCommand::PatternKey(pattern) => {
            state.keyer_mut(pattern.mix_effect, pattern.keyer)?.pattern = PatternSettings {
                pattern: pattern.pattern,
                size: pattern.size,
                symmetry: pattern.symmetry,
                softness: pattern.softness,
                x_position: pattern.x_position,
                y_position: pattern.y_position,
                invert: pattern.invert,
            };
        }
        GetCommand::DveKey(dve) => {
            state.keyer_mut(dve.mix_effect, dve.keyer)?.dve = DveKeySettings {
                size_x: dve.size_x,
                size_y: dve.size_y,
                position_x: dve.position_x,
                position_y: dve.position_y,
                rotation: dve.rotation,
                border_enabled: dve.border_enabled,
                shadow_enabled: dve.shadow_enabled,
                border_bevel: dve.border_bevel,
                border_outer_width: dve.border_outer_width,
                border_inner_width: dve.border_inner_width,
                border_outer_softness: dve.border_outer_softness,
                border_inner_softness: dve.border_inner_softness,
                border_bevel_softness: dve.border_bevel_softness,
                border_bevel_position: dve.border_bevel_position,
                border_opacity: dve.border_opacity,
                border_hue: dve.border_hue,
                border_saturation: dve.border_saturation,
                border_luma: dve.border_luma,
                light_direction: dve.light_direction,
                light_altitude: dve.light_altitude,
                mask: MaskState {
                    enabled: dve.mask_enabled,
                    top: dve.mask_top,
                    bottom: dve.mask_bottom,
                    left: dve.mask_left,
                    right: dve.mask_right,
                },
                rate: dve.rate,
            };
        }
        GetCommand::FlyKeyState(fly) => {
            let target = &mut state.keyer_mut(fly.mix_effect, fly.keyer)?.fly;
            target.a_set = fly.a_set;
            target.b_set = fly.b_set;
            target.at_key_frame.clone_from(&fly.at_key_frame);
            target.run_to_infinite_index = fly.run_to_infinite_index;
        }
        GetCommand::FlyKeyFrameProperties(frame) => {
            *state.key_frame_mut(frame.mix_effect, frame.keyer, frame.frame)? = FlyKeyFrameState {
                size_x: frame.size_x,
                size_y: frame.size_y,
                position_x: frame.position_x,
                position_y: frame.position_y,
                rotation: frame.rotation,
                border_outer_width: frame.border_outer_width,
                border_inner_width: frame.border_inner_width,
                border_outer_softness: frame.border_outer_softness,
                border_inner_softness: frame.border_inner_softness,
                border_bevel_softness: frame.border_bevel_softness,
                border_bevel_position: frame.border_bevel_position,
                border_opacity: frame.border_opacity,
                border_hue: frame.border_hue,
                border_saturation: frame.border_saturation,
                border_luma: frame.border_luma,
                light_direction: frame.light_direction,
                light_altitude: frame.light_altitude,
                mask_top: frame.mask_top,
                mask_bottom: frame.mask_bottom,
                mask_left: frame.mask_left,
                mask_right: frame.mask_right,
            };
        }

        GetCommand::DownstreamKeyerSources(sources) => {
            let keyer = state.downstream_keyer_mut(sources.keyer)?;
            keyer.fill_source = sources.fill_source;
            keyer.cut_source = sources.cut_source;
        }
        GetCommand::DownstreamKeyerProperties(properties) => {
            let keyer = state.downstream_keyer_mut(properties.keyer)?;
            keyer.tie = properties.tie;
            keyer.rate = properties.rate;
            keyer.pre_multiplied = properties.pre_multiplied;
            keyer.clip = properties.clip;
            keyer.gain = properties.gain;
            keyer.invert = properties.invert;
            keyer.mask = MaskState {
                enabled: properties.mask_enabled,
                top: properties.mask_top,
                bottom: properties.mask_bottom,
                left: properties.mask_left,
                right: properties.mask_right,
            };
        }
        GetCommand::DownstreamKeyerState(status) => {
            let keyer = state.downstream_keyer_mut(status.keyer)?;
            keyer.on_air = status.on_air;
            keyer.in_transition = status.in_transition;
            keyer.is_auto_transitioning = status.is_auto_transitioning;
            keyer.remaining_frames = status.remaining_frames;
        }

        GetCommand::AuxiliarySource(aux) => {
            state.auxiliary_mut(aux.auxiliary)?.source = aux.source;
        }
        GetCommand::ColorGenerator(color) => {
            *state.color_generator_mut(color.generator)? = ColorGeneratorState {
                hue: color.hue,
                saturation: color.saturation,
                luma: color.luma,
            };
        }

        GetCommand::SuperSourceProperties(properties) => {
            let target = state.super_source_mut(properties.super_source)?;
            target.art_fill_source = properties.art_fill_source;
            target.art_cut_source = properties.art_cut_source;
            target.art_option = properties.art_option;
            target.art_pre_multiplied = properties.art_pre_multiplied;
            target.art_clip = properties.art_clip;
            target.art_gain = properties.art_gain;
            target.art_invert = properties.art_invert;
            target.border_enabled = properties.border_enabled;
            target.border_bevel = properties.border_bevel;
            target.border_outer_width = properties.border_outer_width;
            target.border_inner_width = properties.border_inner_width;
            target.border_outer_softness = properties.border_outer_softness;
            target.border_inner_softness = properties.border_inner_softness;
            target.border_bevel_softness = properties.border_bevel_softness;
            target.border_bevel_position = properties.border_bevel_position;
            target.border_hue = properties.border_hue;
            target.border_saturation = properties.border_saturation;
            target.border_luma = properties.border_luma;
            target.light_direction = properties.light_direction;
            target.light_altitude = properties.light_altitude;
        }
        GetCommand::SuperSourceBox(source_box) => {
            let target = state.super_source_box_mut(source_box.super_source, source_box.index)?;
            target.enabled = source_box.enabled;
            target.source = source_box.source;
            target.position_x = source_box.position_x;
            target.position_y = source_box.position_y;
            target.size = source_box.size;
            target.cropped = source_box.cropped;
            target.crop_top = source_box.crop_top;
            target.crop_bottom = source_box.crop_bottom;
            target.crop_left = source_box.crop_left;
            target.crop_right = source_box.crop_right;
        }

        GetCommand::AudioInput(input) => {
            state.audio.inputs.insert(
                input.source,
                AudioChannel {
                    source_type: input.source_type,
                    port_type: input.port_type,
                    mix_option: input.mix_option,
                    gain: input.gain,
                    balance: input.balance,
                },
            );
        }
        GetCommand::AudioMaster(master) => {
            state.audio.master = AudioMasterState {
                gain: master.gain,
                balance: master.balance,
                follow_fade_to_black: master.follow_fade_to_black,
            };
        }
        GetCommand::AudioMonitor(monitor) => {
            state.audio.monitor = AudioMonitorState {
                enabled: monitor.enabled,
                gain: monitor.gain,
                mute: monitor.mute,
                solo: monitor.solo,
                solo_source: monitor.solo_source,
                dim: monitor.dim,
            };
        }

        GetCommand::MediaPlayerSelection(selection) => {
            let player = state.media_player_mut(selection.player)?;
            player.source_type = selection.source_type;
            player.still_index = selection.still_index;
            player.clip_index = selection.clip_index;
        }
        GetCommand::MediaPlayerStatus(status) => {
            let player = state.media_player_mut(status.player)?;
            player.playing = status.playing;
            player.looping = status.looping;
            player.at_beginning = status.at_beginning;
            player.clip_frame = status.clip_frame;
        }
        GetCommand::MediaPoolStill(still) => {
            *state.still_mut(still.slot)? = StillSlot {
                is_used: still.is_used,
                hash: still.hash,
                file_name: still.file_name.clone(),
            };
        }
        GetCommand::MediaPoolClip(clip) => {
            *state.clip_mut(clip.slot)? = ClipSlot {
                is_used: clip.is_used,
                name: clip.name.clone(),
                frame_count: clip.frame_count,
            };
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use command::keyer::ChromaKey;
    use command::mix_effect::{DveTransition, WipeTransition};
    use command::{KeyerId, MixEffectId, Topology};
    use mapping::VideoSource;

    use super::*;
    use crate::error::StateError;

    fn limits() -> StateLimits {
        StateLimits::default()
    }

    fn shaped(stingers: u8) -> MixerState {
        let mut state = MixerState::new();
        let topology = Topology {
            mix_effect_keyers: vec![2],
            stingers,
            dves: 1,
            ..Topology::default()
        };
        apply(&mut state, &topology.into(), &limits()).unwrap();
        state
    }

    #[test]
    fn addressed_report_before_topology_fails() {
        let mut state = MixerState::new();
        let report = command::mix_effect::ProgramInput::default();
        assert_eq!(
            apply(&mut state, &report.into(), &limits()),
            Err(StateError::TopologyUnknown)
        );
    }

    #[test]
    fn identity_before_topology_is_accepted() {
        let mut state = MixerState::new();
        let version = command::info::Version { major: 2, minor: 30 };
        apply(&mut state, &version.into(), &limits()).unwrap();
        assert_eq!(state.info.version, ProtocolVersion { major: 2, minor: 30 });
    }

    #[test]
    fn report_overwrites_addressed_keyer_only() {
        let mut state = shaped(1);
        let report = ChromaKey {
            mix_effect: MixEffectId::new(0),
            keyer: KeyerId::new(1),
            hue: 123.4,
            gain: 50.0,
            ..ChromaKey::default()
        };
        apply(&mut state, &report.into(), &limits()).unwrap();
        assert_eq!(state.mix_effects[0].keyers[1].chroma.hue, 123.4);
        assert_eq!(state.mix_effects[0].keyers[0].chroma, ChromaSettings::default());
    }

    #[test]
    fn dve_report_mirrors_into_wipe_and_stinger() {
        let mut state = shaped(1);
        let report = DveTransition {
            reverse: true,
            gain: 35.0,
            invert_key: true,
            ..DveTransition::default()
        };
        apply(&mut state, &report.into(), &limits()).unwrap();
        let transition = &state.mix_effects[0].transition;
        assert!(transition.wipe.reverse_direction);
        let stinger = transition.stinger.as_ref().unwrap();
        assert_eq!(stinger.gain, 35.0);
        assert!(stinger.invert);
    }

    #[test]
    fn wipe_report_mirrors_into_dve() {
        let mut state = shaped(0);
        let report = WipeTransition {
            flip_flop: true,
            ..WipeTransition::default()
        };
        apply(&mut state, &report.into(), &limits()).unwrap();
        assert!(state.mix_effects[0].transition.dve.as_ref().unwrap().flip_flop);
    }

    #[test]
    fn stinger_report_without_stinger_fails() {
        let mut state = shaped(0);
        let report = command::mix_effect::StingerTransition::default();
        assert!(matches!(
            apply(&mut state, &report.into(), &limits()),
            Err(StateError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn input_reports_create_entries() {
        let mut state = shaped(0);
        let report = command::settings::InputProperties {
            input: VideoSource::Input5,
            long_name: "Camera 5".into(),
            ..Default::default()
        };
        apply(&mut state, &report.into(), &limits()).unwrap();
        assert_eq!(
            state.settings.inputs[&VideoSource::Input5].long_name,
            "Camera 5"
        );
    }
}
