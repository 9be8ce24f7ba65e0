//! Predicting the tree a Set command should produce.

use command::audio::{AudioInputChange, AudioMasterChange, AudioMonitorChange};
use command::downstream::{DownstreamKeyerGeneralChange, DownstreamKeyerMaskChange};
use command::keyer::{
    ChromaKeyChange, DveKeyChange, KeyerMaskChange, KeyerTypeChange, LumaKeyChange,
    PatternKeyChange,
};
use command::media::{MediaPlayerSelectionChange, MediaPlayerStatusChange};
use command::mix_effect::{
    DipTransitionChange, DveTransitionChange, StingerTransitionChange,
    TransitionPropertiesChange, WipeTransitionChange,
};
use command::routing::ColorGeneratorChange;
use command::settings::InputPropertiesChange;
use command::super_source::{SuperSourceBoxChange, SuperSourcePropertiesChange};
use command::SetCommand;
use tracing::trace;

use crate::coupling::{self, TransitionField};
use crate::error::StateResult;
use crate::keyer::MaskState;
use crate::tree::MixerState;

/// Applies the fields a Set command claims, plus the couplings the device
/// would apply with them.
///
/// Values land as the device stores them after wire quantization, so a
/// request at the edge of a range predicts the device's answer rather than
/// the requested number. Choosing a pattern resets position and symmetry
/// first, so explicit values in the same command win. The device's own
/// reports remain authoritative; the result is what those reports should add
/// up to.
pub fn predict(state: &mut MixerState, command: &SetCommand) -> StateResult<()> {
    trace!(command = %command.name(), address = %command.address(), "predict");
    state.topology()?;
    let command = &command.settled();
    match command {
        SetCommand::SetVideoMode(set) => state.settings.video_mode = *set.mode(),
        SetCommand::SetInputProperties(set) => {
            let input = state.input_mut(set.input)?;
            for change in set.changes() {
                match change {
                    InputPropertiesChange::LongName(value) => input.long_name = value,
                    InputPropertiesChange::ShortName(value) => input.short_name = value,
                    InputPropertiesChange::ExternalPort(value) => input.external_port = value,
                }
            }
        }

        SetCommand::SetProgramInput(set) => {
            state.mix_effect_mut(set.mix_effect)?.program_input = *set.source();
        }
        SetCommand::SetPreviewInput(set) => {
            state.mix_effect_mut(set.mix_effect)?.preview_input = *set.source();
        }
        SetCommand::SetTransitionProperties(set) => {
            let transition = &mut state.mix_effect_mut(set.mix_effect)?.transition;
            for change in set.changes() {
                match change {
                    TransitionPropertiesChange::NextStyle(value) => transition.next_style = value,
                    TransitionPropertiesChange::NextSelection(value) => {
                        transition.next_selection = value;
                    }
                }
            }
        }
        SetCommand::SetPreviewTransition(set) => {
            state.mix_effect_mut(set.mix_effect)?.transition.preview_enabled = *set.enabled();
        }
        SetCommand::SetTransitionPosition(set) => {
            state.mix_effect_mut(set.mix_effect)?.transition.position.handle_position =
                *set.handle_position();
        }
        SetCommand::SetMixTransition(set) => {
            state.mix_effect_mut(set.mix_effect)?.transition.mix.rate = *set.rate();
        }
        SetCommand::SetDipTransition(set) => {
            let dip = &mut state.mix_effect_mut(set.mix_effect)?.transition.dip;
            for change in set.changes() {
                match change {
                    DipTransitionChange::Rate(value) => dip.rate = value,
                    DipTransitionChange::Input(value) => dip.input = value,
                }
            }
        }
        SetCommand::SetWipeTransition(set) => {
            let transition = &mut state.mix_effect_mut(set.mix_effect)?.transition;
            let wipe = &mut transition.wipe;
            if let Some(&pattern) = set.pattern() {
                let reset = coupling::pattern_reset(pattern);
                wipe.x_position = reset.x_position;
                wipe.y_position = reset.y_position;
                wipe.symmetry = reset.symmetry;
            }
            let mut changed = Vec::new();
            for change in set.changes() {
                match change {
                    WipeTransitionChange::Rate(value) => wipe.rate = value,
                    WipeTransitionChange::Pattern(value) => wipe.pattern = value,
                    WipeTransitionChange::BorderWidth(value) => wipe.border_width = value,
                    WipeTransitionChange::BorderInput(value) => wipe.border_input = value,
                    WipeTransitionChange::Symmetry(value) => wipe.symmetry = value,
                    WipeTransitionChange::BorderSoftness(value) => wipe.border_softness = value,
                    WipeTransitionChange::XPosition(value) => wipe.x_position = value,
                    WipeTransitionChange::YPosition(value) => wipe.y_position = value,
                    WipeTransitionChange::ReverseDirection(value) => {
                        wipe.reverse_direction = value;
                        changed.push(TransitionField::WipeReverse);
                    }
                    WipeTransitionChange::FlipFlop(value) => {
                        wipe.flip_flop = value;
                        changed.push(TransitionField::WipeFlipFlop);
                    }
                }
            }
            coupling::propagate(transition, &changed);
        }
        SetCommand::SetStingerTransition(set) => {
            let stinger = state.stinger_mut(set.mix_effect)?;
            for change in set.changes() {
                match change {
                    StingerTransitionChange::Source(value) => stinger.source = value,
                    StingerTransitionChange::PreMultiplied(value) => stinger.pre_multiplied = value,
                    StingerTransitionChange::Clip(value) => stinger.clip = value,
                    StingerTransitionChange::Gain(value) => stinger.gain = value,
                    StingerTransitionChange::Invert(value) => stinger.invert = value,
                    StingerTransitionChange::Preroll(value) => stinger.preroll = value,
                    StingerTransitionChange::ClipDuration(value) => stinger.clip_duration = value,
                    StingerTransitionChange::TriggerPoint(value) => stinger.trigger_point = value,
                    StingerTransitionChange::MixRate(value) => stinger.mix_rate = value,
                }
            }
        }
        SetCommand::SetDveTransition(set) => {
            let dve = state.dve_transition_mut(set.mix_effect)?;
            let mut changed = Vec::new();
            for change in set.changes() {
                match change {
                    DveTransitionChange::Rate(value) => dve.rate = value,
                    DveTransitionChange::LogoRate(value) => dve.logo_rate = value,
                    DveTransitionChange::Style(value) => dve.style = value,
                    DveTransitionChange::FillSource(value) => dve.fill_source = value,
                    DveTransitionChange::KeySource(value) => dve.key_source = value,
                    DveTransitionChange::EnableKey(value) => dve.enable_key = value,
                    DveTransitionChange::PreMultiplied(value) => dve.pre_multiplied = value,
                    DveTransitionChange::Clip(value) => {
                        dve.clip = value;
                        changed.push(TransitionField::DveClip);
                    }
                    DveTransitionChange::Gain(value) => {
                        dve.gain = value;
                        changed.push(TransitionField::DveGain);
                    }
                    DveTransitionChange::InvertKey(value) => {
                        dve.invert_key = value;
                        changed.push(TransitionField::DveInvertKey);
                    }
                    DveTransitionChange::Reverse(value) => {
                        dve.reverse = value;
                        changed.push(TransitionField::DveReverse);
                    }
                    DveTransitionChange::FlipFlop(value) => {
                        dve.flip_flop = value;
                        changed.push(TransitionField::DveFlipFlop);
                    }
                }
            }
            let transition = &mut state.mix_effect_mut(set.mix_effect)?.transition;
            coupling::propagate(transition, &changed);
        }
        SetCommand::SetFadeToBlackRate(set) => {
            state.mix_effect_mut(set.mix_effect)?.fade_to_black.rate = *set.rate();
        }

        SetCommand::SetKeyerOnAir(set) => {
            state.keyer_mut(set.mix_effect, set.keyer)?.on_air = *set.on_air();
        }
        SetCommand::SetKeyerType(set) => {
            let properties = &mut state.keyer_mut(set.mix_effect, set.keyer)?.properties;
            for change in set.changes() {
                match change {
                    KeyerTypeChange::KeyType(value) => properties.key_type = value,
                    KeyerTypeChange::FlyEnabled(value) => properties.fly_enabled = value,
                }
            }
        }
        SetCommand::SetKeyerFill(set) => {
            state.keyer_mut(set.mix_effect, set.keyer)?.properties.fill_source = *set.fill_source();
        }
        SetCommand::SetKeyerCut(set) => {
            state.keyer_mut(set.mix_effect, set.keyer)?.properties.cut_source = *set.cut_source();
        }
        SetCommand::SetKeyerMask(set) => {
            let mask = &mut state.keyer_mut(set.mix_effect, set.keyer)?.properties.mask;
            for change in set.changes() {
                match change {
                    KeyerMaskChange::Enabled(value) => mask.enabled = value,
                    KeyerMaskChange::Top(value) => mask.top = value,
                    KeyerMaskChange::Bottom(value) => mask.bottom = value,
                    KeyerMaskChange::Left(value) => mask.left = value,
                    KeyerMaskChange::Right(value) => mask.right = value,
                }
            }
        }
        SetCommand::SetLumaKey(set) => {
            let luma = &mut state.keyer_mut(set.mix_effect, set.keyer)?.luma;
            for change in set.changes() {
                match change {
                    LumaKeyChange::PreMultiplied(value) => luma.pre_multiplied = value,
                    LumaKeyChange::Clip(value) => luma.clip = value,
                    LumaKeyChange::Gain(value) => luma.gain = value,
                    LumaKeyChange::Invert(value) => luma.invert = value,
                }
            }
        }
        SetCommand::SetChromaKey(set) => {
            let chroma = &mut state.keyer_mut(set.mix_effect, set.keyer)?.chroma;
            for change in set.changes() {
                match change {
                    ChromaKeyChange::Hue(value) => chroma.hue = value,
                    ChromaKeyChange::Gain(value) => chroma.gain = value,
                    ChromaKeyChange::YSuppress(value) => chroma.y_suppress = value,
                    ChromaKeyChange::Lift(value) => chroma.lift = value,
                    ChromaKeyChange::Narrow(value) => chroma.narrow = value,
                }
            }
        }
        SetCommand::SetPatternKey(set) => {
            let pattern = &mut state.keyer_mut(set.mix_effect, set.keyer)?.pattern;
            if let Some(&chosen) = set.pattern() {
                let reset = coupling::pattern_reset(chosen);
                pattern.x_position = reset.x_position;
                pattern.y_position = reset.y_position;
                pattern.symmetry = reset.symmetry;
            }
            for change in set.changes() {
                match change {
                    PatternKeyChange::Pattern(value) => pattern.pattern = value,
                    PatternKeyChange::Size(value) => pattern.size = value,
                    PatternKeyChange::Symmetry(value) => pattern.symmetry = value,
                    PatternKeyChange::Softness(value) => pattern.softness = value,
                    PatternKeyChange::XPosition(value) => pattern.x_position = value,
                    PatternKeyChange::YPosition(value) => pattern.y_position = value,
                    PatternKeyChange::Invert(value) => pattern.invert = value,
                }
            }
        }
        SetCommand::SetDveKey(set) => {
            let dve = &mut state.keyer_mut(set.mix_effect, set.keyer)?.dve;
            for change in set.changes() {
                match change {
                    DveKeyChange::SizeX(value) => dve.size_x = value,
                    DveKeyChange::SizeY(value) => dve.size_y = value,
                    DveKeyChange::PositionX(value) => dve.position_x = value,
                    DveKeyChange::PositionY(value) => dve.position_y = value,
                    DveKeyChange::Rotation(value) => dve.rotation = value,
                    DveKeyChange::BorderEnabled(value) => dve.border_enabled = value,
                    DveKeyChange::ShadowEnabled(value) => dve.shadow_enabled = value,
                    DveKeyChange::BorderBevel(value) => dve.border_bevel = value,
                    DveKeyChange::BorderOuterWidth(value) => dve.border_outer_width = value,
                    DveKeyChange::BorderInnerWidth(value) => dve.border_inner_width = value,
                    DveKeyChange::BorderOuterSoftness(value) => dve.border_outer_softness = value,
                    DveKeyChange::BorderInnerSoftness(value) => dve.border_inner_softness = value,
                    DveKeyChange::BorderBevelSoftness(value) => dve.border_bevel_softness = value,
                    DveKeyChange::BorderBevelPosition(value) => dve.border_bevel_position = value,
                    DveKeyChange::BorderOpacity(value) => dve.border_opacity = value,
                    DveKeyChange::BorderHue(value) => dve.border_hue = value,
                    DveKeyChange::BorderSaturation(value) => dve.border_saturation = value,
                    DveKeyChange::BorderLuma(value) => dve.border_luma = value,
                    DveKeyChange::LightDirection(value) => dve.light_direction = value,
                    DveKeyChange::LightAltitude(value) => dve.light_altitude = value,
                    DveKeyChange::MaskEnabled(value) => dve.mask.enabled = value,
                    DveKeyChange::MaskTop(value) => dve.mask.top = value,
                    DveKeyChange::MaskBottom(value) => dve.mask.bottom = value,
                    DveKeyChange::MaskLeft(value) => dve.mask.left = value,
                    DveKeyChange::MaskRight(value) => dve.mask.right = value,
                    DveKeyChange::Rate(value) => dve.rate = value,
                }
            }
        }

        SetCommand::SetDownstreamKeyerFill(set) => {
            state.downstream_keyer_mut(set.keyer)?.fill_source = *set.fill_source();
        }
        SetCommand::SetDownstreamKeyerCut(set) => {
            state.downstream_keyer_mut(set.keyer)?.cut_source = *set.cut_source();
        }
        SetCommand::SetDownstreamKeyerTie(set) => {
            state.downstream_keyer_mut(set.keyer)?.tie = *set.tie();
        }
        SetCommand::SetDownstreamKeyerRate(set) => {
            state.downstream_keyer_mut(set.keyer)?.rate = *set.rate();
        }
        SetCommand::SetDownstreamKeyerOnAir(set) => {
            state.downstream_keyer_mut(set.keyer)?.on_air = *set.on_air();
        }
        SetCommand::SetDownstreamKeyerGeneral(set) => {
            let keyer = state.downstream_keyer_mut(set.keyer)?;
            for change in set.changes() {
                match change {
                    DownstreamKeyerGeneralChange::PreMultiplied(value) => keyer.pre_multiplied = value,
                    DownstreamKeyerGeneralChange::Clip(value) => keyer.clip = value,
                    DownstreamKeyerGeneralChange::Gain(value) => keyer.gain = value,
                    DownstreamKeyerGeneralChange::Invert(value) => keyer.invert = value,
                }
            }
        }
        SetCommand::SetDownstreamKeyerMask(set) => {
            let mask: &mut MaskState = &mut state.downstream_keyer_mut(set.keyer)?.mask;
            for change in set.changes() {
                match change {
                    DownstreamKeyerMaskChange::Enabled(value) => mask.enabled = value,
                    DownstreamKeyerMaskChange::Top(value) => mask.top = value,
                    DownstreamKeyerMaskChange::Bottom(value) => mask.bottom = value,
                    DownstreamKeyerMaskChange::Left(value) => mask.left = value,
                    DownstreamKeyerMaskChange::Right(value) => mask.right = value,
                }
            }
        }

        SetCommand::SetAuxiliarySource(set) => {
            state.auxiliary_mut(set.auxiliary)?.source = *set.source();
        }
        SetCommand::SetColorGenerator(set) => {
            let color = state.color_generator_mut(set.generator)?;
            for change in set.changes() {
                match change {
                    ColorGeneratorChange::Hue(value) => color.hue = value,
                    ColorGeneratorChange::Saturation(value) => color.saturation = value,
                    ColorGeneratorChange::Luma(value) => color.luma = value,
                }
            }
        }

        SetCommand::SetSuperSourceProperties(set) => {
            let target = state.super_source_mut(set.super_source)?;
            for change in set.changes() {
                match change {
                    SuperSourcePropertiesChange::ArtFillSource(value) => target.art_fill_source = value,
                    SuperSourcePropertiesChange::ArtCutSource(value) => target.art_cut_source = value,
                    SuperSourcePropertiesChange::ArtOption(value) => target.art_option = value,
                    SuperSourcePropertiesChange::ArtPreMultiplied(value) => {
                        target.art_pre_multiplied = value;
                    }
                    SuperSourcePropertiesChange::ArtClip(value) => target.art_clip = value,
                    SuperSourcePropertiesChange::ArtGain(value) => target.art_gain = value,
                    SuperSourcePropertiesChange::ArtInvert(value) => target.art_invert = value,
                    SuperSourcePropertiesChange::BorderEnabled(value) => target.border_enabled = value,
                    SuperSourcePropertiesChange::BorderBevel(value) => target.border_bevel = value,
                    SuperSourcePropertiesChange::BorderOuterWidth(value) => {
                        target.border_outer_width = value;
                    }
                    SuperSourcePropertiesChange::BorderInnerWidth(value) => {
                        target.border_inner_width = value;
                    }
                    SuperSourcePropertiesChange::BorderOuterSoftness(value) => {
                        target.border_outer_softness = value;
                    }
                    SuperSourcePropertiesChange::BorderInnerSoftness(value) => {
                        target.border_inner_softness = value;
                    }
                    SuperSourcePropertiesChange::BorderBevelSoftness(value) => {
                        target.border_bevel_softness = value;
                    }
                    SuperSourcePropertiesChange::BorderBevelPosition(value) => {
                        target.border_bevel_position = value;
                    }
                    SuperSourcePropertiesChange::BorderHue(value) => target.border_hue = value,
                    SuperSourcePropertiesChange::BorderSaturation(value) => {
                        target.border_saturation = value;
                    }
                    SuperSourcePropertiesChange::BorderLuma(value) => target.border_luma = value,
                    SuperSourcePropertiesChange::LightDirection(value) => {
                        target.light_direction = value;
                    }
                    SuperSourcePropertiesChange::LightAltitude(value) => {
                        target.light_altitude = value;
                    }
                }
            }
        }
        SetCommand::SetSuperSourceBox(set) => {
            let target = state.super_source_box_mut(set.super_source, set.index)?;
            for change in set.changes() {
                match change {
                    SuperSourceBoxChange::Enabled(value) => target.enabled = value,
                    SuperSourceBoxChange::Source(value) => target.source = value,
                    SuperSourceBoxChange::PositionX(value) => target.position_x = value,
                    SuperSourceBoxChange::PositionY(value) => target.position_y = value,
                    SuperSourceBoxChange::Size(value) => target.size = value,
                    SuperSourceBoxChange::Cropped(value) => target.cropped = value,
                    SuperSourceBoxChange::CropTop(value) => target.crop_top = value,
                    SuperSourceBoxChange::CropBottom(value) => target.crop_bottom = value,
                    SuperSourceBoxChange::CropLeft(value) => target.crop_left = value,
                    SuperSourceBoxChange::CropRight(value) => target.crop_right = value,
                }
            }
        }

        SetCommand::SetAudioInput(set) => {
            let channel = state.audio_input_mut(set.source)?;
            for change in set.changes() {
                match change {
                    AudioInputChange::MixOption(value) => channel.mix_option = value,
                    AudioInputChange::Gain(value) => channel.gain = value,
                    AudioInputChange::Balance(value) => channel.balance = value,
                }
            }
        }
        SetCommand::SetAudioMaster(set) => {
            let master = &mut state.audio.master;
            for change in set.changes() {
                match change {
                    AudioMasterChange::Gain(value) => master.gain = value,
                    AudioMasterChange::Balance(value) => master.balance = value,
                    AudioMasterChange::FollowFadeToBlack(value) => master.follow_fade_to_black = value,
                }
            }
        }
        SetCommand::SetAudioMonitor(set) => {
            let monitor = &mut state.audio.monitor;
            for change in set.changes() {
                match change {
                    AudioMonitorChange::Enabled(value) => monitor.enabled = value,
                    AudioMonitorChange::Gain(value) => monitor.gain = value,
                    AudioMonitorChange::Mute(value) => monitor.mute = value,
                    AudioMonitorChange::Solo(value) => monitor.solo = value,
                    AudioMonitorChange::SoloSource(value) => monitor.solo_source = value,
                    AudioMonitorChange::Dim(value) => monitor.dim = value,
                }
            }
        }

        SetCommand::SetMediaPlayerSelection(set) => {
            let player = state.media_player_mut(set.player)?;
            for change in set.changes() {
                match change {
                    MediaPlayerSelectionChange::SourceType(value) => player.source_type = value,
                    MediaPlayerSelectionChange::StillIndex(value) => player.still_index = value,
                    MediaPlayerSelectionChange::ClipIndex(value) => player.clip_index = value,
                }
            }
        }
        SetCommand::SetMediaPlayerStatus(set) => {
            let player = state.media_player_mut(set.player)?;
            for change in set.changes() {
                match change {
                    MediaPlayerStatusChange::Playing(value) => player.playing = value,
                    MediaPlayerStatusChange::Looping(value) => player.looping = value,
                    MediaPlayerStatusChange::AtBeginning(value) => player.at_beginning = value,
                    MediaPlayerStatusChange::ClipFrame(value) => player.clip_frame = value,
                }
            }
        }
    }
    Ok(())
}
