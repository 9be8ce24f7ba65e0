//! Mix-effect block commands: sources, transitions and fade to black.

use mapping::{DveEffect, FieldCodec, Pattern, StingerSource, TransitionLayer, TransitionStyle, VideoSource};

use crate::{Address, MixEffectId};

get_command! {
    /// Source on a mix-effect program bus.
    pub struct ProgramInput: b"PrgI" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            source: VideoSource => FieldCodec::ENUM,
        }
    }
}

plain_set_command! {
    pub struct SetProgramInput: b"CPgI" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        field { source: VideoSource => FieldCodec::ENUM },
    }
}

get_command! {
    /// Source on a mix-effect preview bus.
    pub struct PreviewInput: b"PrvI" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            source: VideoSource => FieldCodec::ENUM,
        }
    }
}

plain_set_command! {
    pub struct SetPreviewInput: b"CPvI" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        field { source: VideoSource => FieldCodec::ENUM },
    }
}

get_command! {
    /// Current and next transition style and layers.
    pub struct TransitionProperties: b"TrSS" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            style: TransitionStyle => FieldCodec::ENUM,
            selection: Vec<TransitionLayer> => FieldCodec::FLAGS,
            next_style: TransitionStyle => FieldCodec::ENUM,
            next_selection: Vec<TransitionLayer> => FieldCodec::FLAGS,
        }
    }
}

set_command! {
    /// Chooses the style and layers of the next transition.
    pub struct SetTransitionProperties: b"CTTp" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        mask TransitionPropertiesMask,
        change TransitionPropertiesChange,
        fields {
            NEXT_STYLE = 0: NextStyle { next_style: TransitionStyle => FieldCodec::ENUM },
            NEXT_SELECTION = 1: NextSelection { next_selection: Vec<TransitionLayer> => FieldCodec::FLAGS },
        }
    }
}

get_command! {
    /// Whether the preview bus shows the transition.
    pub struct PreviewTransition: b"TrPr" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            enabled: bool => FieldCodec::BOOL,
        }
    }
}

plain_set_command! {
    pub struct SetPreviewTransition: b"CTPr" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        field { enabled: bool => FieldCodec::BOOL },
    }
}

get_command! {
    /// Progress of the running transition.
    pub struct TransitionPosition: b"TrPs" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            in_transition: bool => FieldCodec::BOOL,
            remaining_frames: u16 => FieldCodec::FRAMES,
            /// Fader handle position, 0 to 1.
            handle_position: f64 => FieldCodec::UNIT,
        }
    }
}

plain_set_command! {
    /// Moves the fader handle.
    pub struct SetTransitionPosition: b"CTPs" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        field { handle_position: f64 => FieldCodec::UNIT },
    }
}

get_command! {
    pub struct MixTransition: b"TMxP" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            rate: u16 => FieldCodec::RATE,
        }
    }
}

plain_set_command! {
    pub struct SetMixTransition: b"CTMx" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        field { rate: u16 => FieldCodec::RATE },
    }
}

get_command! {
    pub struct DipTransition: b"TDpP" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            rate: u16 => FieldCodec::RATE,
            input: VideoSource => FieldCodec::ENUM,
        }
    }
}

set_command! {
    pub struct SetDipTransition: b"CTDp" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        mask DipTransitionMask,
        change DipTransitionChange,
        fields {
            RATE = 0: Rate { rate: u16 => FieldCodec::RATE },
            INPUT = 1: Input { input: VideoSource => FieldCodec::ENUM },
        }
    }
}

get_command! {
    pub struct WipeTransition: b"TWpP" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            rate: u16 => FieldCodec::RATE,
            pattern: Pattern => FieldCodec::ENUM,
            border_width: f64 => FieldCodec::WIPE_BORDER_WIDTH,
            border_input: VideoSource => FieldCodec::ENUM,
            symmetry: f64 => FieldCodec::SYMMETRY,
            border_softness: f64 => FieldCodec::SOFTNESS,
            x_position: f64 => FieldCodec::UNIT,
            y_position: f64 => FieldCodec::UNIT,
            reverse_direction: bool => FieldCodec::BOOL,
            flip_flop: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    pub struct SetWipeTransition: b"CTWp" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        mask WipeTransitionMask,
        change WipeTransitionChange,
        fields {
            RATE = 0: Rate { rate: u16 => FieldCodec::RATE },
            PATTERN = 1: Pattern { pattern: Pattern => FieldCodec::ENUM },
            BORDER_WIDTH = 2: BorderWidth { border_width: f64 => FieldCodec::WIPE_BORDER_WIDTH },
            BORDER_INPUT = 3: BorderInput { border_input: VideoSource => FieldCodec::ENUM },
            SYMMETRY = 4: Symmetry { symmetry: f64 => FieldCodec::SYMMETRY },
            BORDER_SOFTNESS = 5: BorderSoftness { border_softness: f64 => FieldCodec::SOFTNESS },
            X_POSITION = 6: XPosition { x_position: f64 => FieldCodec::UNIT },
            Y_POSITION = 7: YPosition { y_position: f64 => FieldCodec::UNIT },
            REVERSE_DIRECTION = 8: ReverseDirection { reverse_direction: bool => FieldCodec::BOOL },
            FLIP_FLOP = 9: FlipFlop { flip_flop: bool => FieldCodec::BOOL },
        }
    }
}

get_command! {
    /// Stinger transition settings. Only present when the device has one.
    pub struct StingerTransition: b"TStP" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            source: StingerSource => FieldCodec::ENUM,
            pre_multiplied: bool => FieldCodec::BOOL,
            clip: f64 => FieldCodec::PERCENT,
            gain: f64 => FieldCodec::PERCENT,
            invert: bool => FieldCodec::BOOL,
            preroll: u16 => FieldCodec::FRAMES,
            clip_duration: u16 => FieldCodec::FRAMES,
            trigger_point: u16 => FieldCodec::FRAMES,
            mix_rate: u16 => FieldCodec::FRAMES,
        }
    }
}

set_command! {
    pub struct SetStingerTransition: b"CTSt" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        mask StingerTransitionMask,
        change StingerTransitionChange,
        fields {
            SOURCE = 0: Source { source: StingerSource => FieldCodec::ENUM },
            PRE_MULTIPLIED = 1: PreMultiplied { pre_multiplied: bool => FieldCodec::BOOL },
            CLIP = 2: Clip { clip: f64 => FieldCodec::PERCENT },
            GAIN = 3: Gain { gain: f64 => FieldCodec::PERCENT },
            INVERT = 4: Invert { invert: bool => FieldCodec::BOOL },
            PREROLL = 5: Preroll { preroll: u16 => FieldCodec::FRAMES },
            CLIP_DURATION = 6: ClipDuration { clip_duration: u16 => FieldCodec::FRAMES },
            TRIGGER_POINT = 7: TriggerPoint { trigger_point: u16 => FieldCodec::FRAMES },
            MIX_RATE = 8: MixRate { mix_rate: u16 => FieldCodec::FRAMES },
        }
    }
}

get_command! {
    /// DVE transition settings. Only present when the device has a DVE.
    pub struct DveTransition: b"TDvP" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            rate: u16 => FieldCodec::RATE,
            logo_rate: u16 => FieldCodec::RATE,
            style: DveEffect => FieldCodec::ENUM,
            fill_source: VideoSource => FieldCodec::ENUM,
            key_source: VideoSource => FieldCodec::ENUM,
            enable_key: bool => FieldCodec::BOOL,
            pre_multiplied: bool => FieldCodec::BOOL,
            clip: f64 => FieldCodec::PERCENT,
            gain: f64 => FieldCodec::PERCENT,
            invert_key: bool => FieldCodec::BOOL,
            reverse: bool => FieldCodec::BOOL,
            flip_flop: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    pub struct SetDveTransition: b"CTDv" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        mask DveTransitionMask,
        change DveTransitionChange,
        fields {
            RATE = 0: Rate { rate: u16 => FieldCodec::RATE },
            LOGO_RATE = 1: LogoRate { logo_rate: u16 => FieldCodec::RATE },
            STYLE = 2: Style { style: DveEffect => FieldCodec::ENUM },
            FILL_SOURCE = 3: FillSource { fill_source: VideoSource => FieldCodec::ENUM },
            KEY_SOURCE = 4: KeySource { key_source: VideoSource => FieldCodec::ENUM },
            ENABLE_KEY = 5: EnableKey { enable_key: bool => FieldCodec::BOOL },
            PRE_MULTIPLIED = 6: PreMultiplied { pre_multiplied: bool => FieldCodec::BOOL },
            CLIP = 7: Clip { clip: f64 => FieldCodec::PERCENT },
            GAIN = 8: Gain { gain: f64 => FieldCodec::PERCENT },
            INVERT_KEY = 9: InvertKey { invert_key: bool => FieldCodec::BOOL },
            REVERSE = 10: Reverse { reverse: bool => FieldCodec::BOOL },
            FLIP_FLOP = 11: FlipFlop { flip_flop: bool => FieldCodec::BOOL },
        }
    }
}

get_command! {
    pub struct FadeToBlackRate: b"FtbP" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            rate: u16 => FieldCodec::RATE,
        }
    }
}

plain_set_command! {
    pub struct SetFadeToBlackRate: b"FtbC" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        field { rate: u16 => FieldCodec::RATE },
    }
}

get_command! {
    pub struct FadeToBlackState: b"FtbS" {
        address { mix_effect: MixEffectId } => Address::MixEffect(mix_effect),
        fields {
            fully_black: bool => FieldCodec::BOOL,
            in_transition: bool => FieldCodec::BOOL,
            remaining_frames: u16 => FieldCodec::FRAMES,
        }
    }
}

#[cfg(test)]
mod tests {
    use mapping::WireValue;

    use super::*;
    use crate::{CommandError, Payload};

    fn me(index: u8) -> MixEffectId {
        MixEffectId::new(index)
    }

    #[test]
    fn wipe_mask_claims_only_assigned_fields() {
        let command = SetWipeTransition::new(me(0))
            .with(WipeTransitionChange::Symmetry(30.0))
            .with(WipeTransitionChange::FlipFlop(true));
        assert_eq!(
            command.mask(),
            WipeTransitionMask::SYMMETRY | WipeTransitionMask::FLIP_FLOP
        );
        assert_eq!(command.symmetry(), Some(&30.0));
        assert_eq!(command.rate(), None);
        assert_eq!(
            command.changes(),
            vec![
                WipeTransitionChange::Symmetry(30.0),
                WipeTransitionChange::FlipFlop(true)
            ]
        );
    }

    #[test]
    fn rate_is_clamped() {
        let command = SetMixTransition::new(me(0), 0);
        assert_eq!(*command.rate(), 1);
        let command = SetDipTransition::new(me(0)).with(DipTransitionChange::Rate(999));
        assert_eq!(command.rate(), Some(&250));
    }

    #[test]
    fn payload_zeroes_unclaimed_fields() {
        let command = SetDipTransition::new(me(1)).with(DipTransitionChange::Input(VideoSource::Input2));
        let payload = command.to_payload().unwrap();
        assert_eq!(payload.mask, 0b10);
        assert_eq!(payload.values, vec![WireValue::Int(0), WireValue::Int(2)]);
        let decoded = SetDipTransition::from_payload(me(1), &payload).unwrap();
        assert_eq!(decoded, command);
    }

    #[test]
    fn decode_rejects_unknown_mask_bits() {
        let payload = Payload::new(0b100, vec![WireValue::Int(0), WireValue::Int(0)]);
        let err = SetDipTransition::from_payload(me(0), &payload).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownMaskBits {
                command: SetDipTransition::NAME,
                bits: 0b100
            }
        );
    }

    #[test]
    fn get_payload_carries_every_field() {
        let position = TransitionPosition {
            mix_effect: me(0),
            in_transition: true,
            remaining_frames: 12,
            handle_position: 0.25,
        };
        let payload = position.to_payload().unwrap();
        assert_eq!(payload.values.len(), TransitionPosition::FIELD_COUNT);
        assert_eq!(TransitionPosition::from_payload(me(0), &payload).unwrap(), position);
    }

    #[test]
    fn get_decode_rejects_short_payload() {
        let payload = Payload::new(0, vec![WireValue::Bool(true)]);
        assert!(matches!(
            FadeToBlackState::from_payload(me(0), &payload),
            Err(CommandError::FieldCountMismatch { expected: 3, actual: 1, .. })
        ));
    }

    #[test]
    fn selection_flags_encode_in_table_order() {
        let command = SetTransitionProperties::new(me(0)).with(TransitionPropertiesChange::NextSelection(
            vec![TransitionLayer::Key1, TransitionLayer::Background],
        ));
        assert_eq!(
            command.next_selection(),
            Some(&vec![TransitionLayer::Background, TransitionLayer::Key1])
        );
        let payload = command.to_payload().unwrap();
        assert_eq!(payload.values[1], WireValue::Int(0b11));
    }
}
