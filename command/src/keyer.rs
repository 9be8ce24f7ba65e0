//! Upstream keyer commands.

use mapping::{BorderBevel, FieldCodec, FlyKeyFrame, FlyKeyLocation, KeyType, Pattern, VideoSource};

use crate::{Address, KeyerId, MixEffectId};

get_command! {
    pub struct KeyerOnAir: b"KeOn" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            on_air: bool => FieldCodec::BOOL,
        }
    }
}

plain_set_command! {
    pub struct SetKeyerOnAir: b"CKOn" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        field { on_air: bool => FieldCodec::BOOL },
    }
}

get_command! {
    /// Type, sources and mask shared by every key type.
    pub struct KeyerBase: b"KeBP" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            key_type: KeyType => FieldCodec::ENUM,
            can_fly_key: bool => FieldCodec::BOOL,
            fly_enabled: bool => FieldCodec::BOOL,
            fill_source: VideoSource => FieldCodec::ENUM,
            cut_source: VideoSource => FieldCodec::ENUM,
            mask_enabled: bool => FieldCodec::BOOL,
            mask_top: f64 => FieldCodec::MASK_VERTICAL,
            mask_bottom: f64 => FieldCodec::MASK_VERTICAL,
            mask_left: f64 => FieldCodec::MASK_HORIZONTAL,
            mask_right: f64 => FieldCodec::MASK_HORIZONTAL,
        }
    }
}

set_command! {
    pub struct SetKeyerType: b"CKTp" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        mask KeyerTypeMask,
        change KeyerTypeChange,
        fields {
            KEY_TYPE = 0: KeyType { key_type: KeyType => FieldCodec::ENUM },
            FLY_ENABLED = 1: FlyEnabled { fly_enabled: bool => FieldCodec::BOOL },
        }
    }
}

plain_set_command! {
    pub struct SetKeyerFill: b"CKeF" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        field { fill_source: VideoSource => FieldCodec::ENUM },
    }
}

plain_set_command! {
    pub struct SetKeyerCut: b"CKeC" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        field { cut_source: VideoSource => FieldCodec::ENUM },
    }
}

set_command! {
    pub struct SetKeyerMask: b"CKMs" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        mask KeyerMaskMask,
        change KeyerMaskChange,
        fields {
            ENABLED = 0: Enabled { mask_enabled: bool => FieldCodec::BOOL },
            TOP = 1: Top { mask_top: f64 => FieldCodec::MASK_VERTICAL },
            BOTTOM = 2: Bottom { mask_bottom: f64 => FieldCodec::MASK_VERTICAL },
            LEFT = 3: Left { mask_left: f64 => FieldCodec::MASK_HORIZONTAL },
            RIGHT = 4: Right { mask_right: f64 => FieldCodec::MASK_HORIZONTAL },
        }
    }
}

get_command! {
    pub struct LumaKey: b"KeLm" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            pre_multiplied: bool => FieldCodec::BOOL,
            clip: f64 => FieldCodec::PERCENT,
            gain: f64 => FieldCodec::PERCENT,
            invert: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    pub struct SetLumaKey: b"CKLm" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        mask LumaKeyMask,
        change LumaKeyChange,
        fields {
            PRE_MULTIPLIED = 0: PreMultiplied { pre_multiplied: bool => FieldCodec::BOOL },
            CLIP = 1: Clip { clip: f64 => FieldCodec::PERCENT },
            GAIN = 2: Gain { gain: f64 => FieldCodec::PERCENT },
            INVERT = 3: Invert { invert: bool => FieldCodec::BOOL },
        }
    }
}

get_command! {
    pub struct ChromaKey: b"KeCk" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            hue: f64 => FieldCodec::HUE,
            gain: f64 => FieldCodec::PERCENT,
            y_suppress: f64 => FieldCodec::PERCENT,
            lift: f64 => FieldCodec::PERCENT,
            narrow: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    pub struct SetChromaKey: b"CKCk" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        mask ChromaKeyMask,
        change ChromaKeyChange,
        fields {
            HUE = 0: Hue { hue: f64 => FieldCodec::HUE },
            GAIN = 1: Gain { gain: f64 => FieldCodec::PERCENT },
            Y_SUPPRESS = 2: YSuppress { y_suppress: f64 => FieldCodec::PERCENT },
            LIFT = 3: Lift { lift: f64 => FieldCodec::PERCENT },
            NARROW = 4: Narrow { narrow: bool => FieldCodec::BOOL },
        }
    }
}

get_command! {
    pub struct PatternKey: b"KePt" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            pattern: Pattern => FieldCodec::ENUM,
            size: f64 => FieldCodec::PATTERN_SIZE,
            symmetry: f64 => FieldCodec::SYMMETRY,
            softness: f64 => FieldCodec::SOFTNESS,
            x_position: f64 => FieldCodec::UNIT,
            y_position: f64 => FieldCodec::UNIT,
            invert: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    /// Pattern key settings. Choosing a pattern also resets position and
    /// symmetry on the device.
    pub struct SetPatternKey: b"CKPt" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        mask PatternKeyMask,
        change PatternKeyChange,
        fields {
            PATTERN = 0: Pattern { pattern: Pattern => FieldCodec::ENUM },
            SIZE = 1: Size { size: f64 => FieldCodec::PATTERN_SIZE },
            SYMMETRY = 2: Symmetry { symmetry: f64 => FieldCodec::SYMMETRY },
            SOFTNESS = 3: Softness { softness: f64 => FieldCodec::SOFTNESS },
            X_POSITION = 4: XPosition { x_position: f64 => FieldCodec::UNIT },
            Y_POSITION = 5: YPosition { y_position: f64 => FieldCodec::UNIT },
            INVERT = 6: Invert { invert: bool => FieldCodec::BOOL },
        }
    }
}

get_command! {
    pub struct DveKey: b"KeDV" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            size_x: f64 => FieldCodec::DVE_SIZE,
            size_y: f64 => FieldCodec::DVE_SIZE,
            position_x: f64 => FieldCodec::DVE_POSITION,
            position_y: f64 => FieldCodec::DVE_POSITION,
            rotation: f64 => FieldCodec::DVE_ROTATION,
            border_enabled: bool => FieldCodec::BOOL,
            shadow_enabled: bool => FieldCodec::BOOL,
            border_bevel: BorderBevel => FieldCodec::ENUM,
            border_outer_width: f64 => FieldCodec::BORDER_WIDTH,
            border_inner_width: f64 => FieldCodec::BORDER_WIDTH,
            border_outer_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_inner_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_bevel_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_bevel_position: u8 => FieldCodec::BORDER_PERCENT,
            border_opacity: u8 => FieldCodec::BORDER_PERCENT,
            border_hue: f64 => FieldCodec::HUE,
            border_saturation: f64 => FieldCodec::PERCENT,
            border_luma: f64 => FieldCodec::PERCENT,
            light_direction: f64 => FieldCodec::LIGHT_DIRECTION,
            light_altitude: u8 => FieldCodec::LIGHT_ALTITUDE,
            mask_enabled: bool => FieldCodec::BOOL,
            mask_top: f64 => FieldCodec::MASK_VERTICAL,
            mask_bottom: f64 => FieldCodec::MASK_VERTICAL,
            mask_left: f64 => FieldCodec::MASK_HORIZONTAL,
            mask_right: f64 => FieldCodec::MASK_HORIZONTAL,
            rate: u16 => FieldCodec::RATE,
        }
    }
}

set_command! {
    pub struct SetDveKey: b"CKDV" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        mask DveKeyMask,
        change DveKeyChange,
        fields {
            SIZE_X = 0: SizeX { size_x: f64 => FieldCodec::DVE_SIZE },
            SIZE_Y = 1: SizeY { size_y: f64 => FieldCodec::DVE_SIZE },
            POSITION_X = 2: PositionX { position_x: f64 => FieldCodec::DVE_POSITION },
            POSITION_Y = 3: PositionY { position_y: f64 => FieldCodec::DVE_POSITION },
            ROTATION = 4: Rotation { rotation: f64 => FieldCodec::DVE_ROTATION },
            BORDER_ENABLED = 5: BorderEnabled { border_enabled: bool => FieldCodec::BOOL },
            SHADOW_ENABLED = 6: ShadowEnabled { shadow_enabled: bool => FieldCodec::BOOL },
            BORDER_BEVEL = 7: BorderBevel { border_bevel: BorderBevel => FieldCodec::ENUM },
            BORDER_OUTER_WIDTH = 8: BorderOuterWidth { border_outer_width: f64 => FieldCodec::BORDER_WIDTH },
            BORDER_INNER_WIDTH = 9: BorderInnerWidth { border_inner_width: f64 => FieldCodec::BORDER_WIDTH },
            BORDER_OUTER_SOFTNESS = 10: BorderOuterSoftness { border_outer_softness: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_INNER_SOFTNESS = 11: BorderInnerSoftness { border_inner_softness: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_BEVEL_SOFTNESS = 12: BorderBevelSoftness { border_bevel_softness: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_BEVEL_POSITION = 13: BorderBevelPosition { border_bevel_position: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_OPACITY = 14: BorderOpacity { border_opacity: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_HUE = 15: BorderHue { border_hue: f64 => FieldCodec::HUE },
            BORDER_SATURATION = 16: BorderSaturation { border_saturation: f64 => FieldCodec::PERCENT },
            BORDER_LUMA = 17: BorderLuma { border_luma: f64 => FieldCodec::PERCENT },
            LIGHT_DIRECTION = 18: LightDirection { light_direction: f64 => FieldCodec::LIGHT_DIRECTION },
            LIGHT_ALTITUDE = 19: LightAltitude { light_altitude: u8 => FieldCodec::LIGHT_ALTITUDE },
            MASK_ENABLED = 20: MaskEnabled { mask_enabled: bool => FieldCodec::BOOL },
            MASK_TOP = 21: MaskTop { mask_top: f64 => FieldCodec::MASK_VERTICAL },
            MASK_BOTTOM = 22: MaskBottom { mask_bottom: f64 => FieldCodec::MASK_VERTICAL },
            MASK_LEFT = 23: MaskLeft { mask_left: f64 => FieldCodec::MASK_HORIZONTAL },
            MASK_RIGHT = 24: MaskRight { mask_right: f64 => FieldCodec::MASK_HORIZONTAL },
            RATE = 25: Rate { rate: u16 => FieldCodec::RATE },
        }
    }
}

get_command! {
    /// Fly-key run state.
    pub struct FlyKeyState: b"KeFS" {
        address { mix_effect: MixEffectId, keyer: KeyerId } => Address::Keyer(mix_effect, keyer),
        fields {
            a_set: bool => FieldCodec::BOOL,
            b_set: bool => FieldCodec::BOOL,
            at_key_frame: Vec<FlyKeyLocation> => FieldCodec::FLAGS,
            run_to_infinite_index: u8 => FieldCodec::INDEX,
        }
    }
}

get_command! {
    /// One stored fly-key frame.
    pub struct FlyKeyFrameProperties: b"KKFP" {
        address { mix_effect: MixEffectId, keyer: KeyerId, frame: FlyKeyFrame }
            => Address::KeyFrame(mix_effect, keyer, frame),
        fields {
            size_x: f64 => FieldCodec::DVE_SIZE,
            size_y: f64 => FieldCodec::DVE_SIZE,
            position_x: f64 => FieldCodec::DVE_POSITION,
            position_y: f64 => FieldCodec::DVE_POSITION,
            rotation: f64 => FieldCodec::DVE_ROTATION,
            border_outer_width: f64 => FieldCodec::BORDER_WIDTH,
            border_inner_width: f64 => FieldCodec::BORDER_WIDTH,
            border_outer_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_inner_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_bevel_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_bevel_position: u8 => FieldCodec::BORDER_PERCENT,
            border_opacity: u8 => FieldCodec::BORDER_PERCENT,
            border_hue: f64 => FieldCodec::HUE,
            border_saturation: f64 => FieldCodec::PERCENT,
            border_luma: f64 => FieldCodec::PERCENT,
            light_direction: f64 => FieldCodec::LIGHT_DIRECTION,
            light_altitude: u8 => FieldCodec::LIGHT_ALTITUDE,
            mask_top: f64 => FieldCodec::MASK_VERTICAL,
            mask_bottom: f64 => FieldCodec::MASK_VERTICAL,
            mask_left: f64 => FieldCodec::MASK_HORIZONTAL,
            mask_right: f64 => FieldCodec::MASK_HORIZONTAL,
        }
    }
}
