//! Super-source art and box commands.

use mapping::{BorderBevel, FieldCodec, SuperSourceArtOption, VideoSource};

use crate::{Address, SuperSourceBoxId, SuperSourceId};

get_command! {
    pub struct SuperSourceProperties: b"SSrc" {
        address { super_source: SuperSourceId } => Address::SuperSource(super_source),
        fields {
            art_fill_source: VideoSource => FieldCodec::ENUM,
            art_cut_source: VideoSource => FieldCodec::ENUM,
            art_option: SuperSourceArtOption => FieldCodec::ENUM,
            art_pre_multiplied: bool => FieldCodec::BOOL,
            art_clip: f64 => FieldCodec::PERCENT,
            art_gain: f64 => FieldCodec::PERCENT,
            art_invert: bool => FieldCodec::BOOL,
            border_enabled: bool => FieldCodec::BOOL,
            border_bevel: BorderBevel => FieldCodec::ENUM,
            border_outer_width: f64 => FieldCodec::BORDER_WIDTH,
            border_inner_width: f64 => FieldCodec::BORDER_WIDTH,
            border_outer_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_inner_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_bevel_softness: u8 => FieldCodec::BORDER_PERCENT,
            border_bevel_position: u8 => FieldCodec::BORDER_PERCENT,
            border_hue: f64 => FieldCodec::HUE,
            border_saturation: f64 => FieldCodec::PERCENT,
            border_luma: f64 => FieldCodec::PERCENT,
            light_direction: f64 => FieldCodec::LIGHT_DIRECTION,
            light_altitude: u8 => FieldCodec::LIGHT_ALTITUDE,
        }
    }
}

set_command! {
    pub struct SetSuperSourceProperties: b"CSSc" {
        address { super_source: SuperSourceId } => Address::SuperSource(super_source),
        mask SuperSourcePropertiesMask,
        change SuperSourcePropertiesChange,
        fields {
            ART_FILL_SOURCE = 0: ArtFillSource { art_fill_source: VideoSource => FieldCodec::ENUM },
            ART_CUT_SOURCE = 1: ArtCutSource { art_cut_source: VideoSource => FieldCodec::ENUM },
            ART_OPTION = 2: ArtOption { art_option: SuperSourceArtOption => FieldCodec::ENUM },
            ART_PRE_MULTIPLIED = 3: ArtPreMultiplied { art_pre_multiplied: bool => FieldCodec::BOOL },
            ART_CLIP = 4: ArtClip { art_clip: f64 => FieldCodec::PERCENT },
            ART_GAIN = 5: ArtGain { art_gain: f64 => FieldCodec::PERCENT },
            ART_INVERT = 6: ArtInvert { art_invert: bool => FieldCodec::BOOL },
            BORDER_ENABLED = 7: BorderEnabled { border_enabled: bool => FieldCodec::BOOL },
            BORDER_BEVEL = 8: BorderBevel { border_bevel: BorderBevel => FieldCodec::ENUM },
            BORDER_OUTER_WIDTH = 9: BorderOuterWidth { border_outer_width: f64 => FieldCodec::BORDER_WIDTH },
            BORDER_INNER_WIDTH = 10: BorderInnerWidth { border_inner_width: f64 => FieldCodec::BORDER_WIDTH },
            BORDER_OUTER_SOFTNESS = 11: BorderOuterSoftness { border_outer_softness: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_INNER_SOFTNESS = 12: BorderInnerSoftness { border_inner_softness: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_BEVEL_SOFTNESS = 13: BorderBevelSoftness { border_bevel_softness: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_BEVEL_POSITION = 14: BorderBevelPosition { border_bevel_position: u8 => FieldCodec::BORDER_PERCENT },
            BORDER_HUE = 15: BorderHue { border_hue: f64 => FieldCodec::HUE },
            BORDER_SATURATION = 16: BorderSaturation { border_saturation: f64 => FieldCodec::PERCENT },
            BORDER_LUMA = 17: BorderLuma { border_luma: f64 => FieldCodec::PERCENT },
            LIGHT_DIRECTION = 18: LightDirection { light_direction: f64 => FieldCodec::LIGHT_DIRECTION },
            LIGHT_ALTITUDE = 19: LightAltitude { light_altitude: u8 => FieldCodec::LIGHT_ALTITUDE },
        }
    }
}

get_command! {
    pub struct SuperSourceBox: b"SSBP" {
        address { super_source: SuperSourceId, index: SuperSourceBoxId }
            => Address::SuperSourceBox(super_source, index),
        fields {
            enabled: bool => FieldCodec::BOOL,
            source: VideoSource => FieldCodec::ENUM,
            position_x: f64 => FieldCodec::BOX_X,
            position_y: f64 => FieldCodec::BOX_Y,
            size: f64 => FieldCodec::BOX_SIZE,
            cropped: bool => FieldCodec::BOOL,
            crop_top: f64 => FieldCodec::BOX_CROP_V,
            crop_bottom: f64 => FieldCodec::BOX_CROP_V,
            crop_left: f64 => FieldCodec::BOX_CROP_H,
            crop_right: f64 => FieldCodec::BOX_CROP_H,
        }
    }
}

set_command! {
    pub struct SetSuperSourceBox: b"CSBP" {
        address { super_source: SuperSourceId, index: SuperSourceBoxId }
            => Address::SuperSourceBox(super_source, index),
        mask SuperSourceBoxMask,
        change SuperSourceBoxChange,
        fields {
            ENABLED = 0: Enabled { enabled: bool => FieldCodec::BOOL },
            SOURCE = 1: Source { source: VideoSource => FieldCodec::ENUM },
            POSITION_X = 2: PositionX { position_x: f64 => FieldCodec::BOX_X },
            POSITION_Y = 3: PositionY { position_y: f64 => FieldCodec::BOX_Y },
            SIZE = 4: Size { size: f64 => FieldCodec::BOX_SIZE },
            CROPPED = 5: Cropped { cropped: bool => FieldCodec::BOOL },
            CROP_TOP = 6: CropTop { crop_top: f64 => FieldCodec::BOX_CROP_V },
            CROP_BOTTOM = 7: CropBottom { crop_bottom: f64 => FieldCodec::BOX_CROP_V },
            CROP_LEFT = 8: CropLeft { crop_left: f64 => FieldCodec::BOX_CROP_H },
            CROP_RIGHT = 9: CropRight { crop_right: f64 => FieldCodec::BOX_CROP_H },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_size_has_a_floor() {
        let command = SetSuperSourceBox::new(SuperSourceId::new(0), SuperSourceBoxId::new(3))
            .with(SuperSourceBoxChange::Size(0.0))
            .with(SuperSourceBoxChange::PositionX(-100.0));
        assert_eq!(command.size(), Some(&0.07));
        assert_eq!(command.position_x(), Some(&-48.0));
        assert_eq!(
            command.address(),
            Address::SuperSourceBox(SuperSourceId::new(0), SuperSourceBoxId::new(3))
        );
    }
}
