//! Auxiliary outputs and color generators.

use mapping::{FieldCodec, VideoSource};

use crate::{Address, AuxiliaryId, ColorGeneratorId};

get_command! {
    pub struct AuxiliarySource: b"AuxS" {
        address { auxiliary: AuxiliaryId } => Address::Auxiliary(auxiliary),
        fields {
            source: VideoSource => FieldCodec::ENUM,
        }
    }
}

plain_set_command! {
    pub struct SetAuxiliarySource: b"CAuS" {
        address { auxiliary: AuxiliaryId } => Address::Auxiliary(auxiliary),
        field { source: VideoSource => FieldCodec::ENUM },
    }
}

get_command! {
    pub struct ColorGenerator: b"ColV" {
        address { generator: ColorGeneratorId } => Address::ColorGenerator(generator),
        fields {
            hue: f64 => FieldCodec::HUE,
            saturation: f64 => FieldCodec::PERCENT,
            luma: f64 => FieldCodec::PERCENT,
        }
    }
}

set_command! {
    pub struct SetColorGenerator: b"CClV" {
        address { generator: ColorGeneratorId } => Address::ColorGenerator(generator),
        mask ColorGeneratorMask,
        change ColorGeneratorChange,
        fields {
            HUE = 0: Hue { hue: f64 => FieldCodec::HUE },
            SATURATION = 1: Saturation { saturation: f64 => FieldCodec::PERCENT },
            LUMA = 2: Luma { luma: f64 => FieldCodec::PERCENT },
        }
    }
}
