//! Downstream keyer commands.

use mapping::{FieldCodec, VideoSource};

use crate::{Address, DownstreamKeyerId};

get_command! {
    pub struct DownstreamKeyerSources: b"DskB" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        fields {
            fill_source: VideoSource => FieldCodec::ENUM,
            cut_source: VideoSource => FieldCodec::ENUM,
        }
    }
}

plain_set_command! {
    pub struct SetDownstreamKeyerFill: b"CDsF" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        field { fill_source: VideoSource => FieldCodec::ENUM },
    }
}

plain_set_command! {
    pub struct SetDownstreamKeyerCut: b"CDsC" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        field { cut_source: VideoSource => FieldCodec::ENUM },
    }
}

get_command! {
    pub struct DownstreamKeyerProperties: b"DskP" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        fields {
            /// Keyer joins the next background transition.
            tie: bool => FieldCodec::BOOL,
            rate: u16 => FieldCodec::RATE,
            pre_multiplied: bool => FieldCodec::BOOL,
            clip: f64 => FieldCodec::PERCENT,
            gain: f64 => FieldCodec::PERCENT,
            invert: bool => FieldCodec::BOOL,
            mask_enabled: bool => FieldCodec::BOOL,
            mask_top: f64 => FieldCodec::MASK_VERTICAL,
            mask_bottom: f64 => FieldCodec::MASK_VERTICAL,
            mask_left: f64 => FieldCodec::MASK_HORIZONTAL,
            mask_right: f64 => FieldCodec::MASK_HORIZONTAL,
        }
    }
}

plain_set_command! {
    pub struct SetDownstreamKeyerTie: b"CDsT" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        field { tie: bool => FieldCodec::BOOL },
    }
}

plain_set_command! {
    pub struct SetDownstreamKeyerRate: b"CDsR" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        field { rate: u16 => FieldCodec::RATE },
    }
}

set_command! {
    pub struct SetDownstreamKeyerGeneral: b"CDsG" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        mask DownstreamKeyerGeneralMask,
        change DownstreamKeyerGeneralChange,
        fields {
            PRE_MULTIPLIED = 0: PreMultiplied { pre_multiplied: bool => FieldCodec::BOOL },
            CLIP = 1: Clip { clip: f64 => FieldCodec::PERCENT },
            GAIN = 2: Gain { gain: f64 => FieldCodec::PERCENT },
            INVERT = 3: Invert { invert: bool => FieldCodec::BOOL },
        }
    }
}

set_command! {
    pub struct SetDownstreamKeyerMask: b"CDsM" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        mask DownstreamKeyerMaskMask,
        change DownstreamKeyerMaskChange,
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
    pub struct DownstreamKeyerState: b"DskS" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        fields {
            on_air: bool => FieldCodec::BOOL,
            in_transition: bool => FieldCodec::BOOL,
            is_auto_transitioning: bool => FieldCodec::BOOL,
            remaining_frames: u16 => FieldCodec::FRAMES,
        }
    }
}

plain_set_command! {
    pub struct SetDownstreamKeyerOnAir: b"CDsL" {
        address { keyer: DownstreamKeyerId } => Address::DownstreamKeyer(keyer),
        field { on_air: bool => FieldCodec::BOOL },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_edges_clamp() {
        let command = SetDownstreamKeyerMask::new(DownstreamKeyerId::new(1))
            .with(DownstreamKeyerMaskChange::Top(12.0))
            .with(DownstreamKeyerMaskChange::Left(-20.0));
        assert_eq!(command.mask_top(), Some(&9.0));
        assert_eq!(command.mask_left(), Some(&-16.0));
        assert_eq!(command.mask_bottom(), None);
    }

    #[test]
    fn address_is_the_keyer() {
        let command = SetDownstreamKeyerOnAir::new(DownstreamKeyerId::new(1), true);
        assert_eq!(command.address(), Address::DownstreamKeyer(DownstreamKeyerId::new(1)));
        assert!(*command.on_air());
    }
}
