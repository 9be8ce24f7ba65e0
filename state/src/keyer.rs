//! Upstream keyer nodes.

use compare::compare_record;
use mapping::{BorderBevel, FlyKeyLocation, KeyType, Pattern, VideoSource};

/// One upstream keyer with the settings of every key type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyerState {
    pub on_air: bool,
    pub properties: KeyerProperties,
    pub luma: LumaSettings,
    pub chroma: ChromaSettings,
    pub pattern: PatternSettings,
    pub dve: DveKeySettings,
    pub fly: FlyState,
}

impl Default for KeyerState {
    fn default() -> Self {
        Self {
            on_air: false,
            properties: KeyerProperties::default(),
            luma: LumaSettings::default(),
            chroma: ChromaSettings::default(),
            pattern: PatternSettings::default(),
            dve: DveKeySettings::default(),
            fly: FlyState {
                key_frames: vec![FlyKeyFrameState::default(); 2],
                ..FlyState::default()
            },
        }
    }
}

/// Crop rectangle shared by keyers, DVE keys and downstream keyers.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskState {
    pub enabled: bool,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyerProperties {
    pub key_type: KeyType,
    pub can_fly_key: bool,
    pub fly_enabled: bool,
    pub fill_source: VideoSource,
    pub cut_source: VideoSource,
    pub mask: MaskState,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LumaSettings {
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromaSettings {
    /// Degrees in `[0, 360)`.
    pub hue: f64,
    pub gain: f64,
    pub y_suppress: f64,
    pub lift: f64,
    pub narrow: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSettings {
    pub pattern: Pattern,
    pub size: f64,
    pub symmetry: f64,
    pub softness: f64,
    pub x_position: f64,
    pub y_position: f64,
    pub invert: bool,
}

/// DVE key geometry, border, lighting and mask.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DveKeySettings {
    pub size_x: f64,
    pub size_y: f64,
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub border_enabled: bool,
    pub shadow_enabled: bool,
    pub border_bevel: BorderBevel,
    pub border_outer_width: f64,
    pub border_inner_width: f64,
    pub border_outer_softness: u8,
    pub border_inner_softness: u8,
    pub border_bevel_softness: u8,
    pub border_bevel_position: u8,
    pub border_opacity: u8,
    pub border_hue: f64,
    pub border_saturation: f64,
    pub border_luma: f64,
    pub light_direction: f64,
    pub light_altitude: u8,
    pub mask: MaskState,
    pub rate: u16,
}

/// Fly-key run state and the stored A and B frames.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlyState {
    pub a_set: bool,
    pub b_set: bool,
    pub at_key_frame: Vec<FlyKeyLocation>,
    pub run_to_infinite_index: u8,
    /// Frame A at index 0, frame B at index 1.
    pub key_frames: Vec<FlyKeyFrameState>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlyKeyFrameState {
    pub size_x: f64,
    pub size_y: f64,
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub border_outer_width: f64,
    pub border_inner_width: f64,
    pub border_outer_softness: u8,
    pub border_inner_softness: u8,
    pub border_bevel_softness: u8,
    pub border_bevel_position: u8,
    pub border_opacity: u8,
    pub border_hue: f64,
    pub border_saturation: f64,
    pub border_luma: f64,
    pub light_direction: f64,
    pub light_altitude: u8,
    pub mask_top: f64,
    pub mask_bottom: f64,
    pub mask_left: f64,
    pub mask_right: f64,
}

compare_record!(KeyerState {
    on_air: exact,
    properties: record,
    luma: record,
    chroma: record,
    pattern: record,
    dve: record,
    fly: record,
});

compare_record!(MaskState {
    enabled: exact,
    top: within(0.001),
    bottom: within(0.001),
    left: within(0.001),
    right: within(0.001),
});

compare_record!(KeyerProperties {
    key_type: exact,
    can_fly_key: exact,
    fly_enabled: exact,
    fill_source: exact,
    cut_source: exact,
    mask: record,
});

compare_record!(LumaSettings {
    pre_multiplied: exact,
    clip: within(0.1),
    gain: within(0.1),
    invert: exact,
});

compare_record!(ChromaSettings {
    hue: angle(360.0, 0.1),
    gain: within(0.1),
    y_suppress: within(0.1),
    lift: within(0.1),
    narrow: exact,
});

compare_record!(PatternSettings {
    pattern: exact,
    size: within(0.01),
    symmetry: within(0.01),
    softness: within(0.01),
    x_position: within(0.001),
    y_position: within(0.001),
    invert: exact,
});

compare_record!(DveKeySettings {
    size_x: within(0.001),
    size_y: within(0.001),
    position_x: within(0.001),
    position_y: within(0.001),
    rotation: within(0.1),
    border_enabled: exact,
    shadow_enabled: exact,
    border_bevel: exact,
    border_outer_width: within(0.01),
    border_inner_width: within(0.01),
    border_outer_softness: integer,
    border_inner_softness: integer,
    border_bevel_softness: integer,
    border_bevel_position: integer,
    border_opacity: integer,
    border_hue: angle(360.0, 0.1),
    border_saturation: within(0.1),
    border_luma: within(0.1),
    light_direction: angle(360.0, 0.1),
    light_altitude: integer,
    mask: record,
    rate: integer,
});

compare_record!(FlyState {
    a_set: exact,
    b_set: exact,
    at_key_frame: exact,
    run_to_infinite_index: integer,
    key_frames: sequence,
});

compare_record!(FlyKeyFrameState {
    size_x: within(0.001),
    size_y: within(0.001),
    position_x: within(0.001),
    position_y: within(0.001),
    rotation: within(0.1),
    border_outer_width: within(0.01),
    border_inner_width: within(0.01),
    border_outer_softness: integer,
    border_inner_softness: integer,
    border_bevel_softness: integer,
    border_bevel_position: integer,
    border_opacity: integer,
    border_hue: angle(360.0, 0.1),
    border_saturation: within(0.1),
    border_luma: within(0.1),
    light_direction: angle(360.0, 0.1),
    light_altitude: integer,
    mask_top: within(0.001),
    mask_bottom: within(0.001),
    mask_left: within(0.001),
    mask_right: within(0.001),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keyer_stores_both_frames() {
        assert_eq!(KeyerState::default().fly.key_frames.len(), 2);
    }

    #[test]
    fn hue_within_tolerance() {
        let expected = ChromaSettings {
            hue: 123.4,
            ..ChromaSettings::default()
        };
        let close = ChromaSettings {
            hue: 123.45,
            ..ChromaSettings::default()
        };
        let far = ChromaSettings {
            hue: 124.0,
            ..ChromaSettings::default()
        };
        assert!(compare::compare(&[], &expected, &close).is_empty());
        let found = compare::compare(&[], &expected, &far);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "hue");
    }

    #[test]
    fn hue_matches_across_the_wrap() {
        let expected = ChromaSettings {
            hue: 359.99,
            ..ChromaSettings::default()
        };
        let confirmed = ChromaSettings::default();
        assert!(compare::compare(&[], &expected, &confirmed).is_empty());

        let expected = DveKeySettings {
            light_direction: 359.95,
            ..DveKeySettings::default()
        };
        let confirmed = DveKeySettings {
            light_direction: 0.02,
            ..DveKeySettings::default()
        };
        assert!(compare::compare(&[], &expected, &confirmed).is_empty());
    }
}
