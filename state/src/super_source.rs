//! Super-source nodes.

use compare::compare_record;
use mapping::{BorderBevel, SuperSourceArtOption, VideoSource};

/// One super-source: art, border, lighting and its boxes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperSourceState {
    pub art_fill_source: VideoSource,
    pub art_cut_source: VideoSource,
    pub art_option: SuperSourceArtOption,
    pub art_pre_multiplied: bool,
    pub art_clip: f64,
    pub art_gain: f64,
    pub art_invert: bool,
    pub border_enabled: bool,
    pub border_bevel: BorderBevel,
    pub border_outer_width: f64,
    pub border_inner_width: f64,
    pub border_outer_softness: u8,
    pub border_inner_softness: u8,
    pub border_bevel_softness: u8,
    pub border_bevel_position: u8,
    pub border_hue: f64,
    pub border_saturation: f64,
    pub border_luma: f64,
    pub light_direction: f64,
    pub light_altitude: u8,
    pub boxes: Vec<SuperSourceBoxState>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperSourceBoxState {
    pub enabled: bool,
    pub source: VideoSource,
    pub position_x: f64,
    pub position_y: f64,
    pub size: f64,
    pub cropped: bool,
    pub crop_top: f64,
    pub crop_bottom: f64,
    pub crop_left: f64,
    pub crop_right: f64,
}

compare_record!(SuperSourceState {
    art_fill_source: exact,
    art_cut_source: exact,
    art_option: exact,
    art_pre_multiplied: exact,
    art_clip: within(0.1),
    art_gain: within(0.1),
    art_invert: exact,
    border_enabled: exact,
    border_bevel: exact,
    border_outer_width: within(0.01),
    border_inner_width: within(0.01),
    border_outer_softness: integer,
    border_inner_softness: integer,
    border_bevel_softness: integer,
    border_bevel_position: integer,
    border_hue: angle(360.0, 0.1),
    border_saturation: within(0.1),
    border_luma: within(0.1),
    light_direction: angle(360.0, 0.1),
    light_altitude: integer,
    boxes: sequence,
});

compare_record!(SuperSourceBoxState {
    enabled: exact,
    source: exact,
    position_x: within(0.01),
    position_y: within(0.01),
    size: within(0.001),
    cropped: exact,
    crop_top: within(0.001),
    crop_bottom: within(0.001),
    crop_left: within(0.001),
    crop_right: within(0.001),
});
