//! Downstream keyer nodes.

use compare::compare_record;
use mapping::VideoSource;

use crate::keyer::MaskState;

/// One downstream keyer: sources, key settings and on-air state.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DownstreamKeyerState {
    pub fill_source: VideoSource,
    pub cut_source: VideoSource,
    /// Keyer follows the next main transition.
    pub tie: bool,
    pub rate: u16,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert: bool,
    pub mask: MaskState,
    pub on_air: bool,
    pub in_transition: bool,
    pub is_auto_transitioning: bool,
    pub remaining_frames: u16,
}

compare_record!(DownstreamKeyerState {
    fill_source: exact,
    cut_source: exact,
    tie: exact,
    rate: integer,
    pre_multiplied: exact,
    clip: within(0.1),
    gain: within(0.1),
    invert: exact,
    mask: record,
    on_air: exact,
    in_transition: exact,
    is_auto_transitioning: exact,
    remaining_frames: slack(1),
});
