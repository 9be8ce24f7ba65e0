//! Mix-effect block nodes: sources, transition settings and fade to black.

use compare::compare_record;
use mapping::{DveEffect, Pattern, StingerSource, TransitionLayer, TransitionStyle, VideoSource};

use crate::keyer::KeyerState;

/// One mix-effect block.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixEffectState {
    pub program_input: VideoSource,
    pub preview_input: VideoSource,
    pub transition: TransitionState,
    pub fade_to_black: FadeToBlack,
    pub keyers: Vec<KeyerState>,
}

impl MixEffectState {
    /// Creates a block with `keyers` default keyers and the optional
    /// transition settings the topology grants it.
    #[must_use]
    pub fn with_shape(keyers: usize, has_stinger: bool, has_dve: bool) -> Self {
        Self {
            transition: TransitionState {
                stinger: has_stinger.then(StingerSettings::default),
                dve: has_dve.then(DveTransitionSettings::default),
                ..TransitionState::default()
            },
            keyers: vec![KeyerState::default(); keyers],
            ..Self::default()
        }
    }
}

/// Transition selection, position and per-style settings.
///
/// Stinger and DVE settings exist only on blocks the topology equips with them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionState {
    pub style: TransitionStyle,
    /// Layers in the running transition. One flag word on the wire, kept
    /// normalized, so it is compared as a single value.
    pub selection: Vec<TransitionLayer>,
    pub next_style: TransitionStyle,
    /// Layers the next transition takes, compared like `selection`.
    pub next_selection: Vec<TransitionLayer>,
    pub preview_enabled: bool,
    pub position: TransitionPositionState,
    pub mix: MixSettings,
    pub dip: DipSettings,
    pub wipe: WipeSettings,
    pub stinger: Option<StingerSettings>,
    pub dve: Option<DveTransitionSettings>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPositionState {
    pub in_transition: bool,
    pub remaining_frames: u16,
    /// Handle position in `0.0..=1.0`.
    pub handle_position: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixSettings {
    pub rate: u16,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DipSettings {
    pub rate: u16,
    pub input: VideoSource,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WipeSettings {
    pub rate: u16,
    pub pattern: Pattern,
    pub border_width: f64,
    pub border_input: VideoSource,
    pub symmetry: f64,
    pub border_softness: f64,
    pub x_position: f64,
    pub y_position: f64,
    pub reverse_direction: bool,
    pub flip_flop: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StingerSettings {
    pub source: StingerSource,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert: bool,
    pub preroll: u16,
    pub clip_duration: u16,
    pub trigger_point: u16,
    pub mix_rate: u16,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DveTransitionSettings {
    pub rate: u16,
    pub logo_rate: u16,
    pub style: DveEffect,
    pub fill_source: VideoSource,
    pub key_source: VideoSource,
    pub enable_key: bool,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert_key: bool,
    pub reverse: bool,
    pub flip_flop: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FadeToBlack {
    pub rate: u16,
    pub fully_black: bool,
    pub in_transition: bool,
    pub remaining_frames: u16,
}

compare_record!(MixEffectState {
    program_input: exact,
    preview_input: exact,
    transition: record,
    fade_to_black: record,
    keyers: sequence,
});

compare_record!(TransitionState {
    style: exact,
    selection: exact,
    next_style: exact,
    next_selection: exact,
    preview_enabled: exact,
    position: record,
    mix: record,
    dip: record,
    wipe: record,
    stinger: optional,
    dve: optional,
});

compare_record!(TransitionPositionState {
    in_transition: exact,
    remaining_frames: slack(1),
    handle_position: within(0.001),
});

compare_record!(MixSettings { rate: integer });

compare_record!(DipSettings {
    rate: integer,
    input: exact,
});

compare_record!(WipeSettings {
    rate: integer,
    pattern: exact,
    border_width: within(0.01),
    border_input: exact,
    symmetry: within(0.01),
    border_softness: within(0.01),
    x_position: within(0.001),
    y_position: within(0.001),
    reverse_direction: exact,
    flip_flop: exact,
});

compare_record!(StingerSettings {
    source: exact,
    pre_multiplied: exact,
    clip: within(0.1),
    gain: within(0.1),
    invert: exact,
    preroll: integer,
    clip_duration: integer,
    trigger_point: integer,
    mix_rate: integer,
});

compare_record!(DveTransitionSettings {
    rate: integer,
    logo_rate: integer,
    style: exact,
    fill_source: exact,
    key_source: exact,
    enable_key: exact,
    pre_multiplied: exact,
    clip: within(0.1),
    gain: within(0.1),
    invert_key: exact,
    reverse: exact,
    flip_flop: exact,
});

compare_record!(FadeToBlack {
    rate: integer,
    fully_black: exact,
    in_transition: exact,
    remaining_frames: slack(1),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_differs_as_one_flag_word() {
        let expected = TransitionState {
            next_selection: vec![TransitionLayer::Background, TransitionLayer::Key1],
            ..TransitionState::default()
        };
        let actual = TransitionState {
            next_selection: vec![TransitionLayer::Key1],
            ..TransitionState::default()
        };
        let found = compare::compare(&[], &expected, &actual);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "next_selection");
        assert_eq!(found[0].kind, compare::DiscrepancyKind::Value);
    }

    #[test]
    fn shape_controls_optional_transitions() {
        let block = MixEffectState::with_shape(2, true, false);
        assert_eq!(block.keyers.len(), 2);
        assert!(block.transition.stinger.is_some());
        assert!(block.transition.dve.is_none());
    }

    #[test]
    fn remaining_frames_tolerate_one_frame() {
        let expected = FadeToBlack {
            remaining_frames: 10,
            ..FadeToBlack::default()
        };
        let actual = FadeToBlack {
            remaining_frames: 11,
            ..FadeToBlack::default()
        };
        assert!(compare::compare(&[], &expected, &actual).is_empty());
    }
}
