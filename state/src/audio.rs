//! Audio mixer nodes.

use std::collections::BTreeMap;

use compare::compare_record;
use mapping::{AudioMixOption, AudioSource, AudioSourceType, ExternalPortType};

/// Master, monitor and every channel the device reported.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioState {
    pub master: AudioMasterState,
    pub monitor: AudioMonitorState,
    pub inputs: BTreeMap<AudioSource, AudioChannel>,
}

/// Gains are in decibels.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioMasterState {
    pub gain: f64,
    pub balance: f64,
    pub follow_fade_to_black: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioMonitorState {
    pub enabled: bool,
    pub gain: f64,
    pub mute: bool,
    pub solo: bool,
    pub solo_source: AudioSource,
    pub dim: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioChannel {
    pub source_type: AudioSourceType,
    pub port_type: ExternalPortType,
    pub mix_option: AudioMixOption,
    pub gain: f64,
    pub balance: f64,
}

compare_record!(AudioState {
    master: record,
    monitor: record,
    inputs: map,
});

compare_record!(AudioMasterState {
    gain: within(0.01),
    balance: within(0.01),
    follow_fade_to_black: exact,
});

compare_record!(AudioMonitorState {
    enabled: exact,
    gain: within(0.01),
    mute: exact,
    solo: exact,
    solo_source: exact,
    dim: exact,
});

compare_record!(AudioChannel {
    source_type: exact,
    port_type: exact,
    mix_option: exact,
    gain: within(0.01),
    balance: within(0.01),
});
