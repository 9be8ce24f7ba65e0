//! Device identity and device-wide settings.

use std::collections::BTreeMap;

use command::Topology;
use compare::compare_record;
use mapping::{
    ExternalPortType, InternalPortType, MeAvailability, SourceAvailability, VideoMode, VideoSource,
};

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoState {
    pub version: ProtocolVersion,
    pub product_name: String,
    /// `None` until the device announces its topology.
    pub topology: Option<Topology>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolVersion {
    pub major: u16,
    pub minor: u16,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsState {
    pub video_mode: VideoMode,
    /// Keyed by source; entries appear as the device reports them.
    pub inputs: BTreeMap<VideoSource, InputState>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    pub long_name: String,
    pub short_name: String,
    pub are_names_default: bool,
    pub available_external_ports: Vec<ExternalPortType>,
    pub external_port: ExternalPortType,
    pub internal_port: InternalPortType,
    pub source_availability: Vec<SourceAvailability>,
    pub me_availability: Vec<MeAvailability>,
}

compare_record!(InfoState {
    version: record,
    product_name: exact,
    topology: exact,
});

compare_record!(ProtocolVersion {
    major: integer,
    minor: integer,
});

compare_record!(SettingsState {
    video_mode: exact,
    inputs: map,
});

compare_record!(InputState {
    long_name: exact,
    short_name: exact,
    are_names_default: exact,
    available_external_ports: exact,
    external_port: exact,
    internal_port: exact,
    source_availability: exact,
    me_availability: exact,
});
