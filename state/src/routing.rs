//! Auxiliary outputs and color generators.

use compare::compare_record;
use mapping::VideoSource;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuxiliaryState {
    pub source: VideoSource,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGeneratorState {
    pub hue: f64,
    pub saturation: f64,
    pub luma: f64,
}

compare_record!(AuxiliaryState { source: exact });

compare_record!(ColorGeneratorState {
    hue: angle(360.0, 0.1),
    saturation: within(0.1),
    luma: within(0.1),
});
