use mapping::{
    AudioSource, DveEffect, ExternalPortType, FlyKeyLocation, InternalPortType, MeAvailability,
    MixEffectOutput, Pattern, SourceAvailability, TransitionLayer, TransitionStyle, VideoMode,
    VideoSource, WireEnum, WireFlags,
};

fn assert_total<T: WireEnum>() {
    let table = T::table();
    assert!(!table.is_empty(), "{} is empty", T::NAME);
    for &(value, raw) in table.entries() {
        assert_eq!(T::map(value), raw);
        assert_eq!(T::unmap(raw).unwrap(), value);
    }
}

fn assert_single_bits<T: WireFlags>() {
    for &(value, raw) in T::table().entries() {
        assert_eq!(raw.count_ones(), 1, "{value:?} in {} is not a single bit", T::NAME);
    }
    let all: Vec<T> = T::table().entries().iter().map(|(value, _)| *value).collect();
    let raw = T::flags_from(&all);
    assert_eq!(T::components_of(raw).unwrap(), all);
}

#[test]
fn every_table_is_total() {
    assert_total::<TransitionStyle>();
    assert_total::<TransitionLayer>();
    assert_total::<Pattern>();
    assert_total::<DveEffect>();
    assert_total::<InternalPortType>();
    assert_total::<VideoMode>();
    assert_total::<VideoSource>();
    assert_total::<AudioSource>();
}

#[test]
fn flag_tables_are_single_bits() {
    assert_single_bits::<TransitionLayer>();
    assert_single_bits::<ExternalPortType>();
    assert_single_bits::<SourceAvailability>();
    assert_single_bits::<MeAvailability>();
    assert_single_bits::<FlyKeyLocation>();
}

#[test]
fn empty_flag_word_has_no_components() {
    assert!(TransitionLayer::components_of(0).unwrap().is_empty());
    assert_eq!(TransitionLayer::flags_from(&[]), 0);
}

#[test]
fn me_outputs_are_video_sources() {
    let outputs = VideoSource::table()
        .entries()
        .iter()
        .filter_map(|(source, _)| source.mix_effect_output())
        .collect::<Vec<_>>();
    assert_eq!(outputs.len(), 8);
    assert!(outputs.contains(&(3, MixEffectOutput::Preview)));
}
