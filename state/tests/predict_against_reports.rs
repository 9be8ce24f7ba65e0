//! A prediction should match the tree the device's answering reports build.

use command::keyer::{ChromaKey, ChromaKeyChange, PatternKey, PatternKeyChange, SetChromaKey, SetPatternKey};
use command::{GetCommand, KeyerId, MixEffectId, SetCommand, Topology};
use mapping::Pattern;
use state::{apply, predict, MixerState, StateLimits};

fn connected() -> MixerState {
    let mut state = MixerState::new();
    let topology = Topology {
        mix_effect_keyers: vec![2, 2],
        downstream_keyers: 2,
        auxiliaries: 2,
        stingers: 1,
        dves: 1,
        ..Topology::default()
    };
    apply(&mut state, &topology.into(), &StateLimits::default()).unwrap();
    state
}

fn me1_key1() -> (MixEffectId, KeyerId) {
    (MixEffectId::new(1), KeyerId::new(1))
}

#[test]
fn circle_iris_prediction_matches_device_report() {
    let (me, key) = me1_key1();
    let mut expected = connected();
    let request: SetCommand = SetPatternKey::new(me, key)
        .with(PatternKeyChange::Pattern(Pattern::CircleIris))
        .into();
    predict(&mut expected, &request).unwrap();

    let mut actual = connected();
    let report: GetCommand = PatternKey {
        mix_effect: me,
        keyer: key,
        pattern: Pattern::CircleIris,
        symmetry: 65.5,
        x_position: 0.5,
        y_position: 0.5,
        ..PatternKey::default()
    }
    .into();
    apply(&mut actual, &report, &StateLimits::default()).unwrap();

    let found = compare::compare(&[], &expected, &actual);
    assert!(found.is_empty(), "{found:?}");
}

#[test]
fn off_by_tolerance_is_reported_with_path() {
    let (me, key) = me1_key1();
    let mut expected = connected();
    let request: SetCommand = SetChromaKey::new(me, key)
        .with(ChromaKeyChange::Hue(123.4))
        .into();
    predict(&mut expected, &request).unwrap();

    let mut actual = connected();
    let report: GetCommand = ChromaKey {
        mix_effect: me,
        keyer: key,
        hue: 123.0,
        ..ChromaKey::default()
    }
    .into();
    apply(&mut actual, &report, &StateLimits::default()).unwrap();

    let found = compare::compare(&[], &expected, &actual);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path, "mix_effects.1.keyers.1.chroma.hue");

    let ignored = compare::compare(&["mix_effects.1.keyers.1"], &expected, &actual);
    assert!(ignored.is_empty());
}

#[test]
fn reannounced_topology_keeps_reports() {
    let (me, key) = me1_key1();
    let mut state = connected();
    let report: GetCommand = ChromaKey {
        mix_effect: me,
        keyer: key,
        hue: 200.0,
        ..ChromaKey::default()
    }
    .into();
    apply(&mut state, &report, &StateLimits::default()).unwrap();
    let before = state.clone();

    let topology = state.info.topology.clone().unwrap();
    apply(&mut state, &topology.into(), &StateLimits::default()).unwrap();
    assert_eq!(state, before);
}
