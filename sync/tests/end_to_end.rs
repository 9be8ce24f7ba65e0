//! Full ingest, request and confirm cycles against a simulated device.

use command::keyer::{ChromaKey, ChromaKeyChange, ChromaKeyMask, SetChromaKey};
use command::mix_effect::{
    DveTransition, DveTransitionChange, PreviewInput, ProgramInput, SetDveTransition,
    WipeTransition,
};
use command::{GetCommand, KeyerId, MixEffectId, SetCommand, Topology};
use mapping::VideoSource;
use sync::{Engine, EngineConfig, Ingested};

fn topology() -> GetCommand {
    Topology {
        mix_effect_keyers: vec![2, 2],
        downstream_keyers: 2,
        auxiliaries: 4,
        color_generators: 2,
        stingers: 1,
        dves: 1,
        super_sources: 1,
        super_source_boxes: 4,
        media_players: 2,
        media_pool_stills: 20,
        media_pool_clips: 2,
    }
    .into()
}

fn chroma(me: u8, key: u8, hue: f64) -> GetCommand {
    ChromaKey {
        mix_effect: MixEffectId::new(me),
        keyer: KeyerId::new(key),
        hue,
        ..ChromaKey::default()
    }
    .into()
}

#[test]
fn request_wraps_hue_and_claims_only_hue() {
    let mut engine = Engine::new(EngineConfig::default());
    engine.ingest(&topology()).unwrap();
    engine.ingest(&chroma(1, 1, 20.0)).unwrap();
    engine.ingest(&chroma(1, 1, 123.4)).unwrap();
    assert_eq!(engine.state().mix_effects[1].keyers[1].chroma.hue, 123.4);

    let set = SetChromaKey::new(MixEffectId::new(1), KeyerId::new(1))
        .with(ChromaKeyChange::Hue(360.1));
    let SetCommand::SetChromaKey(sent) = engine.request(set).unwrap() else {
        panic!("request changed command type");
    };
    assert_eq!(sent.mask(), ChromaKeyMask::HUE);
    assert!((sent.hue().unwrap() - 0.1).abs() < 1e-9);
    assert_eq!(sent.gain(), None);
}

#[test]
fn prediction_matches_device_confirmation() {
    let mut engine = Engine::new(EngineConfig::default());
    engine.ingest(&topology()).unwrap();
    engine.ingest(&chroma(1, 1, 123.4)).unwrap();

    let set: SetCommand = SetChromaKey::new(MixEffectId::new(1), KeyerId::new(1))
        .with(ChromaKeyChange::Hue(360.1))
        .into();
    let expected = engine.expected_after(&set).unwrap();

    // The device answers with the full node.
    engine.ingest(&chroma(1, 1, 0.1)).unwrap();
    let found = compare::compare(&[], &expected, engine.state());
    assert!(found.is_empty(), "{found:?}");
}

#[test]
fn dve_request_predicts_coupled_wipe() {
    let mut engine = Engine::new(EngineConfig::default());
    engine.ingest(&topology()).unwrap();

    let set: SetCommand = SetDveTransition::new(MixEffectId::new(0))
        .with(DveTransitionChange::FlipFlop(true))
        .into();
    let expected = engine.expected_after(&set).unwrap();

    engine
        .ingest(
            &DveTransition {
                flip_flop: true,
                ..DveTransition::default()
            }
            .into(),
        )
        .unwrap();
    engine
        .ingest(
            &WipeTransition {
                flip_flop: true,
                ..WipeTransition::default()
            }
            .into(),
        )
        .unwrap();
    assert!(compare::compare(&[], &expected, engine.state()).is_empty());
}

#[test]
fn warnings_are_collected_and_later_reports_apply() {
    let mut engine = Engine::new(EngineConfig::default());
    let reports = vec![
        topology(),
        chroma(3, 0, 10.0),
        ProgramInput {
            mix_effect: MixEffectId::new(0),
            source: VideoSource::Input2,
        }
        .into(),
        PreviewInput {
            mix_effect: MixEffectId::new(0),
            source: VideoSource::Input3,
        }
        .into(),
    ];
    let warnings = engine.ingest_all(&reports).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].command.to_string(), "KeCk");
    assert_eq!(engine.state().mix_effects[0].program_input, VideoSource::Input2);

    let tally = engine.tally();
    assert!(tally[&VideoSource::Input2].program);
    assert!(tally[&VideoSource::Input3].preview);
}

#[test]
fn tally_can_be_left_untracked() {
    let mut engine = Engine::new(EngineConfig {
        track_tally: false,
        ..EngineConfig::default()
    });
    engine.ingest(&topology()).unwrap();
    let outcome = engine
        .ingest(
            &ProgramInput {
                mix_effect: MixEffectId::new(0),
                source: VideoSource::Input2,
            }
            .into(),
        )
        .unwrap();
    assert_eq!(outcome, Ingested::Applied);
    assert!(engine.tally().is_empty());
}

#[test]
fn snapshot_is_independent() {
    let mut engine = Engine::new(EngineConfig::default());
    engine.ingest(&topology()).unwrap();
    let snapshot = engine.snapshot();
    engine.ingest(&chroma(0, 0, 45.0)).unwrap();
    assert_eq!(snapshot.mix_effects[0].keyers[0].chroma.hue, 0.0);
    assert_ne!(&snapshot, engine.state());
}
