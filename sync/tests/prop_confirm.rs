//! A request's expected tree agrees with what the device reports after
//! decoding the request from the wire.

use command::audio::{AudioMaster, AudioMasterChange, SetAudioMaster};
use command::keyer::{ChromaKey, ChromaKeyChange, SetChromaKey};
use command::{GetCommand, KeyerId, MixEffectId, SetCommand, Topology};
use proptest::prelude::*;
use sync::{Engine, EngineConfig};

fn connected() -> Engine {
    let mut engine = Engine::new(EngineConfig::default());
    let topology = Topology {
        mix_effect_keyers: vec![2],
        ..Topology::default()
    };
    engine.ingest(&topology.into()).unwrap();
    engine
}

/// Decodes the request the way the device would and reports the result.
fn device_report(sent: &SetCommand) -> GetCommand {
    let payload = sent.to_payload().unwrap();
    match sent {
        SetCommand::SetAudioMaster(_) => {
            let received = SetAudioMaster::from_payload(&payload).unwrap();
            AudioMaster {
                gain: *received.gain().unwrap(),
                ..AudioMaster::default()
            }
            .into()
        }
        SetCommand::SetChromaKey(set) => {
            let received = SetChromaKey::from_payload(set.mix_effect, set.keyer, &payload).unwrap();
            ChromaKey {
                mix_effect: set.mix_effect,
                keyer: set.keyer,
                hue: *received.hue().unwrap(),
                ..ChromaKey::default()
            }
            .into()
        }
        other => panic!("no device model for {}", other.name()),
    }
}

fn confirm(request: impl Into<SetCommand>) -> Vec<compare::Discrepancy> {
    let mut engine = connected();
    let sent = engine.request(request).unwrap();
    let expected = engine.expected_after(&sent).unwrap();
    engine.ingest(&device_report(&sent)).unwrap();
    compare::compare(&[], &expected, engine.state())
}

#[test]
fn lowest_gain_matches_confirmation() {
    let found = confirm(SetAudioMaster::new().with(AudioMasterChange::Gain(-60.0)));
    assert!(found.is_empty(), "{found:?}");
}

#[test]
fn hue_below_zero_matches_confirmation() {
    let set = SetChromaKey::new(MixEffectId::new(0), KeyerId::new(1))
        .with(ChromaKeyChange::Hue(-0.01));
    assert!((set.hue().unwrap() - 359.99).abs() < 1e-9);
    let found = confirm(set);
    assert!(found.is_empty(), "{found:?}");
}

proptest! {
    #[test]
    fn gain_prediction_matches_confirmation(gain in -80.0f64..=12.0) {
        let found = confirm(SetAudioMaster::new().with(AudioMasterChange::Gain(gain)));
        prop_assert!(found.is_empty(), "{:?}", found);
    }

    #[test]
    fn hue_prediction_matches_confirmation(hue in -720.0f64..720.0) {
        let set = SetChromaKey::new(MixEffectId::new(0), KeyerId::new(1))
            .with(ChromaKeyChange::Hue(hue));
        let found = confirm(set);
        prop_assert!(found.is_empty(), "{:?}", found);
    }
}
