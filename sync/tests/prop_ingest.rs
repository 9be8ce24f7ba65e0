//! Ingest never fails on addresses the device should not have sent.

use command::keyer::KeyerOnAir;
use command::mix_effect::ProgramInput;
use command::{GetCommand, KeyerId, MixEffectId, Topology};
use mapping::VideoSource;
use proptest::prelude::*;
use sync::{Engine, EngineConfig, Ingested};

fn connected() -> Engine {
    let mut engine = Engine::new(EngineConfig::default());
    let topology = Topology {
        mix_effect_keyers: vec![4, 2],
        ..Topology::default()
    };
    engine.ingest(&topology.into()).unwrap();
    engine
}

fn any_report() -> impl Strategy<Value = GetCommand> {
    prop_oneof![
        any::<u8>().prop_map(|me| {
            ProgramInput {
                mix_effect: MixEffectId::new(me),
                source: VideoSource::Input1,
            }
            .into()
        }),
        (any::<u8>(), any::<u8>(), any::<bool>()).prop_map(|(me, key, on_air)| {
            KeyerOnAir {
                mix_effect: MixEffectId::new(me),
                keyer: KeyerId::new(key),
                on_air,
            }
            .into()
        }),
    ]
}

fn in_topology(report: &GetCommand) -> bool {
    match report {
        GetCommand::ProgramInput(input) => input.mix_effect.raw() < 2,
        GetCommand::KeyerOnAir(on_air) => match on_air.mix_effect.raw() {
            0 => on_air.keyer.raw() < 4,
            1 => on_air.keyer.raw() < 2,
            _ => false,
        },
        _ => true,
    }
}

proptest! {
    #[test]
    fn out_of_range_reports_are_dropped_not_errors(reports in prop::collection::vec(any_report(), 1..20)) {
        let mut engine = connected();
        for report in &reports {
            let outcome = engine.ingest(report);
            prop_assert!(outcome.is_ok());
            let applied = outcome.map(|outcome| outcome.is_applied()).unwrap_or(false);
            prop_assert_eq!(applied, in_topology(report));
        }
        prop_assert_eq!(engine.state().mix_effects.len(), 2);
    }

    #[test]
    fn dropped_reports_leave_state_unchanged(me in 2u8.., on_air in any::<bool>()) {
        let mut engine = connected();
        let before = engine.snapshot();
        let report: GetCommand = KeyerOnAir {
            mix_effect: MixEffectId::new(me),
            keyer: KeyerId::new(0),
            on_air,
        }
        .into();
        let outcome = engine.ingest(&report).unwrap();
        prop_assert!(matches!(outcome, Ingested::Dropped(_)));
        prop_assert_eq!(engine.state(), &before);
    }
}
