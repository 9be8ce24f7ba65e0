use command::keyer::{ChromaKeyChange, ChromaKeyMask, SetChromaKey};
use command::mix_effect::{SetWipeTransition, WipeTransitionChange, WipeTransitionMask};
use command::{KeyerId, MixEffectId};
use mapping::{Pattern, WireEnum};
use proptest::prelude::*;

fn chroma_change() -> impl Strategy<Value = ChromaKeyChange> {
    prop_oneof![
        (-720.0f64..720.0).prop_map(ChromaKeyChange::Hue),
        (-50.0f64..150.0).prop_map(ChromaKeyChange::Gain),
        (-50.0f64..150.0).prop_map(ChromaKeyChange::YSuppress),
        (-50.0f64..150.0).prop_map(ChromaKeyChange::Lift),
        any::<bool>().prop_map(ChromaKeyChange::Narrow),
    ]
}

fn wipe_change() -> impl Strategy<Value = WipeTransitionChange> {
    prop_oneof![
        (0u16..400).prop_map(WipeTransitionChange::Rate),
        (0u16..18).prop_map(|raw| WipeTransitionChange::Pattern(
            <Pattern as WireEnum>::unmap(raw).unwrap_or(Pattern::CircleIris)
        )),
        (-10.0f64..110.0).prop_map(WipeTransitionChange::Symmetry),
        (-1.0f64..2.0).prop_map(WipeTransitionChange::XPosition),
        any::<bool>().prop_map(WipeTransitionChange::ReverseDirection),
    ]
}

proptest! {
    #[test]
    fn prop_mask_is_union_of_assignments(changes in prop::collection::vec(chroma_change(), 0..8)) {
        let mut command = SetChromaKey::new(MixEffectId::new(0), KeyerId::new(0));
        let mut expected = ChromaKeyMask::empty();
        for change in &changes {
            expected = expected | change.mask();
            command.set(change.clone());
        }
        prop_assert_eq!(command.mask(), expected);
        prop_assert_eq!(command.changes().len(), expected.bits().count_ones() as usize);
    }

    #[test]
    fn prop_assigned_values_stay_in_range(changes in prop::collection::vec(chroma_change(), 1..8)) {
        let mut command = SetChromaKey::new(MixEffectId::new(0), KeyerId::new(0));
        for change in changes {
            command.set(change);
        }
        if let Some(hue) = command.hue() {
            prop_assert!((0.0..360.0).contains(hue));
        }
        for value in [command.gain(), command.y_suppress(), command.lift()].into_iter().flatten() {
            prop_assert!((0.0..=100.0).contains(value));
        }
    }

    #[test]
    fn prop_payload_preserves_mask(changes in prop::collection::vec(wipe_change(), 0..6)) {
        let mut command = SetWipeTransition::new(MixEffectId::new(1));
        for change in changes {
            command.set(change);
        }
        let payload = command.to_payload().unwrap();
        prop_assert_eq!(payload.mask, command.mask().bits());
        prop_assert_eq!(payload.values.len(), SetWipeTransition::FIELD_COUNT);
        let decoded = SetWipeTransition::from_payload(MixEffectId::new(1), &payload).unwrap();
        prop_assert_eq!(decoded.mask(), command.mask());
        prop_assert_eq!(decoded.rate(), command.rate());
        prop_assert_eq!(decoded.pattern(), command.pattern());
        prop_assert_eq!(decoded.reverse_direction(), command.reverse_direction());
    }
}

#[test]
fn mask_all_covers_every_field() {
    assert_eq!(WipeTransitionMask::ALL.bits().count_ones() as usize, SetWipeTransition::FIELD_COUNT);
    assert_eq!(WipeTransitionMask::from_bits(1 << 10), None);
}
