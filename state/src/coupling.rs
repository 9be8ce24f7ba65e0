//! Cross-field couplings the device applies on its own.
//!
//! Some transition settings are shared between styles: changing one
//! changes its partner on the device too. Choosing a wipe or key pattern
//! also resets the pattern's position and symmetry. Both behaviors are
//! kept as data so prediction and ingestion consult the same tables.

use mapping::Pattern;

use crate::mix_effect::TransitionState;

/// A transition field that takes part in a coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionField {
    DveReverse,
    DveFlipFlop,
    DveClip,
    DveGain,
    DveInvertKey,
    WipeReverse,
    WipeFlipFlop,
    StingerClip,
    StingerGain,
    StingerInvert,
}

/// Writing `source` also writes `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coupling {
    pub source: TransitionField,
    pub target: TransitionField,
}

impl Coupling {
    const fn new(source: TransitionField, target: TransitionField) -> Self {
        Self { source, target }
    }
}

/// Every transition coupling.
///
/// Reverse and flip-flop are shared both ways between DVE and wipe. The DVE
/// key settings feed the stinger one way.
pub const TRANSITION_COUPLINGS: &[Coupling] = &[
    Coupling::new(TransitionField::DveReverse, TransitionField::WipeReverse),
    Coupling::new(TransitionField::WipeReverse, TransitionField::DveReverse),
    Coupling::new(TransitionField::DveFlipFlop, TransitionField::WipeFlipFlop),
    Coupling::new(TransitionField::WipeFlipFlop, TransitionField::DveFlipFlop),
    Coupling::new(TransitionField::DveClip, TransitionField::StingerClip),
    Coupling::new(TransitionField::DveGain, TransitionField::StingerGain),
    Coupling::new(TransitionField::DveInvertKey, TransitionField::StingerInvert),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue {
    Flag(bool),
    Level(f64),
}

fn read(transition: &TransitionState, field: TransitionField) -> Option<FieldValue> {
    let dve = transition.dve.as_ref();
    let stinger = transition.stinger.as_ref();
    match field {
        TransitionField::DveReverse => dve.map(|dve| FieldValue::Flag(dve.reverse)),
        TransitionField::DveFlipFlop => dve.map(|dve| FieldValue::Flag(dve.flip_flop)),
        TransitionField::DveClip => dve.map(|dve| FieldValue::Level(dve.clip)),
        TransitionField::DveGain => dve.map(|dve| FieldValue::Level(dve.gain)),
        TransitionField::DveInvertKey => dve.map(|dve| FieldValue::Flag(dve.invert_key)),
        TransitionField::WipeReverse => Some(FieldValue::Flag(transition.wipe.reverse_direction)),
        TransitionField::WipeFlipFlop => Some(FieldValue::Flag(transition.wipe.flip_flop)),
        TransitionField::StingerClip => stinger.map(|stinger| FieldValue::Level(stinger.clip)),
        TransitionField::StingerGain => stinger.map(|stinger| FieldValue::Level(stinger.gain)),
        TransitionField::StingerInvert => stinger.map(|stinger| FieldValue::Flag(stinger.invert)),
    }
}

/// Returns `false` if the target node does not exist.
fn write(transition: &mut TransitionState, field: TransitionField, value: FieldValue) -> bool {
    let dve = transition.dve.as_mut();
    let stinger = transition.stinger.as_mut();
    match (field, value) {
        (TransitionField::DveReverse, FieldValue::Flag(value)) => {
            dve.map(|dve| dve.reverse = value).is_some()
        }
        (TransitionField::DveFlipFlop, FieldValue::Flag(value)) => {
            dve.map(|dve| dve.flip_flop = value).is_some()
        }
        (TransitionField::DveClip, FieldValue::Level(value)) => {
            dve.map(|dve| dve.clip = value).is_some()
        }
        (TransitionField::DveGain, FieldValue::Level(value)) => {
            dve.map(|dve| dve.gain = value).is_some()
        }
        (TransitionField::DveInvertKey, FieldValue::Flag(value)) => {
            dve.map(|dve| dve.invert_key = value).is_some()
        }
        (TransitionField::WipeReverse, FieldValue::Flag(value)) => {
            transition.wipe.reverse_direction = value;
            true
        }
        (TransitionField::WipeFlipFlop, FieldValue::Flag(value)) => {
            transition.wipe.flip_flop = value;
            true
        }
        (TransitionField::StingerClip, FieldValue::Level(value)) => {
            stinger.map(|stinger| stinger.clip = value).is_some()
        }
        (TransitionField::StingerGain, FieldValue::Level(value)) => {
            stinger.map(|stinger| stinger.gain = value).is_some()
        }
        (TransitionField::StingerInvert, FieldValue::Flag(value)) => {
            stinger.map(|stinger| stinger.invert = value).is_some()
        }
        _ => false,
    }
}

/// Copies each changed field into its coupled partners.
///
/// Propagation is one level deep: a field written by a coupling does not
/// trigger its own couplings. Partners missing from this block are skipped.
/// Returns the fields that were written.
pub fn propagate(transition: &mut TransitionState, changed: &[TransitionField]) -> Vec<TransitionField> {
    let mut written = Vec::new();
    for &field in changed {
        let Some(value) = read(transition, field) else {
            continue;
        };
        for coupling in TRANSITION_COUPLINGS.iter().filter(|c| c.source == field) {
            if write(transition, coupling.target, value) {
                written.push(coupling.target);
            }
        }
    }
    written
}

/// Symmetry the device selects when a pattern is chosen.
pub const PATTERN_SYMMETRY: &[(Pattern, f64)] = &[
    (Pattern::HorizontalBarnDoor, 100.0),
    (Pattern::VerticalBarnDoor, 100.0),
    (Pattern::TopCentreBox, 100.0),
    (Pattern::RightCentreBox, 100.0),
    (Pattern::BottomCentreBox, 100.0),
    (Pattern::LeftCentreBox, 100.0),
    (Pattern::CircleIris, 65.5),
];

/// Symmetry for every pattern not in [`PATTERN_SYMMETRY`].
pub const DEFAULT_SYMMETRY: f64 = 50.0;

/// Position a pattern is recentred to when chosen.
pub const PATTERN_CENTRE: f64 = 0.5;

/// Values written when a pattern is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternReset {
    pub x_position: f64,
    pub y_position: f64,
    pub symmetry: f64,
}

#[must_use]
pub fn pattern_symmetry(pattern: Pattern) -> f64 {
    PATTERN_SYMMETRY
        .iter()
        .find(|(entry, _)| *entry == pattern)
        .map_or(DEFAULT_SYMMETRY, |&(_, symmetry)| symmetry)
}

#[must_use]
pub fn pattern_reset(pattern: Pattern) -> PatternReset {
    PatternReset {
        x_position: PATTERN_CENTRE,
        y_position: PATTERN_CENTRE,
        symmetry: pattern_symmetry(pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix_effect::{DveTransitionSettings, StingerSettings};

    fn equipped() -> TransitionState {
        TransitionState {
            stinger: Some(StingerSettings::default()),
            dve: Some(DveTransitionSettings::default()),
            ..TransitionState::default()
        }
    }

    #[test]
    fn reverse_mirrors_both_ways() {
        let mut transition = equipped();
        transition.dve.as_mut().unwrap().reverse = true;
        propagate(&mut transition, &[TransitionField::DveReverse]);
        assert!(transition.wipe.reverse_direction);

        transition.wipe.reverse_direction = false;
        propagate(&mut transition, &[TransitionField::WipeReverse]);
        assert!(!transition.dve.as_ref().unwrap().reverse);
    }

    #[test]
    fn dve_key_feeds_stinger_one_way() {
        let mut transition = equipped();
        transition.dve.as_mut().unwrap().gain = 40.0;
        let written = propagate(&mut transition, &[TransitionField::DveGain]);
        assert_eq!(written, vec![TransitionField::StingerGain]);
        assert_eq!(transition.stinger.as_ref().unwrap().gain, 40.0);

        transition.stinger.as_mut().unwrap().gain = 10.0;
        assert!(propagate(&mut transition, &[TransitionField::StingerGain]).is_empty());
        assert_eq!(transition.dve.as_ref().unwrap().gain, 40.0);
    }

    #[test]
    fn missing_partner_is_skipped() {
        let mut transition = TransitionState {
            dve: Some(DveTransitionSettings {
                clip: 25.0,
                ..DveTransitionSettings::default()
            }),
            ..TransitionState::default()
        };
        assert!(propagate(&mut transition, &[TransitionField::DveClip]).is_empty());
        assert!(transition.stinger.is_none());
    }

    #[test]
    fn propagation_is_one_level() {
        let mut transition = equipped();
        transition.wipe.flip_flop = true;
        let written = propagate(&mut transition, &[TransitionField::WipeFlipFlop]);
        assert_eq!(written, vec![TransitionField::DveFlipFlop]);
    }

    #[test]
    fn pattern_symmetry_table() {
        assert_eq!(pattern_symmetry(Pattern::CircleIris), 65.5);
        assert_eq!(pattern_symmetry(Pattern::VerticalBarnDoor), 100.0);
        assert_eq!(pattern_symmetry(Pattern::LeftToRightBar), DEFAULT_SYMMETRY);
        let reset = pattern_reset(Pattern::TopCentreBox);
        assert_eq!((reset.x_position, reset.y_position), (0.5, 0.5));
    }
}
