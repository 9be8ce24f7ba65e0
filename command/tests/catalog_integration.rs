use command::keyer::{ChromaKey, SetChromaKey};
use command::mix_effect::{ProgramInput, SetProgramInput};
use command::{Address, CommandError, GetCommand, KeyerId, MixEffectId, Payload, SetCommand, Topology};
use mapping::{VideoSource, WireValue};

#[test]
fn get_commands_roundtrip_through_the_catalog() {
    let chroma = ChromaKey {
        mix_effect: MixEffectId::new(0),
        keyer: KeyerId::new(2),
        hue: 123.4,
        gain: 50.0,
        y_suppress: 25.5,
        lift: 0.0,
        narrow: true,
    };
    let command = GetCommand::from(chroma.clone());
    let payload = command.to_payload().unwrap();
    assert_eq!(payload.values[0], WireValue::Int(1234));
    let decoded = ChromaKey::from_payload(MixEffectId::new(0), KeyerId::new(2), &payload).unwrap();
    assert_eq!(decoded, chroma);
    assert_eq!(command.address(), Address::Keyer(MixEffectId::new(0), KeyerId::new(2)));
}

#[test]
fn unknown_source_in_payload_is_an_error() {
    let payload = Payload::new(0, vec![WireValue::Int(9999)]);
    let err = ProgramInput::from_payload(MixEffectId::new(0), &payload).unwrap_err();
    assert!(matches!(err, CommandError::Mapping(_)));
}

#[test]
fn plain_set_rejects_a_mask() {
    let payload = Payload::new(1, vec![WireValue::Int(1)]);
    assert!(matches!(
        SetProgramInput::from_payload(MixEffectId::new(0), &payload),
        Err(CommandError::UnknownMaskBits { bits: 1, .. })
    ));
}

#[test]
fn set_catalog_names_are_distinct() {
    let commands: Vec<SetCommand> = vec![
        SetProgramInput::new(MixEffectId::new(0), VideoSource::Input1).into(),
        SetChromaKey::new(MixEffectId::new(0), KeyerId::new(0)).into(),
    ];
    assert_ne!(commands[0].name(), commands[1].name());
}

#[test]
fn topology_is_a_get_command() {
    let command = GetCommand::from(Topology::default());
    assert_eq!(command.address(), Address::Global);
    assert_eq!(command.name().to_string(), "_top");
}
