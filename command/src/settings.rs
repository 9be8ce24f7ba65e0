//! Device-wide settings: video mode and input properties.

use mapping::{
    ExternalPortType, FieldCodec, InternalPortType, MeAvailability, SourceAvailability, VideoMode,
    VideoSource,
};

use crate::Address;

get_command! {
    pub struct CurrentVideoMode: b"VidM" {
        address {} => Address::Global,
        fields {
            mode: VideoMode => FieldCodec::ENUM,
        }
    }
}

plain_set_command! {
    pub struct SetVideoMode: b"CVdM" {
        address {} => Address::Global,
        field { mode: VideoMode => FieldCodec::ENUM },
    }
}

get_command! {
    /// Names, connectors and routing availability of one input.
    pub struct InputProperties: b"InPr" {
        address { input: VideoSource } => Address::Input(input),
        fields {
            long_name: String => FieldCodec::LONG_NAME,
            short_name: String => FieldCodec::SHORT_NAME,
            are_names_default: bool => FieldCodec::BOOL,
            available_external_ports: Vec<ExternalPortType> => FieldCodec::FLAGS,
            external_port: ExternalPortType => FieldCodec::ENUM,
            internal_port: InternalPortType => FieldCodec::ENUM,
            source_availability: Vec<SourceAvailability> => FieldCodec::FLAGS,
            me_availability: Vec<MeAvailability> => FieldCodec::FLAGS,
        }
    }
}

set_command! {
    pub struct SetInputProperties: b"CInL" {
        address { input: VideoSource } => Address::Input(input),
        mask InputPropertiesMask,
        change InputPropertiesChange,
        fields {
            LONG_NAME = 0: LongName { long_name: String => FieldCodec::LONG_NAME },
            SHORT_NAME = 1: ShortName { short_name: String => FieldCodec::SHORT_NAME },
            EXTERNAL_PORT = 2: ExternalPort { external_port: ExternalPortType => FieldCodec::ENUM },
        }
    }
}

#[cfg(test)]
mod tests {
    use mapping::WireValue;

    use super::*;

    #[test]
    fn names_are_truncated() {
        let command = SetInputProperties::new(VideoSource::Input1)
            .with(InputPropertiesChange::ShortName("CAM 1".into()));
        assert_eq!(command.short_name().map(String::as_str), Some("CAM "));
    }

    #[test]
    fn input_availability_decodes_flags() {
        let properties = InputProperties {
            input: VideoSource::Input2,
            long_name: "Camera 2".into(),
            short_name: "CAM2".into(),
            available_external_ports: vec![ExternalPortType::Sdi, ExternalPortType::Hdmi],
            external_port: ExternalPortType::Hdmi,
            me_availability: vec![MeAvailability::Me1, MeAvailability::Me2],
            ..InputProperties::default()
        };
        let payload = properties.to_payload().unwrap();
        assert_eq!(payload.values[3], WireValue::Int(0b11));
        let decoded = InputProperties::from_payload(VideoSource::Input2, &payload).unwrap();
        assert_eq!(decoded, properties);
    }
}
