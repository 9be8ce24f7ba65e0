//! Audio mixer commands.

use mapping::{AudioMixOption, AudioSource, AudioSourceType, ExternalPortType, FieldCodec};

use crate::Address;

get_command! {
    /// One audio mixer channel.
    pub struct AudioInput: b"AMIP" {
        address { source: AudioSource } => Address::AudioInput(source),
        fields {
            source_type: AudioSourceType => FieldCodec::ENUM,
            port_type: ExternalPortType => FieldCodec::ENUM,
            mix_option: AudioMixOption => FieldCodec::ENUM,
            /// Gain in dB.
            gain: f64 => FieldCodec::AUDIO_GAIN,
            balance: f64 => FieldCodec::AUDIO_BALANCE,
        }
    }
}

set_command! {
    pub struct SetAudioInput: b"CAMI" {
        address { source: AudioSource } => Address::AudioInput(source),
        mask AudioInputMask,
        change AudioInputChange,
        fields {
            MIX_OPTION = 0: MixOption { mix_option: AudioMixOption => FieldCodec::ENUM },
            GAIN = 1: Gain { gain: f64 => FieldCodec::AUDIO_GAIN },
            BALANCE = 2: Balance { balance: f64 => FieldCodec::AUDIO_BALANCE },
        }
    }
}

get_command! {
    pub struct AudioMaster: b"AMMO" {
        address {} => Address::Global,
        fields {
            gain: f64 => FieldCodec::AUDIO_GAIN,
            balance: f64 => FieldCodec::AUDIO_BALANCE,
            follow_fade_to_black: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    pub struct SetAudioMaster: b"CAMM" {
        address {} => Address::Global,
        mask AudioMasterMask,
        change AudioMasterChange,
        fields {
            GAIN = 0: Gain { gain: f64 => FieldCodec::AUDIO_GAIN },
            BALANCE = 1: Balance { balance: f64 => FieldCodec::AUDIO_BALANCE },
            FOLLOW_FADE_TO_BLACK = 2: FollowFadeToBlack { follow_fade_to_black: bool => FieldCodec::BOOL },
        }
    }
}

get_command! {
    pub struct AudioMonitor: b"AMmO" {
        address {} => Address::Global,
        fields {
            enabled: bool => FieldCodec::BOOL,
            gain: f64 => FieldCodec::AUDIO_GAIN,
            mute: bool => FieldCodec::BOOL,
            solo: bool => FieldCodec::BOOL,
            solo_source: AudioSource => FieldCodec::ENUM,
            dim: bool => FieldCodec::BOOL,
        }
    }
}

set_command! {
    pub struct SetAudioMonitor: b"CAMm" {
        address {} => Address::Global,
        mask AudioMonitorMask,
        change AudioMonitorChange,
        fields {
            ENABLED = 0: Enabled { enabled: bool => FieldCodec::BOOL },
            GAIN = 1: Gain { gain: f64 => FieldCodec::AUDIO_GAIN },
            MUTE = 2: Mute { mute: bool => FieldCodec::BOOL },
            SOLO = 3: Solo { solo: bool => FieldCodec::BOOL },
            SOLO_SOURCE = 4: SoloSource { solo_source: AudioSource => FieldCodec::ENUM },
            DIM = 5: Dim { dim: bool => FieldCodec::BOOL },
        }
    }
}
