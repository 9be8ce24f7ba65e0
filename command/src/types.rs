//! Core types for commands: identifiers, addresses and payloads.

use std::fmt;

use mapping::{AudioSource, FlyKeyFrame, VideoSource, WireValue};

macro_rules! index_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(u8);

        impl $name {
            #[must_use]
            pub const fn new(index: u8) -> Self {
                Self(index)
            }

            /// Returns the raw zero-based index.
            #[must_use]
            pub const fn raw(self) -> u8 {
                self.0
            }

            /// Returns the index as a `usize` for slice access.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u8> for $name {
            fn from(index: u8) -> Self {
                Self(index)
            }
        }

        impl From<$name> for u8 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_id! {
    /// Zero-based mix-effect block index.
    MixEffectId
}

index_id! {
    /// Zero-based upstream keyer index within a mix-effect block.
    KeyerId
}

index_id! {
    /// Zero-based downstream keyer index.
    DownstreamKeyerId
}

index_id! {
    /// Zero-based auxiliary output index.
    AuxiliaryId
}

index_id! {
    /// Zero-based color generator index.
    ColorGeneratorId
}

index_id! {
    /// Zero-based super-source index.
    SuperSourceId
}

index_id! {
    /// Zero-based box index within a super-source.
    SuperSourceBoxId
}

index_id! {
    /// Zero-based media player index.
    MediaPlayerId
}

/// Four-character wire name of a command.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandName([u8; 4]);

impl CommandName {
    #[must_use]
    pub const fn new(raw: [u8; 4]) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            write!(f, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

impl fmt::Debug for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandName({self})")
    }
}

/// The state node a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    /// Device-wide settings and info.
    Global,
    /// A mix-effect block, including its transition settings.
    MixEffect(MixEffectId),
    /// An upstream keyer.
    Keyer(MixEffectId, KeyerId),
    /// A stored fly-key frame of an upstream keyer.
    KeyFrame(MixEffectId, KeyerId, FlyKeyFrame),
    DownstreamKeyer(DownstreamKeyerId),
    Auxiliary(AuxiliaryId),
    ColorGenerator(ColorGeneratorId),
    SuperSource(SuperSourceId),
    SuperSourceBox(SuperSourceId, SuperSourceBoxId),
    MediaPlayer(MediaPlayerId),
    MediaPoolStill(u16),
    MediaPoolClip(u8),
    /// A video input's properties.
    Input(VideoSource),
    /// An audio mixer channel.
    AudioInput(AudioSource),
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::MixEffect(me) => write!(f, "me{me}"),
            Self::Keyer(me, key) => write!(f, "me{me}.key{key}"),
            Self::KeyFrame(me, key, frame) => write!(f, "me{me}.key{key}.frame{frame}"),
            Self::DownstreamKeyer(dsk) => write!(f, "dsk{dsk}"),
            Self::Auxiliary(aux) => write!(f, "aux{aux}"),
            Self::ColorGenerator(color) => write!(f, "color{color}"),
            Self::SuperSource(ssrc) => write!(f, "ssrc{ssrc}"),
            Self::SuperSourceBox(ssrc, index) => write!(f, "ssrc{ssrc}.box{index}"),
            Self::MediaPlayer(player) => write!(f, "mp{player}"),
            Self::MediaPoolStill(slot) => write!(f, "still{slot}"),
            Self::MediaPoolClip(slot) => write!(f, "clip{slot}"),
            Self::Input(source) => write!(f, "input.{source}"),
            Self::AudioInput(source) => write!(f, "audio.{source}"),
        }
    }
}

/// Logical wire payload: the change mask plus every declared field in order.
///
/// Fields the mask does not claim are carried as their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payload {
    /// Change mask bits. Zero for Get and single-field commands.
    pub mask: u32,
    /// Every declared field in declaration order.
    pub values: Vec<WireValue>,
}

impl Payload {
    #[must_use]
    pub const fn new(mask: u32, values: Vec<WireValue>) -> Self {
        Self { mask, values }
    }
}
