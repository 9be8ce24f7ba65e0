//! Wire-to-domain mapping layer for the mixstate switcher core.
//!
//! This crate defines how values travel between the switcher's wire
//! representation and the domain model:
//! - Bidirectional enum tables (`WireEnum`) and flag decomposition (`WireFlags`)
//! - Video and audio source identifiers
//! - Pure scaling pairs (fractions, percent, degrees, decibels)
//! - Field codecs with clamp or wrap range policies
//!
//! # Design Principles
//!
//! - **Tables are built once** - every enum table is a lazily initialized,
//!   process-wide immutable value. No locking after construction.
//! - **Unknown wire values are errors** - an unrecognized constant signals a
//!   protocol version mismatch and is never silently mapped.
//! - **Range policy lives with the codec** - a field's codec decides whether
//!   out-of-range input clamps or wraps.

#[macro_use]
mod table;

mod enums;
mod error;
mod field;
pub mod scale;
mod source;

pub use enums::{
    AudioMixOption, AudioSourceType, BorderBevel, DveEffect, ExternalPortType, FlyKeyFrame,
    FlyKeyLocation, InternalPortType, KeyType, MeAvailability, MediaPlayerSource, Pattern,
    SourceAvailability, StingerSource, SuperSourceArtOption, TransitionLayer, TransitionStyle,
    VideoMode,
};
pub use error::{MappingError, MappingResult};
pub use field::{Angle, FieldCodec, FixedPoint, WireField, WireValue};
pub use source::{AudioSource, MixEffectOutput, VideoSource};
pub use table::{EnumTable, WireEnum, WireFlags};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = TransitionStyle::table();
        let _ = VideoSource::table();
        let _ = FieldCodec::PERCENT;
        let _: MappingResult<()> = Ok(());
    }

    #[test]
    fn flags_and_enums_share_tables() {
        let raw = TransitionLayer::flags_from(&[TransitionLayer::Background, TransitionLayer::Key2]);
        assert_eq!(raw, 0b101);
        assert_eq!(
            TransitionLayer::components_of(raw).unwrap(),
            vec![TransitionLayer::Background, TransitionLayer::Key2]
        );
    }
}
