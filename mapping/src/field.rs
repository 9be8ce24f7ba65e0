//! Field codecs and the range policy they carry.

use crate::error::{MappingError, MappingResult};
use crate::scale;
use crate::table::{WireEnum, WireFlags};

/// Fixed-point field: clamped to `[min, max]`, quantized by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPoint {
    /// Lowest domain value.
    pub min: f64,
    /// Highest domain value.
    pub max: f64,
    /// Wire units per 1.0 (e.g. 10 => 0.1 resolution).
    pub scale: u32,
}

impl FixedPoint {
    #[must_use]
    pub const fn new(min: f64, max: f64, scale: u32) -> Self {
        Self { min, max, scale }
    }
}

/// Angular field: wraps modulo `period`, quantized by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    /// Full turn in domain units.
    pub period: f64,
    /// Wire units per 1.0.
    pub scale: u32,
}

impl Angle {
    #[must_use]
    pub const fn new(period: f64, scale: u32) -> Self {
        Self { period, scale }
    }

    fn period_q(self) -> i64 {
        scale::quantize(self.period, self.scale)
    }
}

/// The encoding and range policy of one command field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldCodec {
    /// Boolean flag.
    Bool,

    /// Wire enum constant.
    Enum,

    /// Flag word decomposed into wire enum members.
    Flags,

    /// Integer clamped to `[min, max]`.
    Integer { min: i64, max: i64 },

    /// Fixed-point number, clamped.
    Fixed(FixedPoint),

    /// Fixed-point angle, wrapped.
    Angle(Angle),

    /// Decibel level clamped to `[min, max]`, sent as a linear gain word.
    Decibel { min: f64, max: f64 },

    /// Text truncated to `max_len` characters.
    Text { max_len: usize },

    /// Opaque byte string of exactly `len` bytes.
    Bytes { len: usize },
}

impl FieldCodec {
    pub const BOOL: Self = Self::Bool;
    pub const ENUM: Self = Self::Enum;
    pub const FLAGS: Self = Self::Flags;

    /// Percent with 0.1 resolution.
    pub const PERCENT: Self = Self::fixed(0.0, 100.0, 10);
    /// Hue in degrees with 0.1 resolution.
    pub const HUE: Self = Self::angle(360.0, 10);
    /// Transition rate in frames.
    pub const RATE: Self = Self::integer(1, 250);
    /// Fraction in `[0, 1]` with 0.0001 resolution.
    pub const UNIT: Self = Self::fixed(0.0, 1.0, 10_000);
    pub const SYMMETRY: Self = Self::fixed(0.0, 100.0, 100);
    pub const PATTERN_SIZE: Self = Self::fixed(0.0, 100.0, 100);
    pub const SOFTNESS: Self = Self::fixed(0.0, 100.0, 100);
    pub const MASK_VERTICAL: Self = Self::fixed(-9.0, 9.0, 1000);
    pub const MASK_HORIZONTAL: Self = Self::fixed(-16.0, 16.0, 1000);
    pub const DVE_SIZE: Self = Self::fixed(0.0, 99.99, 1000);
    pub const DVE_POSITION: Self = Self::fixed(-1000.0, 1000.0, 1000);
    pub const DVE_ROTATION: Self = Self::fixed(-3276.7, 3276.7, 10);
    pub const BORDER_WIDTH: Self = Self::fixed(0.0, 16.0, 100);
    pub const BORDER_PERCENT: Self = Self::integer(0, 100);
    /// Light source direction in degrees with 0.1 resolution.
    pub const LIGHT_DIRECTION: Self = Self::angle(360.0, 10);
    pub const LIGHT_ALTITUDE: Self = Self::integer(10, 100);
    pub const BOX_X: Self = Self::fixed(-48.0, 48.0, 100);
    pub const BOX_Y: Self = Self::fixed(-27.0, 27.0, 100);
    pub const BOX_SIZE: Self = Self::fixed(0.07, 1.0, 1000);
    pub const BOX_CROP_V: Self = Self::fixed(0.0, 18.0, 1000);
    pub const BOX_CROP_H: Self = Self::fixed(0.0, 32.0, 1000);
    pub const AUDIO_GAIN: Self = Self::decibel(-60.0, 6.0);
    pub const AUDIO_BALANCE: Self = Self::fixed(-50.0, 50.0, 200);
    pub const WIPE_BORDER_WIDTH: Self = Self::fixed(0.0, 100.0, 100);
    pub const FRAMES: Self = Self::integer(0, 65_535);
    pub const WORD: Self = Self::integer(0, 65_535);
    pub const INDEX: Self = Self::integer(0, 255);
    pub const LONG_NAME: Self = Self::text(20);
    pub const SHORT_NAME: Self = Self::text(4);
    pub const PRODUCT_NAME: Self = Self::text(44);
    pub const FILE_NAME: Self = Self::text(64);
    /// MD5 digest of a media pool entry.
    pub const HASH: Self = Self::Bytes { len: 16 };

    /// Creates a clamped integer codec.
    #[must_use]
    pub const fn integer(min: i64, max: i64) -> Self {
        Self::Integer { min, max }
    }

    /// Creates a clamped fixed-point codec.
    #[must_use]
    pub const fn fixed(min: f64, max: f64, scale: u32) -> Self {
        Self::Fixed(FixedPoint::new(min, max, scale))
    }

    /// Creates a wrapping angle codec.
    #[must_use]
    pub const fn angle(period: f64, scale: u32) -> Self {
        Self::Angle(Angle::new(period, scale))
    }

    /// Creates a clamped decibel codec.
    #[must_use]
    pub const fn decibel(min: f64, max: f64) -> Self {
        Self::Decibel { min, max }
    }

    /// Creates a truncating text codec.
    #[must_use]
    pub const fn text(max_len: usize) -> Self {
        Self::Text { max_len }
    }

    /// Short name used in error reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Enum => "enum",
            Self::Flags => "flags",
            Self::Integer { .. } => "integer",
            Self::Fixed(_) => "fixed",
            Self::Angle(_) => "angle",
            Self::Decibel { .. } => "decibel",
            Self::Text { .. } => "text",
            Self::Bytes { .. } => "bytes",
        }
    }
}

/// One quantized field as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl WireValue {
    /// Value written for a field the mask does not claim.
    #[must_use]
    pub fn zero_for(codec: FieldCodec) -> Self {
        match codec {
            FieldCodec::Bool => Self::Bool(false),
            FieldCodec::Text { .. } => Self::Text(String::new()),
            FieldCodec::Bytes { len } => Self::Bytes(vec![0; len]),
            _ => Self::Int(0),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }

    fn mismatch(&self, codec: FieldCodec) -> MappingError {
        MappingError::TypeMismatch {
            codec: codec.name(),
            found: self.kind(),
        }
    }
}

/// A domain type that can be carried by a [`FieldCodec`].
pub trait WireField: Sized {
    /// Applies the codec's range policy (clamp, wrap or truncate).
    #[must_use]
    fn constrain(self, codec: FieldCodec) -> Self;

    /// Encodes the constrained value.
    fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue>;

    /// Decodes a wire value. Device values are taken as reported, not
    /// constrained.
    fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self>;

    /// Returns the value the device stores after receiving `self`: encoded
    /// and decoded once. A value the codec cannot carry is returned as is.
    #[must_use]
    fn settle(&self, codec: FieldCodec) -> Self
    where
        Self: Clone,
    {
        self.to_wire(codec)
            .and_then(|raw| Self::from_wire(&raw, codec))
            .unwrap_or_else(|_| self.clone())
    }
}

fn mismatch(codec: FieldCodec, found: &'static str) -> MappingError {
    MappingError::TypeMismatch {
        codec: codec.name(),
        found,
    }
}

impl WireField for f64 {
    fn constrain(self, codec: FieldCodec) -> Self {
        match codec {
            FieldCodec::Fixed(fixed) if self.is_nan() => fixed.min,
            FieldCodec::Fixed(fixed) => self.clamp(fixed.min, fixed.max),
            FieldCodec::Angle(_) if !self.is_finite() => 0.0,
            FieldCodec::Angle(angle) => scale::wrap(self, angle.period),
            FieldCodec::Decibel { min, .. } if self.is_nan() => min,
            FieldCodec::Decibel { min, max } => self.clamp(min, max),
            FieldCodec::Integer { min, .. } if self.is_nan() => min as Self,
            FieldCodec::Integer { min, max } => self.clamp(min as Self, max as Self),
            _ => self,
        }
    }

    fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue> {
        let value = self.constrain(codec);
        match codec {
            FieldCodec::Fixed(fixed) => Ok(WireValue::Int(scale::quantize(value, fixed.scale))),
            FieldCodec::Angle(angle) => {
                let raw = scale::quantize(value, angle.scale).rem_euclid(angle.period_q());
                Ok(WireValue::Int(raw))
            }
            FieldCodec::Decibel { .. } => Ok(WireValue::Int(scale::decibels_to_wire(value))),
            FieldCodec::Integer { .. } => Ok(WireValue::Int(value.round() as i64)),
            other => Err(mismatch(other, "f64")),
        }
    }

    fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self> {
        match (codec, value) {
            (FieldCodec::Fixed(fixed), WireValue::Int(raw)) => {
                Ok(scale::dequantize(*raw, fixed.scale))
            }
            (FieldCodec::Angle(angle), WireValue::Int(raw)) => {
                Ok(scale::dequantize(*raw, angle.scale))
            }
            (FieldCodec::Decibel { .. }, WireValue::Int(raw)) => Ok(scale::wire_to_decibels(*raw)),
            (FieldCodec::Integer { .. }, WireValue::Int(raw)) => Ok(*raw as Self),
            _ => Err(value.mismatch(codec)),
        }
    }
}

impl WireField for bool {
    fn constrain(self, _codec: FieldCodec) -> Self {
        self
    }

    fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue> {
        match codec {
            FieldCodec::Bool => Ok(WireValue::Bool(*self)),
            other => Err(mismatch(other, "bool")),
        }
    }

    fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self> {
        match (codec, value) {
            (FieldCodec::Bool, WireValue::Bool(flag)) => Ok(*flag),
            _ => Err(value.mismatch(codec)),
        }
    }
}

macro_rules! impl_integer_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl WireField for $ty {
                fn constrain(self, codec: FieldCodec) -> Self {
                    match codec {
                        FieldCodec::Integer { min, max } => {
                            Self::try_from(i64::from(self).clamp(min, max)).unwrap_or(self)
                        }
                        _ => self,
                    }
                }

                fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue> {
                    match codec {
                        FieldCodec::Integer { .. } => {
                            Ok(WireValue::Int(i64::from(self.constrain(codec))))
                        }
                        other => Err(mismatch(other, stringify!($ty))),
                    }
                }

                fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self> {
                    match (codec, value) {
                        (FieldCodec::Integer { .. }, WireValue::Int(raw)) => {
                            Self::try_from(*raw).map_err(|_| MappingError::IntegerOverflow {
                                target: stringify!($ty),
                                raw: *raw,
                            })
                        }
                        _ => Err(value.mismatch(codec)),
                    }
                }
            }
        )+
    };
}

impl_integer_field!(u8, u16, u32, i16, i32, i64);

impl WireField for String {
    fn constrain(self, codec: FieldCodec) -> Self {
        match codec {
            FieldCodec::Text { max_len } if self.chars().count() > max_len => {
                self.chars().take(max_len).collect()
            }
            _ => self,
        }
    }

    fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue> {
        match codec {
            FieldCodec::Text { .. } => Ok(WireValue::Text(self.clone().constrain(codec))),
            other => Err(mismatch(other, "text")),
        }
    }

    fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self> {
        match (codec, value) {
            (FieldCodec::Text { .. }, WireValue::Text(text)) => Ok(text.clone()),
            _ => Err(value.mismatch(codec)),
        }
    }
}

impl<const N: usize> WireField for [u8; N] {
    fn constrain(self, _codec: FieldCodec) -> Self {
        self
    }

    fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue> {
        match codec {
            FieldCodec::Bytes { len } if len == N => Ok(WireValue::Bytes(self.to_vec())),
            other => Err(mismatch(other, "byte array")),
        }
    }

    fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self> {
        match (codec, value) {
            (FieldCodec::Bytes { .. }, WireValue::Bytes(bytes)) => {
                Self::try_from(bytes.as_slice()).map_err(|_| MappingError::TypeMismatch {
                    codec: codec.name(),
                    found: "short byte string",
                })
            }
            _ => Err(value.mismatch(codec)),
        }
    }
}

impl<T: WireFlags> WireField for Vec<T> {
    fn constrain(self, _codec: FieldCodec) -> Self {
        T::normalize(&self)
    }

    fn to_wire(&self, codec: FieldCodec) -> MappingResult<WireValue> {
        match codec {
            FieldCodec::Flags => Ok(WireValue::Int(i64::from(T::flags_from(self)))),
            other => Err(mismatch(other, T::NAME)),
        }
    }

    fn from_wire(value: &WireValue, codec: FieldCodec) -> MappingResult<Self> {
        match (codec, value) {
            (FieldCodec::Flags, WireValue::Int(raw)) => {
                let bits = u16::try_from(*raw).map_err(|_| MappingError::IntegerOverflow {
                    target: T::NAME,
                    raw: *raw,
                })?;
                T::components_of(bits)
            }
            _ => Err(value.mismatch(codec)),
        }
    }
}

pub(crate) fn enum_to_wire<T: WireEnum>(value: T, codec: FieldCodec) -> MappingResult<WireValue> {
    match codec {
        FieldCodec::Enum => Ok(WireValue::Int(i64::from(value.map()))),
        other => Err(mismatch(other, T::NAME)),
    }
}

pub(crate) fn enum_from_wire<T: WireEnum>(value: &WireValue, codec: FieldCodec) -> MappingResult<T> {
    match (codec, value) {
        (FieldCodec::Enum, WireValue::Int(raw)) => T::table().unmap_wide(*raw),
        _ => Err(value.mismatch(codec)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pattern, TransitionLayer};

    #[test]
    fn percent_clamps_at_bounds() {
        assert_eq!(110.0_f64.constrain(FieldCodec::PERCENT), 100.0);
        assert_eq!((-10.0_f64).constrain(FieldCodec::PERCENT), 0.0);
        assert_eq!(
            110.0_f64.to_wire(FieldCodec::PERCENT).unwrap(),
            WireValue::Int(1000)
        );
    }

    #[test]
    fn hue_wraps_both_ways() {
        assert!((361.0_f64.constrain(FieldCodec::HUE) - 1.0).abs() < 1e-9);
        assert!(((-0.01_f64).constrain(FieldCodec::HUE) - 359.99).abs() < 1e-9);
        assert_eq!(360.1_f64.to_wire(FieldCodec::HUE).unwrap(), WireValue::Int(1));
    }

    #[test]
    fn hue_just_below_period_wraps_after_quantization() {
        let hue = (-0.01_f64).constrain(FieldCodec::HUE);
        assert_eq!(hue.to_wire(FieldCodec::HUE).unwrap(), WireValue::Int(0));
        assert_eq!(hue.settle(FieldCodec::HUE), 0.0);
    }

    #[test]
    fn settled_gain_is_what_the_device_reads_back() {
        let wire = (-60.0_f64).to_wire(FieldCodec::AUDIO_GAIN).unwrap();
        assert_eq!(wire, WireValue::Int(33));
        let settled = (-60.0_f64).settle(FieldCodec::AUDIO_GAIN);
        let confirmed = f64::from_wire(&wire, FieldCodec::AUDIO_GAIN).unwrap();
        assert_eq!(settled, confirmed);
        assert!((settled + 59.94).abs() < 0.01);
    }

    #[test]
    fn settle_keeps_exact_values() {
        assert_eq!(65.5_f64.settle(FieldCodec::SYMMETRY), 65.5);
        assert_eq!(0.1_f64.settle(FieldCodec::HUE), 0.1);
        assert_eq!(
            String::from("CAM12").settle(FieldCodec::SHORT_NAME),
            String::from("CAM1")
        );
    }

    #[test]
    fn nan_falls_back_to_lower_bound() {
        assert_eq!(f64::NAN.constrain(FieldCodec::PERCENT), 0.0);
        assert_eq!(f64::NAN.constrain(FieldCodec::HUE), 0.0);
    }

    #[test]
    fn device_values_are_not_constrained_on_read() {
        let value = f64::from_wire(&WireValue::Int(1234), FieldCodec::PERCENT).unwrap();
        assert!((value - 123.4).abs() < 1e-9);
    }

    #[test]
    fn decibels_use_linear_wire() {
        assert_eq!(0.0_f64.to_wire(FieldCodec::AUDIO_GAIN).unwrap(), WireValue::Int(32768));
        let db = f64::from_wire(&WireValue::Int(32768), FieldCodec::AUDIO_GAIN).unwrap();
        assert!(db.abs() < 1e-9);
        assert_eq!(12.0_f64.constrain(FieldCodec::AUDIO_GAIN), 6.0);
    }

    #[test]
    fn integers_clamp_and_overflow() {
        assert_eq!(300_u16.constrain(FieldCodec::RATE), 250);
        assert_eq!(0_u16.constrain(FieldCodec::RATE), 1);
        let err = u8::from_wire(&WireValue::Int(256), FieldCodec::RATE).unwrap_err();
        assert_eq!(
            err,
            MappingError::IntegerOverflow {
                target: "u8",
                raw: 256
            }
        );
    }

    #[test]
    fn text_truncates_by_characters() {
        let name = String::from("Kamera-Überblick-Links-Oben");
        assert_eq!(name.constrain(FieldCodec::LONG_NAME).chars().count(), 20);
        assert_eq!(
            String::from("CAM12").to_wire(FieldCodec::SHORT_NAME).unwrap(),
            WireValue::Text("CAM1".into())
        );
    }

    #[test]
    fn enums_need_enum_codec() {
        assert_eq!(
            Pattern::CircleIris.to_wire(FieldCodec::ENUM).unwrap(),
            WireValue::Int(7)
        );
        assert!(matches!(
            Pattern::CircleIris.to_wire(FieldCodec::PERCENT),
            Err(MappingError::TypeMismatch { codec: "fixed", .. })
        ));
        assert_eq!(
            Pattern::from_wire(&WireValue::Int(7), FieldCodec::ENUM).unwrap(),
            Pattern::CircleIris
        );
    }

    #[test]
    fn flag_sets_normalize() {
        let layers = vec![TransitionLayer::Key1, TransitionLayer::Background];
        assert_eq!(
            layers.clone().constrain(FieldCodec::FLAGS),
            vec![TransitionLayer::Background, TransitionLayer::Key1]
        );
        assert_eq!(layers.to_wire(FieldCodec::FLAGS).unwrap(), WireValue::Int(3));
        let decoded = Vec::<TransitionLayer>::from_wire(&WireValue::Int(3), FieldCodec::FLAGS).unwrap();
        assert_eq!(decoded, vec![TransitionLayer::Background, TransitionLayer::Key1]);
    }

    #[test]
    fn zero_values_match_codec() {
        assert_eq!(WireValue::zero_for(FieldCodec::BOOL), WireValue::Bool(false));
        assert_eq!(WireValue::zero_for(FieldCodec::LONG_NAME), WireValue::Text(String::new()));
        assert_eq!(WireValue::zero_for(FieldCodec::HUE), WireValue::Int(0));
        assert_eq!(WireValue::zero_for(FieldCodec::HASH), WireValue::Bytes(vec![0; 16]));
    }

    #[test]
    fn hashes_keep_their_length() {
        let hash = [7u8; 16];
        let wire = hash.to_wire(FieldCodec::HASH).unwrap();
        assert_eq!(<[u8; 16]>::from_wire(&wire, FieldCodec::HASH).unwrap(), hash);
        assert!(<[u8; 16]>::from_wire(&WireValue::Bytes(vec![1; 4]), FieldCodec::HASH).is_err());
    }
}
