//! Process-wide enum tables.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use strum::IntoEnumIterator;

use crate::error::{MappingError, MappingResult};

/// A domain enum with a fixed wire constant per variant.
///
/// The forward direction is an exhaustive `match`, so every variant has a
/// wire value by construction. The reverse direction goes through the lazily
/// built [`EnumTable`].
pub trait WireEnum: Copy + Eq + Hash + fmt::Debug + IntoEnumIterator + 'static {
    /// Table name used in error reports.
    const NAME: &'static str;

    /// Returns the wire constant for this variant.
    fn wire(self) -> u16;

    /// Returns the shared table for this enum.
    fn table() -> &'static EnumTable<Self>;

    /// Maps a domain value to its wire constant.
    fn map(self) -> u16 {
        Self::table().map(self)
    }

    /// Maps a wire constant back to its domain value.
    fn unmap(raw: u16) -> MappingResult<Self> {
        Self::table().unmap(raw)
    }
}

/// A wire enum whose constants are single bits of a flag word.
pub trait WireFlags: WireEnum {
    /// Decomposes a flag word into its members, in table order.
    fn components_of(raw: u16) -> MappingResult<Vec<Self>> {
        let mut rest = raw;
        let mut members = Vec::new();
        for &(value, bit) in Self::table().entries() {
            if bit != 0 && raw & bit == bit {
                members.push(value);
                rest &= !bit;
            }
        }
        if rest != 0 {
            return Err(MappingError::UnknownFlagBits {
                table: Self::NAME,
                bits: rest,
            });
        }
        Ok(members)
    }

    /// Recomposes a flag word from members. Duplicates are harmless.
    fn flags_from(values: &[Self]) -> u16 {
        values.iter().fold(0, |acc, value| acc | value.wire())
    }

    /// Returns the members in table order without duplicates.
    fn normalize(values: &[Self]) -> Vec<Self> {
        Self::table()
            .entries()
            .iter()
            .filter(|(value, _)| values.contains(value))
            .map(|(value, _)| *value)
            .collect()
    }
}

/// Immutable bidirectional table between a domain enum and wire constants.
#[derive(Debug)]
pub struct EnumTable<D> {
    name: &'static str,
    entries: Vec<(D, u16)>,
    reverse: HashMap<u16, D>,
}

impl<D: WireEnum> EnumTable<D> {
    /// Builds the table by walking every variant once.
    #[must_use]
    pub fn build() -> Self {
        let entries: Vec<(D, u16)> = D::iter().map(|value| (value, value.wire())).collect();
        let reverse: HashMap<u16, D> = entries.iter().map(|&(value, raw)| (raw, value)).collect();
        debug_assert_eq!(
            reverse.len(),
            entries.len(),
            "duplicate wire constant in {}",
            D::NAME
        );
        Self {
            name: D::NAME,
            entries,
            reverse,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Maps a domain value to its wire constant.
    #[must_use]
    pub fn map(&self, value: D) -> u16 {
        value.wire()
    }

    /// Maps a wire constant back to its domain value.
    pub fn unmap(&self, raw: u16) -> MappingResult<D> {
        self.reverse
            .get(&raw)
            .copied()
            .ok_or(MappingError::UnknownWireValue {
                table: self.name,
                raw: i64::from(raw),
            })
    }

    /// Like [`unmap`](Self::unmap) for values read into a wider integer.
    pub fn unmap_wide(&self, raw: i64) -> MappingResult<D> {
        u16::try_from(raw)
            .ok()
            .and_then(|narrow| self.reverse.get(&narrow).copied())
            .ok_or(MappingError::UnknownWireValue {
                table: self.name,
                raw,
            })
    }

    /// Returns every `(value, wire)` pair in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(D, u16)] {
        &self.entries
    }

    /// Returns the number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the enum has no variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declares a domain enum together with its wire constants.
///
/// Generates the enum (with `EnumIter`/`Display`), its [`WireEnum`] impl
/// backed by a lazily built static table, and its `WireField` impl.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            strum::EnumIter, strum::Display,
        )]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn wire(self) -> u16 {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            fn table() -> &'static $crate::EnumTable<Self> {
                static TABLE: once_cell::sync::Lazy<$crate::EnumTable<$name>> =
                    once_cell::sync::Lazy::new($crate::EnumTable::build);
                &TABLE
            }
        }

        impl $crate::WireField for $name {
            fn constrain(self, _codec: $crate::FieldCodec) -> Self {
                self
            }

            fn to_wire(&self, codec: $crate::FieldCodec) -> $crate::MappingResult<$crate::WireValue> {
                $crate::field::enum_to_wire(*self, codec)
            }

            fn from_wire(
                value: &$crate::WireValue,
                codec: $crate::FieldCodec,
            ) -> $crate::MappingResult<Self> {
                $crate::field::enum_from_wire(value, codec)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pattern, TransitionLayer, TransitionStyle};

    #[test]
    fn table_lists_every_variant() {
        let table = TransitionStyle::table();
        assert_eq!(table.len(), TransitionStyle::iter().count());
        assert_eq!(table.name(), "TransitionStyle");
    }

    #[test]
    fn unmap_unknown_is_error() {
        let err = Pattern::unmap(200).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownWireValue {
                table: "Pattern",
                raw: 200
            }
        );
    }

    #[test]
    fn unmap_wide_rejects_negative() {
        assert!(Pattern::table().unmap_wide(-1).is_err());
        assert_eq!(Pattern::table().unmap_wide(7).unwrap(), Pattern::CircleIris);
    }

    #[test]
    fn table_is_shared() {
        let a = TransitionStyle::table() as *const _;
        let b = TransitionStyle::table() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn components_reject_unknown_bits() {
        let err = TransitionLayer::components_of(0b10_0000).unwrap_err();
        assert!(matches!(err, MappingError::UnknownFlagBits { bits: 0b10_0000, .. }));
    }

    #[test]
    fn normalize_sorts_and_dedups() {
        let normalized = TransitionLayer::normalize(&[
            TransitionLayer::Key1,
            TransitionLayer::Background,
            TransitionLayer::Key1,
        ]);
        assert_eq!(
            normalized,
            vec![TransitionLayer::Background, TransitionLayer::Key1]
        );
    }
}
