//! Declarative builders for command types.
//!
//! Every command declares its wire name, its address fields and an ordered
//! list of payload fields, each paired with the `FieldCodec` that carries it.

/// Declares a masked Set command.
///
/// Generates the mask newtype (one flag per field), the change enum (one
/// variant per field), and the command struct. Values are constrained by
/// their codec when assigned, and assigning a value is the only way a mask
/// bit gets set.
macro_rules! set_command {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $wire:literal {
            address { $($addr:ident: $addr_ty:ty),* $(,)? } => $address:expr,
            mask $mask:ident,
            change $change:ident,
            fields {
                $( $flag:ident = $bit:literal: $variant:ident { $field:ident: $ty:ty => $codec:expr } ),+ $(,)?
            }
        }
    ) => {
        #[doc = concat!("Change mask of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $mask(u32);

        impl $mask {
            $( pub const $flag: Self = Self(1 << $bit); )+

            /// Every field of the command.
            pub const ALL: Self = Self(0 $(| (1 << $bit))+);

            #[must_use]
            pub const fn empty() -> Self {
                Self(0)
            }

            #[must_use]
            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Returns `None` if `bits` names a field the command lacks.
            #[must_use]
            pub const fn from_bits(bits: u32) -> Option<Self> {
                if bits & !Self::ALL.0 == 0 {
                    Some(Self(bits))
                } else {
                    None
                }
            }

            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }
        }

        impl std::ops::BitOr for $mask {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        #[doc = concat!("One field change of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, PartialEq)]
        pub enum $change {
            $( $variant($ty), )+
        }

        impl $change {
            /// Returns the mask bit this change sets.
            #[must_use]
            pub const fn mask(&self) -> $mask {
                match self {
                    $( Self::$variant(_) => $mask::$flag, )+
                }
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $addr: $addr_ty, )*
            mask: $mask,
            $( $field: $ty, )+
        }

        impl $name {
            pub const NAME: $crate::CommandName = $crate::CommandName::new(*$wire);
            pub const FIELD_COUNT: usize = [$(stringify!($field)),+].len();

            /// Creates the command with an empty mask.
            #[must_use]
            pub fn new($($addr: $addr_ty),*) -> Self {
                Self {
                    $( $addr, )*
                    mask: $mask::empty(),
                    $( $field: Default::default(), )+
                }
            }

            #[must_use]
            pub fn address(&self) -> $crate::Address {
                $( let $addr = self.$addr; )*
                $address
            }

            #[must_use]
            pub const fn mask(&self) -> $mask {
                self.mask
            }

            /// Assigns one field and returns the command.
            #[must_use]
            pub fn with(mut self, change: $change) -> Self {
                self.set(change);
                self
            }

            /// Assigns one field, constraining it to the field's range.
            pub fn set(&mut self, change: $change) {
                match change {
                    $(
                        $change::$variant(value) => {
                            self.$field = mapping::WireField::constrain(value, $codec);
                            self.mask.insert($mask::$flag);
                        }
                    )+
                }
            }

            $(
                #[doc = concat!("Returns `", stringify!($field), "` if the mask claims it.")]
                #[must_use]
                pub fn $field(&self) -> Option<&$ty> {
                    self.mask.contains($mask::$flag).then_some(&self.$field)
                }
            )+

            /// Returns the command as the device will store it: every claimed
            /// field encoded and decoded once.
            #[must_use]
            pub fn settled(&self) -> Self {
                let mut settled = self.clone();
                $(
                    if self.mask.contains($mask::$flag) {
                        settled.$field = mapping::WireField::settle(&self.$field, $codec);
                    }
                )+
                settled
            }

            /// Returns the claimed fields in declaration order.
            #[must_use]
            pub fn changes(&self) -> Vec<$change> {
                let mut changes = Vec::new();
                $(
                    if self.mask.contains($mask::$flag) {
                        changes.push($change::$variant(self.$field.clone()));
                    }
                )+
                changes
            }

            pub fn to_payload(&self) -> $crate::CommandResult<$crate::Payload> {
                let mut values = Vec::with_capacity(Self::FIELD_COUNT);
                $(
                    values.push(if self.mask.contains($mask::$flag) {
                        mapping::WireField::to_wire(&self.$field, $codec)?
                    } else {
                        mapping::WireValue::zero_for($codec)
                    });
                )+
                Ok($crate::Payload::new(self.mask.bits(), values))
            }

            /// Decodes a payload; only masked fields are read.
            pub fn from_payload(
                $($addr: $addr_ty,)*
                payload: &$crate::Payload,
            ) -> $crate::CommandResult<Self> {
                let mask = $mask::from_bits(payload.mask).ok_or(
                    $crate::CommandError::UnknownMaskBits {
                        command: Self::NAME,
                        bits: payload.mask & !$mask::ALL.bits(),
                    },
                )?;
                if payload.values.len() != Self::FIELD_COUNT {
                    return Err($crate::CommandError::FieldCountMismatch {
                        command: Self::NAME,
                        expected: Self::FIELD_COUNT,
                        actual: payload.values.len(),
                    });
                }
                let mut command = Self::new($($addr),*);
                let mut values = payload.values.iter();
                $(
                    if let Some(raw) = values.next() {
                        if mask.contains($mask::$flag) {
                            command.$field = <$ty as mapping::WireField>::from_wire(raw, $codec)?;
                        }
                    }
                )+
                command.mask = mask;
                Ok(command)
            }
        }
    };
}

/// Declares a Set command that carries exactly one field and no mask.
macro_rules! plain_set_command {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $wire:literal {
            address { $($addr:ident: $addr_ty:ty),* $(,)? } => $address:expr,
            field { $field:ident: $ty:ty => $codec:expr } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $addr: $addr_ty, )*
            $field: $ty,
        }

        impl $name {
            pub const NAME: $crate::CommandName = $crate::CommandName::new(*$wire);
            pub const FIELD_COUNT: usize = 1;

            /// Creates the command, constraining the value to its range.
            #[must_use]
            pub fn new($($addr: $addr_ty,)* $field: $ty) -> Self {
                Self {
                    $( $addr, )*
                    $field: mapping::WireField::constrain($field, $codec),
                }
            }

            #[must_use]
            pub fn address(&self) -> $crate::Address {
                $( let $addr = self.$addr; )*
                $address
            }

            #[must_use]
            pub const fn $field(&self) -> &$ty {
                &self.$field
            }

            /// Returns the command as the device will store it.
            #[must_use]
            pub fn settled(&self) -> Self {
                Self {
                    $( $addr: self.$addr, )*
                    $field: mapping::WireField::settle(&self.$field, $codec),
                }
            }

            pub fn to_payload(&self) -> $crate::CommandResult<$crate::Payload> {
                let value = mapping::WireField::to_wire(&self.$field, $codec)?;
                Ok($crate::Payload::new(0, vec![value]))
            }

            pub fn from_payload(
                $($addr: $addr_ty,)*
                payload: &$crate::Payload,
            ) -> $crate::CommandResult<Self> {
                if payload.mask != 0 {
                    return Err($crate::CommandError::UnknownMaskBits {
                        command: Self::NAME,
                        bits: payload.mask,
                    });
                }
                match payload.values.as_slice() {
                    [raw] => Ok(Self {
                        $( $addr, )*
                        $field: <$ty as mapping::WireField>::from_wire(raw, $codec)?,
                    }),
                    other => Err($crate::CommandError::FieldCountMismatch {
                        command: Self::NAME,
                        expected: 1,
                        actual: other.len(),
                    }),
                }
            }
        }
    };
}

/// Declares a Get command: a full snapshot of one state node.
macro_rules! get_command {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $wire:literal {
            address { $($addr:ident: $addr_ty:ty),* $(,)? } => $address:expr,
            fields {
                $( $(#[$fmeta:meta])* $field:ident: $ty:ty => $codec:expr ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $( pub $addr: $addr_ty, )*
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        impl $name {
            pub const NAME: $crate::CommandName = $crate::CommandName::new(*$wire);
            pub const FIELD_COUNT: usize = [$(stringify!($field)),+].len();

            #[must_use]
            pub fn address(&self) -> $crate::Address {
                $( let $addr = self.$addr; )*
                $address
            }

            pub fn to_payload(&self) -> $crate::CommandResult<$crate::Payload> {
                let values = vec![
                    $( mapping::WireField::to_wire(&self.$field, $codec)?, )+
                ];
                Ok($crate::Payload::new(0, values))
            }

            pub fn from_payload(
                $($addr: $addr_ty,)*
                payload: &$crate::Payload,
            ) -> $crate::CommandResult<Self> {
                if payload.mask != 0 {
                    return Err($crate::CommandError::UnknownMaskBits {
                        command: Self::NAME,
                        bits: payload.mask,
                    });
                }
                if payload.values.len() != Self::FIELD_COUNT {
                    return Err($crate::CommandError::FieldCountMismatch {
                        command: Self::NAME,
                        expected: Self::FIELD_COUNT,
                        actual: payload.values.len(),
                    });
                }
                let mut values = payload.values.iter();
                let mut next = || {
                    values.next().ok_or($crate::CommandError::FieldCountMismatch {
                        command: Self::NAME,
                        expected: Self::FIELD_COUNT,
                        actual: payload.values.len(),
                    })
                };
                Ok(Self {
                    $( $addr, )*
                    $( $field: <$ty as mapping::WireField>::from_wire(next()?, $codec)?, )+
                })
            }
        }
    };
}
