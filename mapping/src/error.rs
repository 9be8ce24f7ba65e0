//! Mapping errors.

use thiserror::Error;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors that can occur while translating between wire and domain values.
///
/// None of these are recoverable per command: they indicate the peer speaks
/// a protocol revision this build does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Wire constant has no entry in the enum table.
    #[error("unknown wire value {raw} for {table}")]
    UnknownWireValue { table: &'static str, raw: i64 },

    /// Flag word carries bits with no table entry.
    #[error("unknown flag bits 0x{bits:04X} for {table}")]
    UnknownFlagBits { table: &'static str, bits: u16 },

    /// A field codec was paired with a value type it cannot carry.
    #[error("codec {codec} cannot carry a {found} value")]
    TypeMismatch {
        codec: &'static str,
        found: &'static str,
    },

    /// Integer wire value does not fit the domain type.
    #[error("wire value {raw} does not fit {target}")]
    IntegerOverflow { target: &'static str, raw: i64 },
}
