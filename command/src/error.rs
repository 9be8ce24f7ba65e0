//! Command errors.

use mapping::MappingError;
use thiserror::Error;

use crate::CommandName;

/// Result type for command operations.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors raised while building or decoding commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A field failed to map between wire and domain.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Payload carries a different number of fields than the command declares.
    #[error("{command}: expected {expected} fields, got {actual}")]
    FieldCountMismatch {
        command: CommandName,
        expected: usize,
        actual: usize,
    },

    /// Mask claims fields the command does not have.
    #[error("{command}: unknown mask bits 0x{bits:08X}")]
    UnknownMaskBits { command: CommandName, bits: u32 },

    /// Set command requests no change at all.
    #[error("{command}: change mask is empty")]
    EmptyMask { command: CommandName },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_command_name() {
        let err = CommandError::UnknownMaskBits {
            command: CommandName::new(*b"CKCk"),
            bits: 0x40,
        };
        assert_eq!(err.to_string(), "CKCk: unknown mask bits 0x00000040");
    }

    #[test]
    fn mapping_errors_convert() {
        let err: CommandError = MappingError::UnknownWireValue {
            table: "Pattern",
            raw: 42,
        }
        .into();
        assert_eq!(err.to_string(), "unknown wire value 42 for Pattern");
    }
}
