//! Engine errors.

use command::{Address, CommandError};
use state::StateError;
use thiserror::Error;

/// Result type for engine operations.
pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Command(#[from] CommandError),

    /// A request addresses a node the device does not have.
    #[error("request for {address} outside the device: {reason}")]
    AddressOutOfRange { address: Address, reason: StateError },
}
