//! Typed command model for the mixstate switcher core.
//!
//! The device reports state through Get commands: each one is a full snapshot
//! of a single state node. The client asks for changes through Set commands:
//! each one is a partial update carrying an address and a change mask.
//!
//! # Design Principles
//!
//! - **A mask bit means an assignment** - the only way to set a bit is to
//!   assign its field, so a Set command never claims a field nobody touched.
//! - **Range policy at construction** - values are clamped or wrapped when
//!   assigned, using the field's codec.
//! - **Single-field commands stay single-field** - commands the protocol
//!   defines without a mask take their one value at construction.
//! - **Construction is pure** - nothing here touches the state tree.

#[macro_use]
mod macros;

pub mod audio;
mod catalog;
pub mod downstream;
mod error;
pub mod info;
pub mod keyer;
pub mod media;
pub mod mix_effect;
pub mod routing;
pub mod settings;
pub mod super_source;
mod types;

pub use catalog::{GetCommand, SetCommand};
pub use error::{CommandError, CommandResult};
pub use info::Topology;
pub use types::{
    Address, AuxiliaryId, ColorGeneratorId, CommandName, DownstreamKeyerId, KeyerId,
    MediaPlayerId, MixEffectId, Payload, SuperSourceBoxId, SuperSourceId,
};
