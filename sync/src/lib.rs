//! Synchronization engine for a mirrored switcher state.
//!
//! The engine owns one [`state::MixerState`]. Device reports are ingested in
//! order; reports that disagree with the announced topology are dropped with
//! a [`ProtocolWarning`] instead of failing the connection. Requests are
//! checked against the tree before they go out, and [`Engine::expected_after`]
//! predicts what the device should report once a request takes effect.
//!
//! The engine is single-writer and synchronous. Callers serialize ingestion.

mod config;
mod engine;
mod error;

pub use config::EngineConfig;
pub use engine::{ingest, request, Engine, Ingested, ProtocolWarning};
pub use error::{SyncError, SyncResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Engine::default();
        let _ = EngineConfig::default();
        let _: SyncResult<()> = Ok(());
    }
}
