//! Synchronization engine: one device, one writer.

use std::collections::BTreeMap;
use std::fmt;

use command::{Address, CommandName, GetCommand, SetCommand};
use mapping::VideoSource;
use state::{tally, MixerState, NodeKind, StateError, TallyState};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{SyncError, SyncResult};

/// A device report that could not be placed in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolWarning {
    pub command: CommandName,
    pub address: Address,
    pub reason: StateError,
}

impl fmt::Display for ProtocolWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {} dropped: {}", self.command, self.address, self.reason)
    }
}

/// Outcome of ingesting one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    Applied,
    /// The report disagreed with the topology and was dropped.
    Dropped(ProtocolWarning),
}

impl Ingested {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Applies one device report to `state`.
///
/// Reports addressing nodes outside the topology are dropped with a warning
/// rather than failing, as are reports before the topology when
/// `strict_topology` is off. Everything else that goes wrong is an error.
pub fn ingest(
    state: &mut MixerState,
    command: &GetCommand,
    config: &EngineConfig,
) -> SyncResult<Ingested> {
    match state::apply(state, command, &config.limits) {
        Ok(()) => {
            if config.track_tally && tally::affected_by(command) {
                refresh_tally(state);
            }
            Ok(Ingested::Applied)
        }
        Err(StateError::TopologyUnknown) if config.strict_topology => {
            Err(StateError::TopologyUnknown.into())
        }
        Err(
            reason @ (StateError::TopologyUnknown
            | StateError::IndexOutOfRange { .. }
            | StateError::UnknownEntry { .. }),
        ) => {
            let warning = ProtocolWarning {
                command: command.name(),
                address: command.address(),
                reason,
            };
            warn!(
                command = %warning.command,
                address = %warning.address,
                reason = %warning.reason,
                "protocol inconsistency, report dropped"
            );
            Ok(Ingested::Dropped(warning))
        }
        Err(err) => Err(err.into()),
    }
}

/// Checks a request against the device and returns it ready to send.
///
/// The command's values were already constrained when it was built, so this
/// only rejects empty masks and addresses the device does not have.
pub fn request(state: &MixerState, command: impl Into<SetCommand>) -> SyncResult<SetCommand> {
    let command = command.into();
    command.validate()?;
    let address = command.address();
    state
        .validate_address(&address)
        .and_then(|()| check_equipment(state, &command))
        .map_err(|reason| match reason {
            StateError::TopologyUnknown => SyncError::State(reason),
            reason => SyncError::AddressOutOfRange { address, reason },
        })?;
    Ok(command)
}

/// Stinger and DVE settings exist only on some blocks.
fn check_equipment(state: &MixerState, command: &SetCommand) -> Result<(), StateError> {
    let (me, kind, present, count) = match command {
        SetCommand::SetStingerTransition(set) => {
            let block = state.mix_effect(set.mix_effect)?;
            let count = state.topology()?.stingers;
            (set.mix_effect, NodeKind::Stinger, block.transition.stinger.is_some(), count)
        }
        SetCommand::SetDveTransition(set) => {
            let block = state.mix_effect(set.mix_effect)?;
            let count = state.topology()?.dves;
            (set.mix_effect, NodeKind::Dve, block.transition.dve.is_some(), count)
        }
        _ => return Ok(()),
    };
    if present {
        Ok(())
    } else {
        Err(StateError::IndexOutOfRange {
            kind,
            index: me.index(),
            count: usize::from(count),
        })
    }
}

fn refresh_tally(state: &mut MixerState) {
    let tally = tally::compute(state);
    if tally != state.tally {
        let on_program = tally.values().filter(|entry| entry.program).count();
        let on_preview = tally.values().filter(|entry| entry.preview).count();
        debug!(on_program, on_preview, "tally changed");
        state.tally = tally;
    }
}

/// Owns the mirrored state of one device.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    state: MixerState,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: MixerState::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &MixerState {
        &self.state
    }

    /// Returns a deep copy of the current tree.
    #[must_use]
    pub fn snapshot(&self) -> MixerState {
        self.state.clone()
    }

    #[must_use]
    pub const fn tally(&self) -> &BTreeMap<VideoSource, TallyState> {
        &self.state.tally
    }

    pub fn ingest(&mut self, command: &GetCommand) -> SyncResult<Ingested> {
        ingest(&mut self.state, command, &self.config)
    }

    /// Ingests reports in order and collects the warnings. Stops at the
    /// first error.
    pub fn ingest_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a GetCommand>,
    ) -> SyncResult<Vec<ProtocolWarning>> {
        let mut warnings = Vec::new();
        for command in commands {
            if let Ingested::Dropped(warning) = self.ingest(command)? {
                warnings.push(warning);
            }
        }
        Ok(warnings)
    }

    pub fn request(&self, command: impl Into<SetCommand>) -> SyncResult<SetCommand> {
        request(&self.state, command)
    }

    /// Applies a request optimistically. The device's next report for the
    /// same node overwrites it.
    pub fn predict(&mut self, command: &SetCommand) -> SyncResult<()> {
        let command = self.request(command.clone())?;
        state::predict(&mut self.state, &command)?;
        if self.config.track_tally && tally::affected_by_request(&command) {
            refresh_tally(&mut self.state);
        }
        Ok(())
    }

    /// Returns the tree the device should report once `command` takes effect.
    pub fn expected_after(&self, command: &SetCommand) -> SyncResult<MixerState> {
        let mut expected = self.snapshot();
        let command = request(&expected, command.clone())?;
        state::predict(&mut expected, &command)?;
        if self.config.track_tally && tally::affected_by_request(&command) {
            refresh_tally(&mut expected);
        }
        Ok(expected)
    }
}
