//! Which sources are on program and preview.

use std::collections::{BTreeMap, BTreeSet};

use command::{GetCommand, SetCommand};
use compare::compare_record;
use mapping::{MixEffectOutput, TransitionLayer, VideoSource};

use crate::mix_effect::MixEffectState;
use crate::tree::MixerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TallyState {
    pub program: bool,
    pub preview: bool,
}

compare_record!(TallyState {
    program: exact,
    preview: exact,
});

/// Computes tally for the main outputs of the first mix-effect block.
///
/// A block's program carries its program input and the fill and cut of every
/// on-air keyer. Its preview carries its preview input and the keyers the next
/// transition would bring on. A source that is another block's output pulls
/// in that block's own sources. Downstream keyers feed the first block only.
///
/// Every reported input gets an entry, tallied or not.
#[must_use]
pub fn compute(state: &MixerState) -> BTreeMap<VideoSource, TallyState> {
    let mut tally: BTreeMap<VideoSource, TallyState> = state
        .settings
        .inputs
        .keys()
        .map(|&source| (source, TallyState::default()))
        .collect();

    let mut program = BTreeSet::new();
    let mut preview = BTreeSet::new();
    let mut visited = BTreeSet::new();
    collect(state, 0, MixEffectOutput::Program, &mut program, &mut visited);
    let mut visited = BTreeSet::new();
    collect(state, 0, MixEffectOutput::Preview, &mut preview, &mut visited);

    for keyer in &state.downstream_keyers {
        let target = if keyer.on_air {
            &mut program
        } else if keyer.tie {
            &mut preview
        } else {
            continue;
        };
        target.insert(keyer.fill_source);
        target.insert(keyer.cut_source);
    }

    for source in program {
        tally.entry(source).or_default().program = true;
    }
    for source in preview {
        tally.entry(source).or_default().preview = true;
    }
    tally
}

/// Recomputes the stored tally.
pub fn refresh(state: &mut MixerState) {
    state.tally = compute(state);
}

fn direct_sources(block: &MixEffectState, output: MixEffectOutput) -> Vec<VideoSource> {
    let mut sources = Vec::new();
    match output {
        MixEffectOutput::Program => {
            sources.push(block.program_input);
            for keyer in block.keyers.iter().filter(|keyer| keyer.on_air) {
                sources.push(keyer.properties.fill_source);
                sources.push(keyer.properties.cut_source);
            }
        }
        MixEffectOutput::Preview => {
            sources.push(block.preview_input);
            for (index, keyer) in block.keyers.iter().enumerate() {
                let selected = u8::try_from(index)
                    .ok()
                    .and_then(TransitionLayer::for_keyer)
                    .is_some_and(|layer| block.transition.next_selection.contains(&layer));
                if selected && !keyer.on_air {
                    sources.push(keyer.properties.fill_source);
                    sources.push(keyer.properties.cut_source);
                }
            }
        }
    }
    sources
}

fn collect(
    state: &MixerState,
    index: usize,
    output: MixEffectOutput,
    into: &mut BTreeSet<VideoSource>,
    visited: &mut BTreeSet<(usize, MixEffectOutput)>,
) {
    if !visited.insert((index, output)) {
        return;
    }
    let Some(block) = state.mix_effects.get(index) else {
        return;
    };
    for source in direct_sources(block, output) {
        into.insert(source);
        if let Some((chained, chained_output)) = source.mix_effect_output() {
            collect(state, usize::from(chained), chained_output, into, visited);
        }
    }
}

/// Returns `true` if applying `command` can change tally.
#[must_use]
pub const fn affected_by(command: &GetCommand) -> bool {
    matches!(
        command,
        GetCommand::Topology(_)
            | GetCommand::InputProperties(_)
            | GetCommand::ProgramInput(_)
            | GetCommand::PreviewInput(_)
            | GetCommand::TransitionProperties(_)
            | GetCommand::KeyerOnAir(_)
            | GetCommand::KeyerBase(_)
            | GetCommand::DownstreamKeyerSources(_)
            | GetCommand::DownstreamKeyerProperties(_)
            | GetCommand::DownstreamKeyerState(_)
    )
}

/// Returns `true` if predicting `command` can change tally.
#[must_use]
pub const fn affected_by_request(command: &SetCommand) -> bool {
    matches!(
        command,
        SetCommand::SetProgramInput(_)
            | SetCommand::SetPreviewInput(_)
            | SetCommand::SetTransitionProperties(_)
            | SetCommand::SetKeyerOnAir(_)
            | SetCommand::SetKeyerFill(_)
            | SetCommand::SetKeyerCut(_)
            | SetCommand::SetDownstreamKeyerFill(_)
            | SetCommand::SetDownstreamKeyerCut(_)
            | SetCommand::SetDownstreamKeyerTie(_)
            | SetCommand::SetDownstreamKeyerOnAir(_)
    )
}

#[cfg(test)]
mod tests {
    use command::Topology;

    use super::*;
    use crate::info::InputState;
    use crate::limits::StateLimits;
    use crate::topology::apply_topology;

    fn two_blocks() -> MixerState {
        let mut state = MixerState::new();
        let topology = Topology {
            mix_effect_keyers: vec![2, 1],
            downstream_keyers: 1,
            ..Topology::default()
        };
        apply_topology(&mut state, &topology, &StateLimits::default()).unwrap();
        for source in [VideoSource::Input1, VideoSource::Input2, VideoSource::Input3] {
            state.settings.inputs.insert(source, InputState::default());
        }
        state
    }

    fn entry(program: bool, preview: bool) -> TallyState {
        TallyState { program, preview }
    }

    #[test]
    fn program_and_preview_inputs() {
        let mut state = two_blocks();
        state.mix_effects[0].program_input = VideoSource::Input1;
        state.mix_effects[0].preview_input = VideoSource::Input2;
        let tally = compute(&state);
        assert_eq!(tally[&VideoSource::Input1], entry(true, false));
        assert_eq!(tally[&VideoSource::Input2], entry(false, true));
        assert_eq!(tally[&VideoSource::Input3], entry(false, false));
    }

    #[test]
    fn on_air_keyer_is_program_and_selected_keyer_is_preview() {
        let mut state = two_blocks();
        let block = &mut state.mix_effects[0];
        block.keyers[0].on_air = true;
        block.keyers[0].properties.fill_source = VideoSource::Color1;
        block.keyers[0].properties.cut_source = VideoSource::Color1;
        block.keyers[1].properties.fill_source = VideoSource::Input3;
        block.keyers[1].properties.cut_source = VideoSource::Input3;
        block.transition.next_selection = vec![TransitionLayer::Background, TransitionLayer::Key2];
        let tally = compute(&state);
        assert!(tally[&VideoSource::Color1].program);
        assert_eq!(tally[&VideoSource::Input3], entry(false, true));
    }

    #[test]
    fn chained_block_pulls_in_sources() {
        let mut state = two_blocks();
        state.mix_effects[0].program_input = VideoSource::Me2Program;
        state.mix_effects[1].program_input = VideoSource::Input3;
        state.mix_effects[1].preview_input = VideoSource::Input2;
        let tally = compute(&state);
        assert!(tally[&VideoSource::Me2Program].program);
        assert!(tally[&VideoSource::Input3].program);
        assert!(!tally[&VideoSource::Input2].program);
    }

    #[test]
    fn chain_cycle_terminates() {
        let mut state = two_blocks();
        state.mix_effects[0].program_input = VideoSource::Me2Program;
        state.mix_effects[1].program_input = VideoSource::Me1Program;
        let tally = compute(&state);
        assert!(tally[&VideoSource::Me1Program].program);
    }

    #[test]
    fn downstream_keyer_on_air_or_tied() {
        let mut state = two_blocks();
        state.downstream_keyers[0].fill_source = VideoSource::Input3;
        state.downstream_keyers[0].cut_source = VideoSource::Input3;
        state.downstream_keyers[0].tie = true;
        assert_eq!(compute(&state)[&VideoSource::Input3], entry(false, true));
        state.downstream_keyers[0].on_air = true;
        assert_eq!(compute(&state)[&VideoSource::Input3], entry(true, false));
    }

    #[test]
    fn relevance() {
        assert!(affected_by(&GetCommand::Topology(Topology::default())));
        assert!(!affected_by(&GetCommand::ColorGenerator(
            command::routing::ColorGenerator::default()
        )));
    }
}
