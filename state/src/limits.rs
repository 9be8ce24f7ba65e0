//! Safety caps on what a topology may announce.

use command::Topology;

use crate::error::{LimitKind, StateError, StateResult};

/// Upper bounds on topology counts, checked before the tree is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateLimits {
    /// Maximum number of mix-effect blocks.
    pub max_mix_effects: usize,
    /// Maximum upstream keyers in any one block.
    pub max_keyers_per_mix_effect: usize,
    /// Maximum number of downstream keyers.
    pub max_downstream_keyers: usize,
    /// Maximum number of auxiliary outputs.
    pub max_auxiliaries: usize,
    /// Maximum number of color generators.
    pub max_color_generators: usize,
    /// Maximum number of super-sources.
    pub max_super_sources: usize,
    /// Maximum boxes per super-source.
    pub max_super_source_boxes: usize,
    /// Maximum number of media players.
    pub max_media_players: usize,
    /// Maximum still slots in the media pool.
    pub max_media_pool_stills: usize,
    /// Maximum clip slots in the media pool.
    pub max_media_pool_clips: usize,
}

impl Default for StateLimits {
    fn default() -> Self {
        Self {
            max_mix_effects: 8,
            max_keyers_per_mix_effect: 16,
            max_downstream_keyers: 8,
            max_auxiliaries: 24,
            max_color_generators: 8,
            max_super_sources: 4,
            max_super_source_boxes: 16,
            max_media_players: 8,
            max_media_pool_stills: 1024,
            max_media_pool_clips: 64,
        }
    }
}

impl StateLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_mix_effects: 4,
            max_keyers_per_mix_effect: 4,
            max_downstream_keyers: 2,
            max_auxiliaries: 6,
            max_color_generators: 2,
            max_super_sources: 2,
            max_super_source_boxes: 4,
            max_media_players: 4,
            max_media_pool_stills: 32,
            max_media_pool_clips: 4,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_mix_effects: usize::MAX,
            max_keyers_per_mix_effect: usize::MAX,
            max_downstream_keyers: usize::MAX,
            max_auxiliaries: usize::MAX,
            max_color_generators: usize::MAX,
            max_super_sources: usize::MAX,
            max_super_source_boxes: usize::MAX,
            max_media_players: usize::MAX,
            max_media_pool_stills: usize::MAX,
            max_media_pool_clips: usize::MAX,
        }
    }

    /// Fails on the first count that exceeds its limit.
    pub fn check(&self, topology: &Topology) -> StateResult<()> {
        let max_keyers = topology
            .mix_effect_keyers
            .iter()
            .copied()
            .max()
            .unwrap_or(0);
        let checks = [
            (LimitKind::MixEffects, self.max_mix_effects, topology.mix_effects()),
            (
                LimitKind::KeyersPerMixEffect,
                self.max_keyers_per_mix_effect,
                usize::from(max_keyers),
            ),
            (
                LimitKind::DownstreamKeyers,
                self.max_downstream_keyers,
                usize::from(topology.downstream_keyers),
            ),
            (
                LimitKind::Auxiliaries,
                self.max_auxiliaries,
                usize::from(topology.auxiliaries),
            ),
            (
                LimitKind::ColorGenerators,
                self.max_color_generators,
                usize::from(topology.color_generators),
            ),
            (
                LimitKind::SuperSources,
                self.max_super_sources,
                usize::from(topology.super_sources),
            ),
            (
                LimitKind::SuperSourceBoxes,
                self.max_super_source_boxes,
                usize::from(topology.super_source_boxes),
            ),
            (
                LimitKind::MediaPlayers,
                self.max_media_players,
                usize::from(topology.media_players),
            ),
            (
                LimitKind::MediaPoolStills,
                self.max_media_pool_stills,
                usize::from(topology.media_pool_stills),
            ),
            (
                LimitKind::MediaPoolClips,
                self.max_media_pool_clips,
                usize::from(topology.media_pool_clips),
            ),
        ];
        for (kind, limit, actual) in checks {
            if actual > limit {
                return Err(StateError::LimitsExceeded {
                    kind,
                    limit,
                    actual,
                });
            }
        }
        Ok(())
    }
}
