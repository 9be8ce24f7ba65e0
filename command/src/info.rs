//! Device identity and topology.

use mapping::{FieldCodec, WireField, WireValue};

use crate::{Address, CommandError, CommandName, CommandResult, MixEffectId, Payload};

get_command! {
    /// Protocol version spoken by the device.
    pub struct Version: b"_ver" {
        address {} => Address::Global,
        fields {
            major: u16 => FieldCodec::WORD,
            minor: u16 => FieldCodec::WORD,
        }
    }
}

get_command! {
    pub struct ProductName: b"_pin" {
        address {} => Address::Global,
        fields {
            name: String => FieldCodec::PRODUCT_NAME,
        }
    }
}

/// Instance counts of every indexed sub-system.
///
/// Announced once per connection before any addressed command. The state tree
/// takes its shape from this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    /// Upstream keyer count of each mix-effect block.
    pub mix_effect_keyers: Vec<u8>,
    /// Downstream keyers, feeding the first block.
    pub downstream_keyers: u8,
    /// Auxiliary outputs.
    pub auxiliaries: u8,
    /// Color generators.
    pub color_generators: u8,
    /// Mix-effect blocks with a stinger transition (counted from the first).
    pub stingers: u8,
    /// Mix-effect blocks with a DVE transition (counted from the first).
    pub dves: u8,
    /// Super-source compositors.
    pub super_sources: u8,
    /// Boxes per super-source.
    pub super_source_boxes: u8,
    /// Media players.
    pub media_players: u8,
    /// Still slots in the media pool.
    pub media_pool_stills: u16,
    /// Clip slots in the media pool.
    pub media_pool_clips: u8,
}

/// Scalar counts following the per-block keyer counts.
const SCALAR_FIELDS: usize = 10;

impl Topology {
    pub const NAME: CommandName = CommandName::new(*b"_top");

    #[must_use]
    pub const fn address(&self) -> Address {
        Address::Global
    }

    /// Returns the number of mix-effect blocks.
    #[must_use]
    pub fn mix_effects(&self) -> usize {
        self.mix_effect_keyers.len()
    }

    /// Returns the keyer count of one block, or `None` past the last block.
    #[must_use]
    pub fn keyers(&self, mix_effect: MixEffectId) -> Option<u8> {
        self.mix_effect_keyers.get(mix_effect.index()).copied()
    }

    fn scalars(&self) -> [i64; SCALAR_FIELDS] {
        [
            i64::from(self.downstream_keyers),
            i64::from(self.auxiliaries),
            i64::from(self.color_generators),
            i64::from(self.stingers),
            i64::from(self.dves),
            i64::from(self.super_sources),
            i64::from(self.super_source_boxes),
            i64::from(self.media_players),
            i64::from(self.media_pool_stills),
            i64::from(self.media_pool_clips),
        ]
    }

    /// Encodes as the block count, each block's keyer count, then the
    /// scalar counts.
    pub fn to_payload(&self) -> CommandResult<Payload> {
        let blocks = u8::try_from(self.mix_effect_keyers.len()).map_err(|_| {
            mapping::MappingError::IntegerOverflow {
                target: "u8",
                raw: self.mix_effect_keyers.len() as i64,
            }
        })?;
        let mut values = Vec::with_capacity(1 + self.mix_effect_keyers.len() + SCALAR_FIELDS);
        values.push(WireValue::Int(i64::from(blocks)));
        values.extend(
            self.mix_effect_keyers
                .iter()
                .map(|&keyers| WireValue::Int(i64::from(keyers))),
        );
        values.extend(self.scalars().into_iter().map(WireValue::Int));
        Ok(Payload::new(0, values))
    }

    pub fn from_payload(payload: &Payload) -> CommandResult<Self> {
        if payload.mask != 0 {
            return Err(CommandError::UnknownMaskBits {
                command: Self::NAME,
                bits: payload.mask,
            });
        }
        let (first, rest) = payload
            .values
            .split_first()
            .ok_or(CommandError::FieldCountMismatch {
                command: Self::NAME,
                expected: 1 + SCALAR_FIELDS,
                actual: 0,
            })?;
        let blocks = usize::from(u8::from_wire(first, FieldCodec::INDEX)?);
        if rest.len() != blocks + SCALAR_FIELDS {
            return Err(CommandError::FieldCountMismatch {
                command: Self::NAME,
                expected: 1 + blocks + SCALAR_FIELDS,
                actual: payload.values.len(),
            });
        }
        let (keyers, scalars) = rest.split_at(blocks);
        let byte = |value: &WireValue| u8::from_wire(value, FieldCodec::INDEX);
        Ok(Self {
            mix_effect_keyers: keyers.iter().map(byte).collect::<Result<_, _>>()?,
            downstream_keyers: byte(&scalars[0])?,
            auxiliaries: byte(&scalars[1])?,
            color_generators: byte(&scalars[2])?,
            stingers: byte(&scalars[3])?,
            dves: byte(&scalars[4])?,
            super_sources: byte(&scalars[5])?,
            super_source_boxes: byte(&scalars[6])?,
            media_players: byte(&scalars[7])?,
            media_pool_stills: u16::from_wire(&scalars[8], FieldCodec::WORD)?,
            media_pool_clips: byte(&scalars[9])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Topology {
        Topology {
            mix_effect_keyers: vec![4, 2],
            downstream_keyers: 2,
            auxiliaries: 6,
            color_generators: 2,
            stingers: 1,
            dves: 1,
            super_sources: 1,
            super_source_boxes: 4,
            media_players: 2,
            media_pool_stills: 32,
            media_pool_clips: 2,
        }
    }

    #[test]
    fn payload_roundtrip() {
        let topology = sample();
        let payload = topology.to_payload().unwrap();
        assert_eq!(payload.values.len(), 1 + 2 + SCALAR_FIELDS);
        assert_eq!(Topology::from_payload(&payload).unwrap(), topology);
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let mut payload = sample().to_payload().unwrap();
        payload.values.pop();
        assert!(matches!(
            Topology::from_payload(&payload),
            Err(CommandError::FieldCountMismatch { .. })
        ));
        assert!(Topology::from_payload(&Payload::default()).is_err());
    }

    #[test]
    fn keyers_per_block() {
        let topology = sample();
        assert_eq!(topology.mix_effects(), 2);
        assert_eq!(topology.keyers(MixEffectId::new(1)), Some(2));
        assert_eq!(topology.keyers(MixEffectId::new(2)), None);
    }
}
