//! Video and audio source identifiers.

use crate::table::WireEnum;

/// Which output of a mix-effect block a source refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MixEffectOutput {
    Program,
    Preview,
}

wire_enum! {
    /// Every video source the switcher can route.
    ///
    /// Mix-effect outputs appear as sources so one block can feed another;
    /// see [`VideoSource::mix_effect_output`].
    pub enum VideoSource {
        #[default]
        Black = 0,
        Input1 = 1,
        Input2 = 2,
        Input3 = 3,
        Input4 = 4,
        Input5 = 5,
        Input6 = 6,
        Input7 = 7,
        Input8 = 8,
        Input9 = 9,
        Input10 = 10,
        Input11 = 11,
        Input12 = 12,
        Input13 = 13,
        Input14 = 14,
        Input15 = 15,
        Input16 = 16,
        Input17 = 17,
        Input18 = 18,
        Input19 = 19,
        Input20 = 20,
        ColorBars = 1000,
        Color1 = 2001,
        Color2 = 2002,
        MediaPlayer1 = 3010,
        MediaPlayer1Key = 3011,
        MediaPlayer2 = 3020,
        MediaPlayer2Key = 3021,
        MediaPlayer3 = 3030,
        MediaPlayer3Key = 3031,
        MediaPlayer4 = 3040,
        MediaPlayer4Key = 3041,
        Key1Mask = 4010,
        Key2Mask = 4020,
        Key3Mask = 4030,
        Key4Mask = 4040,
        Dsk1Mask = 5010,
        Dsk2Mask = 5020,
        SuperSource = 6000,
        CleanFeed1 = 7001,
        CleanFeed2 = 7002,
        Auxiliary1 = 8001,
        Auxiliary2 = 8002,
        Auxiliary3 = 8003,
        Auxiliary4 = 8004,
        Auxiliary5 = 8005,
        Auxiliary6 = 8006,
        Me1Program = 10010,
        Me1Preview = 10011,
        Me2Program = 10020,
        Me2Preview = 10021,
        Me3Program = 10030,
        Me3Preview = 10031,
        Me4Program = 10040,
        Me4Preview = 10041,
    }
}

impl VideoSource {
    /// Returns the mix-effect index and output if this source is an ME output.
    #[must_use]
    pub const fn mix_effect_output(self) -> Option<(u8, MixEffectOutput)> {
        match self {
            Self::Me1Program => Some((0, MixEffectOutput::Program)),
            Self::Me1Preview => Some((0, MixEffectOutput::Preview)),
            Self::Me2Program => Some((1, MixEffectOutput::Program)),
            Self::Me2Preview => Some((1, MixEffectOutput::Preview)),
            Self::Me3Program => Some((2, MixEffectOutput::Program)),
            Self::Me3Preview => Some((2, MixEffectOutput::Preview)),
            Self::Me4Program => Some((3, MixEffectOutput::Program)),
            Self::Me4Preview => Some((3, MixEffectOutput::Preview)),
            _ => None,
        }
    }

    /// Returns the source carrying the given mix-effect output.
    #[must_use]
    pub const fn from_mix_effect_output(me: u8, output: MixEffectOutput) -> Option<Self> {
        match (me, output) {
            (0, MixEffectOutput::Program) => Some(Self::Me1Program),
            (0, MixEffectOutput::Preview) => Some(Self::Me1Preview),
            (1, MixEffectOutput::Program) => Some(Self::Me2Program),
            (1, MixEffectOutput::Preview) => Some(Self::Me2Preview),
            (2, MixEffectOutput::Program) => Some(Self::Me3Program),
            (2, MixEffectOutput::Preview) => Some(Self::Me3Preview),
            (3, MixEffectOutput::Program) => Some(Self::Me4Program),
            (3, MixEffectOutput::Preview) => Some(Self::Me4Preview),
            _ => None,
        }
    }

    /// Returns the numbered external input, if this is one.
    #[must_use]
    pub fn input_number(self) -> Option<u16> {
        let raw = self.wire();
        (1..=20).contains(&raw).then_some(raw)
    }
}

wire_enum! {
    /// Every source feeding the audio mixer.
    pub enum AudioSource {
        #[default]
        Input1 = 1,
        Input2 = 2,
        Input3 = 3,
        Input4 = 4,
        Input5 = 5,
        Input6 = 6,
        Input7 = 7,
        Input8 = 8,
        Input9 = 9,
        Input10 = 10,
        Input11 = 11,
        Input12 = 12,
        Input13 = 13,
        Input14 = 14,
        Input15 = 15,
        Input16 = 16,
        Input17 = 17,
        Input18 = 18,
        Input19 = 19,
        Input20 = 20,
        Xlr = 1001,
        AesEbu = 1101,
        Rca = 1201,
        Mic1 = 1301,
        Mic2 = 1302,
        MediaPlayer1 = 2001,
        MediaPlayer2 = 2002,
        MediaPlayer3 = 2003,
        MediaPlayer4 = 2004,
    }
}
