//! Domain enums and their wire constants.

use crate::table::WireFlags;

wire_enum! {
    /// Style of the next transition.
    pub enum TransitionStyle {
        #[default]
        Mix = 0,
        Dip = 1,
        Wipe = 2,
        Dve = 3,
        Stinger = 4,
    }
}

wire_enum! {
    /// Layer taking part in the next transition. Sent as a flag word.
    pub enum TransitionLayer {
        #[default]
        Background = 1,
        Key1 = 2,
        Key2 = 4,
        Key3 = 8,
        Key4 = 16,
    }
}

impl WireFlags for TransitionLayer {}

impl TransitionLayer {
    /// Returns the layer for an upstream keyer index, if one exists.
    #[must_use]
    pub const fn for_keyer(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Key1),
            1 => Some(Self::Key2),
            2 => Some(Self::Key3),
            3 => Some(Self::Key4),
            _ => None,
        }
    }
}

wire_enum! {
    /// Wipe and pattern-key shape.
    pub enum Pattern {
        #[default]
        LeftToRightBar = 0,
        TopToBottomBar = 1,
        HorizontalBarnDoor = 2,
        VerticalBarnDoor = 3,
        CornersInFourBox = 4,
        RectangleIris = 5,
        DiamondIris = 6,
        CircleIris = 7,
        TopLeftBox = 8,
        TopRightBox = 9,
        BottomRightBox = 10,
        BottomLeftBox = 11,
        TopCentreBox = 12,
        RightCentreBox = 13,
        BottomCentreBox = 14,
        LeftCentreBox = 15,
        TopLeftDiagonal = 16,
        TopRightDiagonal = 17,
    }
}

wire_enum! {
    /// Upstream keyer type.
    pub enum KeyType {
        #[default]
        Luma = 0,
        Chroma = 1,
        Pattern = 2,
        Dve = 3,
    }
}

wire_enum! {
    /// Bevel applied to a DVE key border.
    pub enum BorderBevel {
        #[default]
        None = 0,
        InOut = 1,
        In = 2,
        Out = 3,
    }
}

wire_enum! {
    /// Motion used by the DVE transition.
    pub enum DveEffect {
        #[default]
        SwooshTopLeft = 0,
        SwooshTop = 1,
        SwooshTopRight = 2,
        SwooshLeft = 3,
        SwooshRight = 4,
        SwooshBottomLeft = 5,
        SwooshBottom = 6,
        SwooshBottomRight = 7,
        SpinCwTopLeft = 8,
        SpinCwTopRight = 9,
        SpinCwBottomLeft = 10,
        SpinCwBottomRight = 11,
        SpinCcwTopLeft = 12,
        SpinCcwTopRight = 13,
        SpinCcwBottomLeft = 14,
        SpinCcwBottomRight = 15,
        SqueezeTopLeft = 16,
        SqueezeTop = 17,
        SqueezeTopRight = 18,
        SqueezeLeft = 19,
        SqueezeRight = 20,
        SqueezeBottomLeft = 21,
        SqueezeBottom = 22,
        SqueezeBottomRight = 23,
        PushTopLeft = 24,
        PushTop = 25,
        PushTopRight = 26,
        PushLeft = 27,
        PushRight = 28,
        PushBottomLeft = 29,
        PushBottom = 30,
        PushBottomRight = 31,
        GraphicCwSpin = 32,
        GraphicCcwSpin = 33,
        GraphicLogoWipe = 34,
    }
}

wire_enum! {
    /// Media player feeding the stinger transition.
    pub enum StingerSource {
        #[default]
        None = 0,
        MediaPlayer1 = 1,
        MediaPlayer2 = 2,
        MediaPlayer3 = 3,
        MediaPlayer4 = 4,
    }
}

wire_enum! {
    /// Whether the super-source art sits behind or over the boxes.
    pub enum SuperSourceArtOption {
        #[default]
        Background = 0,
        Foreground = 1,
    }
}

wire_enum! {
    /// Mixing mode of an audio input.
    pub enum AudioMixOption {
        #[default]
        Off = 0,
        On = 1,
        AudioFollowVideo = 2,
    }
}

wire_enum! {
    /// Kind of audio source.
    pub enum AudioSourceType {
        #[default]
        ExternalVideo = 0,
        MediaPlayer = 1,
        ExternalAudio = 2,
    }
}

wire_enum! {
    /// Physical connector of an input. Sent as a flag word.
    pub enum ExternalPortType {
        #[default]
        Sdi = 1,
        Hdmi = 2,
        Component = 4,
        Composite = 8,
        SVideo = 16,
        Xlr = 32,
        AesEbu = 64,
        Rca = 128,
        Internal = 256,
        TsJack = 512,
        Madi = 1024,
        TrsJack = 2048,
    }
}

impl WireFlags for ExternalPortType {}

wire_enum! {
    /// Internal role of an input.
    pub enum InternalPortType {
        #[default]
        External = 0,
        Black = 1,
        ColorBars = 2,
        ColorGenerator = 3,
        MediaPlayerFill = 4,
        MediaPlayerKey = 5,
        SuperSource = 6,
        MeOutput = 128,
        Auxiliary = 129,
        Mask = 130,
    }
}

wire_enum! {
    /// Where an input may be routed. Sent as a flag word.
    pub enum SourceAvailability {
        #[default]
        Auxiliary = 1,
        Multiviewer = 2,
        SuperSourceArt = 4,
        SuperSourceBox = 8,
        KeySource = 16,
    }
}

impl WireFlags for SourceAvailability {}

wire_enum! {
    /// Mix-effect blocks an input is available on. Sent as a flag word.
    pub enum MeAvailability {
        #[default]
        Me1 = 1,
        Me2 = 2,
        Me3 = 4,
        Me4 = 8,
    }
}

impl WireFlags for MeAvailability {}

wire_enum! {
    /// Output video standard.
    pub enum VideoMode {
        #[default]
        N525i5994Ntsc = 0,
        P625i50Pal = 1,
        N525i5994Anamorphic = 2,
        P625i50Anamorphic = 3,
        P720p50 = 4,
        N720p5994 = 5,
        P1080i50 = 6,
        N1080i5994 = 7,
        N1080p2398 = 8,
        N1080p24 = 9,
        P1080p25 = 10,
        N1080p2997 = 11,
        P1080p50 = 12,
        N1080p5994 = 13,
        N4kHdp2398 = 14,
        N4kHdp24 = 15,
        P4kHdp25 = 16,
        N4kHdp2997 = 17,
        P4kHdp5000 = 18,
        N4kHdp5994 = 19,
    }
}

impl VideoMode {
    /// Returns the frame height in lines.
    #[must_use]
    pub const fn lines(self) -> u16 {
        match self {
            Self::N525i5994Ntsc | Self::N525i5994Anamorphic => 525,
            Self::P625i50Pal | Self::P625i50Anamorphic => 625,
            Self::P720p50 | Self::N720p5994 => 720,
            Self::P1080i50
            | Self::N1080i5994
            | Self::N1080p2398
            | Self::N1080p24
            | Self::P1080p25
            | Self::N1080p2997
            | Self::P1080p50
            | Self::N1080p5994 => 1080,
            _ => 2160,
        }
    }
}

wire_enum! {
    /// What a media player is playing from.
    pub enum MediaPlayerSource {
        #[default]
        Still = 1,
        Clip = 2,
    }
}

wire_enum! {
    /// Stored fly-key frame.
    pub enum FlyKeyFrame {
        #[default]
        A = 1,
        B = 2,
    }
}

wire_enum! {
    /// Fly-key frames the keyer currently sits at. Sent as a flag word.
    pub enum FlyKeyLocation {
        #[default]
        A = 1,
        B = 2,
        Full = 4,
        RunToInfinite = 8,
    }
}

impl WireFlags for FlyKeyLocation {}
