//! Closed sets of every Get and Set command.

use crate::audio::{AudioInput, AudioMaster, AudioMonitor, SetAudioInput, SetAudioMaster, SetAudioMonitor};
use crate::downstream::{
    DownstreamKeyerProperties, DownstreamKeyerSources, DownstreamKeyerState, SetDownstreamKeyerCut,
    SetDownstreamKeyerFill, SetDownstreamKeyerGeneral, SetDownstreamKeyerMask,
    SetDownstreamKeyerOnAir, SetDownstreamKeyerRate, SetDownstreamKeyerTie,
};
use crate::info::{ProductName, Topology, Version};
use crate::keyer::{
    ChromaKey, DveKey, FlyKeyFrameProperties, FlyKeyState, KeyerBase, KeyerOnAir, LumaKey,
    PatternKey, SetChromaKey, SetDveKey, SetKeyerCut, SetKeyerFill, SetKeyerMask, SetKeyerOnAir,
    SetKeyerType, SetLumaKey, SetPatternKey,
};
use crate::media::{
    MediaPlayerSelection, MediaPlayerStatus, MediaPoolClip, MediaPoolStill,
    SetMediaPlayerSelection, SetMediaPlayerStatus,
};
use crate::mix_effect::{
    DipTransition, DveTransition, FadeToBlackRate, FadeToBlackState, MixTransition, PreviewInput,
    PreviewTransition, ProgramInput, SetDipTransition, SetDveTransition, SetFadeToBlackRate,
    SetMixTransition, SetPreviewInput, SetPreviewTransition, SetProgramInput,
    SetStingerTransition, SetTransitionPosition, SetTransitionProperties, SetWipeTransition,
    StingerTransition, TransitionPosition, TransitionProperties, WipeTransition,
};
use crate::routing::{AuxiliarySource, ColorGenerator, SetAuxiliarySource, SetColorGenerator};
use crate::settings::{CurrentVideoMode, InputProperties, SetInputProperties, SetVideoMode};
use crate::super_source::{
    SetSuperSourceBox, SetSuperSourceProperties, SuperSourceBox, SuperSourceProperties,
};
use crate::{Address, CommandError, CommandName, CommandResult, Payload};

macro_rules! get_catalog {
    ($($variant:ident),+ $(,)?) => {
        /// Every command the device sends.
        #[derive(Debug, Clone, PartialEq)]
        pub enum GetCommand {
            $( $variant($variant), )+
        }

        impl GetCommand {
            #[must_use]
            pub const fn name(&self) -> CommandName {
                match self {
                    $( Self::$variant(_) => $variant::NAME, )+
                }
            }

            #[must_use]
            pub fn address(&self) -> Address {
                match self {
                    $( Self::$variant(command) => command.address(), )+
                }
            }

            pub fn to_payload(&self) -> CommandResult<Payload> {
                match self {
                    $( Self::$variant(command) => command.to_payload(), )+
                }
            }
        }

        $(
            impl From<$variant> for GetCommand {
                fn from(command: $variant) -> Self {
                    Self::$variant(command)
                }
            }
        )+
    };
}

macro_rules! set_catalog {
    (
        masked { $($masked:ident),+ $(,)? }
        plain { $($plain:ident),+ $(,)? }
    ) => {
        /// Every command the client sends.
        #[derive(Debug, Clone, PartialEq)]
        pub enum SetCommand {
            $( $masked($masked), )+
            $( $plain($plain), )+
        }

        impl SetCommand {
            #[must_use]
            pub const fn name(&self) -> CommandName {
                match self {
                    $( Self::$masked(_) => $masked::NAME, )+
                    $( Self::$plain(_) => $plain::NAME, )+
                }
            }

            #[must_use]
            pub fn address(&self) -> Address {
                match self {
                    $( Self::$masked(command) => command.address(), )+
                    $( Self::$plain(command) => command.address(), )+
                }
            }

            /// Returns the raw change mask. Single-field commands report zero.
            #[must_use]
            pub const fn mask_bits(&self) -> u32 {
                match self {
                    $( Self::$masked(command) => command.mask().bits(), )+
                    $( Self::$plain(_) => 0, )+
                }
            }

            /// Returns `true` if the command carries a mask.
            #[must_use]
            pub const fn is_masked(&self) -> bool {
                match self {
                    $( Self::$masked(_) => true, )+
                    $( Self::$plain(_) => false, )+
                }
            }

            /// Fails if a masked command requests no change.
            pub fn validate(&self) -> CommandResult<()> {
                if self.is_masked() && self.mask_bits() == 0 {
                    return Err(CommandError::EmptyMask { command: self.name() });
                }
                Ok(())
            }

            /// Returns the command with every claimed field as the device
            /// will store it after wire quantization.
            #[must_use]
            pub fn settled(&self) -> Self {
                match self {
                    $( Self::$masked(command) => Self::$masked(command.settled()), )+
                    $( Self::$plain(command) => Self::$plain(command.settled()), )+
                }
            }

            pub fn to_payload(&self) -> CommandResult<Payload> {
                match self {
                    $( Self::$masked(command) => command.to_payload(), )+
                    $( Self::$plain(command) => command.to_payload(), )+
                }
            }
        }

        $(
            impl From<$masked> for SetCommand {
                fn from(command: $masked) -> Self {
                    Self::$masked(command)
                }
            }
        )+
        $(
            impl From<$plain> for SetCommand {
                fn from(command: $plain) -> Self {
                    Self::$plain(command)
                }
            }
        )+
    };
}

get_catalog! {
    Version,
    ProductName,
    Topology,
    CurrentVideoMode,
    InputProperties,
    ProgramInput,
    PreviewInput,
    TransitionProperties,
    PreviewTransition,
    TransitionPosition,
    MixTransition,
    DipTransition,
    WipeTransition,
    StingerTransition,
    DveTransition,
    FadeToBlackRate,
    FadeToBlackState,
    KeyerOnAir,
    KeyerBase,
    LumaKey,
    ChromaKey,
    PatternKey,
    DveKey,
    FlyKeyState,
    FlyKeyFrameProperties,
    DownstreamKeyerSources,
    DownstreamKeyerProperties,
    DownstreamKeyerState,
    AuxiliarySource,
    ColorGenerator,
    SuperSourceProperties,
    SuperSourceBox,
    AudioInput,
    AudioMaster,
    AudioMonitor,
    MediaPlayerSelection,
    MediaPlayerStatus,
    MediaPoolStill,
    MediaPoolClip,
}

set_catalog! {
    masked {
        SetInputProperties,
        SetTransitionProperties,
        SetDipTransition,
        SetWipeTransition,
        SetStingerTransition,
        SetDveTransition,
        SetKeyerType,
        SetKeyerMask,
        SetLumaKey,
        SetChromaKey,
        SetPatternKey,
        SetDveKey,
        SetDownstreamKeyerGeneral,
        SetDownstreamKeyerMask,
        SetColorGenerator,
        SetSuperSourceProperties,
        SetSuperSourceBox,
        SetAudioInput,
        SetAudioMaster,
        SetAudioMonitor,
        SetMediaPlayerSelection,
        SetMediaPlayerStatus,
    }
    plain {
        SetVideoMode,
        SetProgramInput,
        SetPreviewInput,
        SetPreviewTransition,
        SetTransitionPosition,
        SetMixTransition,
        SetFadeToBlackRate,
        SetKeyerOnAir,
        SetKeyerFill,
        SetKeyerCut,
        SetDownstreamKeyerFill,
        SetDownstreamKeyerCut,
        SetDownstreamKeyerTie,
        SetDownstreamKeyerRate,
        SetDownstreamKeyerOnAir,
        SetAuxiliarySource,
    }
}
