//! Media players and the media pool.

use compare::compare_record;
use mapping::MediaPlayerSource;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaState {
    pub players: Vec<MediaPlayerState>,
    pub stills: Vec<StillSlot>,
    pub clips: Vec<ClipSlot>,
}

/// Selection and playback of one media player.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaPlayerState {
    pub source_type: MediaPlayerSource,
    pub still_index: u8,
    pub clip_index: u8,
    pub playing: bool,
    pub looping: bool,
    pub at_beginning: bool,
    pub clip_frame: u16,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StillSlot {
    pub is_used: bool,
    pub hash: [u8; 16],
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipSlot {
    pub is_used: bool,
    pub name: String,
    pub frame_count: u16,
}

compare_record!(MediaState {
    players: sequence,
    stills: sequence,
    clips: sequence,
});

compare_record!(MediaPlayerState {
    source_type: exact,
    still_index: integer,
    clip_index: integer,
    playing: exact,
    looping: exact,
    at_beginning: exact,
    clip_frame: slack(1),
});

compare_record!(StillSlot {
    is_used: exact,
    hash: bytes,
    file_name: exact,
});

compare_record!(ClipSlot {
    is_used: exact,
    name: exact,
    frame_count: integer,
});
