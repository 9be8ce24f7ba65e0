//! Media player and media pool commands.

use mapping::{FieldCodec, MediaPlayerSource};

use crate::{Address, MediaPlayerId};

get_command! {
    /// What a media player is loaded with.
    pub struct MediaPlayerSelection: b"MPCE" {
        address { player: MediaPlayerId } => Address::MediaPlayer(player),
        fields {
            source_type: MediaPlayerSource => FieldCodec::ENUM,
            still_index: u8 => FieldCodec::INDEX,
            clip_index: u8 => FieldCodec::INDEX,
        }
    }
}

set_command! {
    pub struct SetMediaPlayerSelection: b"MPSS" {
        address { player: MediaPlayerId } => Address::MediaPlayer(player),
        mask MediaPlayerSelectionMask,
        change MediaPlayerSelectionChange,
        fields {
            SOURCE_TYPE = 0: SourceType { source_type: MediaPlayerSource => FieldCodec::ENUM },
            STILL_INDEX = 1: StillIndex { still_index: u8 => FieldCodec::INDEX },
            CLIP_INDEX = 2: ClipIndex { clip_index: u8 => FieldCodec::INDEX },
        }
    }
}

get_command! {
    /// Clip playback state.
    pub struct MediaPlayerStatus: b"RCPS" {
        address { player: MediaPlayerId } => Address::MediaPlayer(player),
        fields {
            playing: bool => FieldCodec::BOOL,
            looping: bool => FieldCodec::BOOL,
            at_beginning: bool => FieldCodec::BOOL,
            clip_frame: u16 => FieldCodec::FRAMES,
        }
    }
}

set_command! {
    pub struct SetMediaPlayerStatus: b"SCPS" {
        address { player: MediaPlayerId } => Address::MediaPlayer(player),
        mask MediaPlayerStatusMask,
        change MediaPlayerStatusChange,
        fields {
            PLAYING = 0: Playing { playing: bool => FieldCodec::BOOL },
            LOOPING = 1: Looping { looping: bool => FieldCodec::BOOL },
            AT_BEGINNING = 2: AtBeginning { at_beginning: bool => FieldCodec::BOOL },
            CLIP_FRAME = 3: ClipFrame { clip_frame: u16 => FieldCodec::FRAMES },
        }
    }
}

get_command! {
    /// One still slot of the media pool.
    pub struct MediaPoolStill: b"MPfe" {
        address { slot: u16 } => Address::MediaPoolStill(slot),
        fields {
            is_used: bool => FieldCodec::BOOL,
            hash: [u8; 16] => FieldCodec::HASH,
            file_name: String => FieldCodec::FILE_NAME,
        }
    }
}

get_command! {
    /// One clip slot of the media pool.
    pub struct MediaPoolClip: b"MPCS" {
        address { slot: u8 } => Address::MediaPoolClip(slot),
        fields {
            is_used: bool => FieldCodec::BOOL,
            name: String => FieldCodec::FILE_NAME,
            frame_count: u16 => FieldCodec::FRAMES,
        }
    }
}

#[cfg(test)]
mod tests {
    use mapping::WireValue;

    use super::*;

    #[test]
    fn still_payload_keeps_hash_bytes() {
        let still = MediaPoolStill {
            slot: 4,
            is_used: true,
            hash: [0xAB; 16],
            file_name: "logo.png".into(),
        };
        let payload = still.to_payload().unwrap();
        assert_eq!(payload.values[1], WireValue::Bytes(vec![0xAB; 16]));
        assert_eq!(MediaPoolStill::from_payload(4, &payload).unwrap(), still);
    }

    #[test]
    fn selection_changes_in_order() {
        let command = SetMediaPlayerSelection::new(MediaPlayerId::new(1))
            .with(MediaPlayerSelectionChange::StillIndex(3))
            .with(MediaPlayerSelectionChange::SourceType(MediaPlayerSource::Still));
        assert_eq!(
            command.changes(),
            vec![
                MediaPlayerSelectionChange::SourceType(MediaPlayerSource::Still),
                MediaPlayerSelectionChange::StillIndex(3),
            ]
        );
    }
}
