//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These are "boring bags of data"
//! - No GUI code
//! - No process launching
//!
//! 'TagSet' represents the Vorbis comments of ONE FLAC file.

use std::collections::BTreeMap;

/// The well-known Vorbis comment keys that always get a dedicated input.
///
/// Declaration order is display order AND write order on save
/// (`Ord` is derived, so `BTreeMap<Field, _>` iterates in this order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Bpm,
    Genre,
    Title,
    Artist,
    Album,
    Date,
    TrackNumber,
    AlbumArtist,
    Composer,
    Performer,
    Conductor,
    Comment,
    DiscNumber,
    TotalTracks,
    TotalDiscs,
    MusicBrainzTrackId,
    MusicBrainzAlbumId,
    MusicBrainzArtistId,
    Isrc,
}

impl Field {
    pub const ALL: [Field; 19] = [
        Field::Bpm,
        Field::Genre,
        Field::Title,
        Field::Artist,
        Field::Album,
        Field::Date,
        Field::TrackNumber,
        Field::AlbumArtist,
        Field::Composer,
        Field::Performer,
        Field::Conductor,
        Field::Comment,
        Field::DiscNumber,
        Field::TotalTracks,
        Field::TotalDiscs,
        Field::MusicBrainzTrackId,
        Field::MusicBrainzAlbumId,
        Field::MusicBrainzArtistId,
        Field::Isrc,
    ];

    /// Canonical (uppercase) Vorbis comment key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Bpm => "BPM",
            Field::Genre => "GENRE",
            Field::Title => "TITLE",
            Field::Artist => "ARTIST",
            Field::Album => "ALBUM",
            Field::Date => "DATE",
            Field::TrackNumber => "TRACKNUMBER",
            Field::AlbumArtist => "ALBUMARTIST",
            Field::Composer => "COMPOSER",
            Field::Performer => "PERFORMER",
            Field::Conductor => "CONDUCTOR",
            Field::Comment => "COMMENT",
            Field::DiscNumber => "DISCNUMBER",
            Field::TotalTracks => "TOTALTRACKS",
            Field::TotalDiscs => "TOTALDISCS",
            Field::MusicBrainzTrackId => "MUSICBRAINZ_TRACKID",
            Field::MusicBrainzAlbumId => "MUSICBRAINZ_ALBUMID",
            Field::MusicBrainzArtistId => "MUSICBRAINZ_ARTISTID",
            Field::Isrc => "ISRC",
        }
    }

    /// Case-insensitive lookup: the key is uppercased before matching.
    /// Ex: "title" -> Some(Field::Title), "XCUSTOM" -> None
    pub fn from_key(key: &str) -> Option<Field> {
        let upper = key.to_uppercase();
        Field::ALL.into_iter().find(|f| f.key() == upper)
    }
}

/// Tag contents of one file.
///
/// - `well_known`: missing entry == empty value == "unset"
/// - `custom`: raw `KEY=VALUE` lines, kept exactly as read or typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    well_known: BTreeMap<Field, String>,
    pub custom: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a well-known field ("" when unset).
    pub fn get(&self, field: Field) -> &str {
        self.well_known.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Set a well-known field. An empty value unsets it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.well_known.remove(&field);
        } else {
            self.well_known.insert(field, value);
        }
    }

    /// Populated well-known fields, in field order.
    pub fn well_known(&self) -> impl Iterator<Item = (Field, &str)> {
        self.well_known.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn populated_count(&self) -> usize {
        self.well_known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.well_known.is_empty() && self.custom.is_empty()
    }

    pub fn clear(&mut self) {
        self.well_known.clear();
        self.custom.clear();
    }

    /// What a reload would return after saving `self`:
    /// - well-known values trimmed, empty ones dropped
    /// - custom lines trimmed, blank or `=`-less ones dropped
    pub fn normalized(&self) -> TagSet {
        let mut out = TagSet::new();
        for (field, value) in self.well_known() {
            out.set(field, value.trim());
        }
        out.custom = self
            .custom
            .iter()
            .filter_map(|line| writable_custom_line(line))
            .map(str::to_string)
            .collect();
        out
    }
}

/// A custom line is written only if, trimmed, it is non-empty and has an '='.
pub(crate) fn writable_custom_line(line: &str) -> Option<&str> {
    let t = line.trim();
    if !t.is_empty() && t.contains('=') {
        Some(t)
    } else {
        None
    }
}
