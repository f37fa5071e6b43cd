//! Playlist views and sort keys

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;
use crate::song::Song;

/// Public playlist identifier
pub type PlaylistId = i64;

/// Field a playlist can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Artist,
    Genre,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Artist => "artist",
            Self::Genre => "genre",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Name, Self::Artist, Self::Genre]
    }

    /// Compare two songs on this key.
    ///
    /// Plain `str` ordering, i.e. lexicographic on code points.
    pub fn compare(&self, a: &Song, b: &Song) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Artist => a.artist.cmp(&b.artist),
            Self::Genre => a.genre.cmp(&b.genre),
        }
    }
}

impl FromStr for SortKey {
    type Err = LibraryError;

    /// Keys are matched exactly; `"Name"` is not a valid key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "artist" => Ok(Self::Artist),
            "genre" => Ok(Self::Genre),
            other => Err(LibraryError::invalid_argument("sort key", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of a playlist with its songs resolved in order.
///
/// Songs deleted from the library after being added still appear here with
/// their last-known fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistView {
    pub playlist_id: PlaylistId,
    pub name: String,
    pub songs: Vec<Song>,
}

impl PlaylistView {
    /// Song ids in playlist order
    pub fn song_ids(&self) -> Vec<i64> {
        self.songs.iter().map(|s| s.song_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        for key in SortKey::all() {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), *key);
        }
    }

    #[test]
    fn rejects_unknown_key() {
        let err = "tempo".parse::<SortKey>().unwrap_err();
        assert_eq!(err, LibraryError::invalid_argument("sort key", "tempo"));
        assert!("Name".parse::<SortKey>().is_err());
    }

    #[test]
    fn default_key_is_name() {
        assert_eq!(SortKey::default(), SortKey::Name);
    }
}
