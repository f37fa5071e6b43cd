//! Song records, partial updates and search filters

use serde::{Deserialize, Serialize};

/// Public song identifier
pub type SongId = i64;

/// A named track with artist and genre metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub song_id: SongId,
    pub name: String,
    pub artist: String,
    pub genre: String,
}

impl Song {
    pub fn new(
        song_id: SongId,
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            song_id,
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }
}

/// Partial song update.
///
/// Only non-empty values are written: `None` and `Some("")` both leave the
/// field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SongPatch {
    pub(crate) fn apply(self, song: &mut Song) {
        overwrite(&mut song.name, self.name);
        overwrite(&mut song.artist, self.artist);
        overwrite(&mut song.genre, self.genre);
    }
}

/// Replace `field` with `value` when `value` is present and non-empty.
pub(crate) fn overwrite(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = value;
    }
}

/// Search filters for [`crate::Library::search_songs`].
///
/// A song matches when ANY usable filter is a case-insensitive substring of
/// the corresponding field. Filters are OR-combined, and empty strings are
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SongQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_artist(artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            ..Default::default()
        }
    }

    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Default::default()
        }
    }

    /// True when no filter would ever match anything.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.artist, &self.genre]
            .iter()
            .all(|f| f.as_deref().map_or(true, str::is_empty))
    }

    pub(crate) fn matcher(&self) -> SongMatcher {
        SongMatcher {
            name: lowered(&self.name),
            artist: lowered(&self.artist),
            genre: lowered(&self.genre),
        }
    }
}

fn lowered(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase)
}

/// Pre-lowercased filters, built once per search.
pub(crate) struct SongMatcher {
    name: Option<String>,
    artist: Option<String>,
    genre: Option<String>,
}

impl SongMatcher {
    pub(crate) fn matches(&self, song: &Song) -> bool {
        contains(&self.name, &song.name)
            || contains(&self.artist, &song.artist)
            || contains(&self.genre, &song.genre)
    }
}

fn contains(needle: &Option<String>, haystack: &str) -> bool {
    needle
        .as_deref()
        .is_some_and(|n| haystack.to_lowercase().contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_skips_empty_and_missing_fields() {
        let mut song = Song::new(1, "A", "X", "Rock");
        SongPatch {
            name: Some(String::new()),
            artist: None,
            genre: Some("Jazz".into()),
        }
        .apply(&mut song);

        assert_eq!(song, Song::new(1, "A", "X", "Jazz"));
    }

    #[test]
    fn query_matches_case_insensitively() {
        let song = Song::new(1, "Empire State", "JAY-Z", "Hip Hop");
        assert!(SongQuery::by_artist("jay").matcher().matches(&song));
        assert!(SongQuery::by_name("state").matcher().matches(&song));
        assert!(!SongQuery::by_genre("rock").matcher().matches(&song));
    }

    #[test]
    fn query_filters_are_or_combined() {
        let song = Song::new(1, "Blue", "Miles", "Jazz");
        let query = SongQuery {
            name: Some("nope".into()),
            artist: Some("nobody".into()),
            genre: Some("jazz".into()),
        };
        assert!(query.matcher().matches(&song));
    }

    #[test]
    fn empty_filters_match_nothing() {
        let song = Song::new(1, "Blue", "Miles", "Jazz");
        let query = SongQuery {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(query.is_empty());
        assert!(!query.matcher().matches(&song));
        assert!(SongQuery::default().is_empty());
    }
}
