//! In-memory song and playlist library
//!
//! Holds two keyed collections:
//! - songs: `song_id -> record`
//! - playlists: `playlist_id -> ordered record references`
//!
//! Song records live in an arena. Playlists point at arena slots rather than
//! song ids, so an update to a song shows up in every playlist holding it,
//! and deleting a song leaves existing playlist entries intact (they keep the
//! last-known record). Records reachable from neither side are released.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::error::{LibraryError, Result};
use crate::playlist::{PlaylistId, PlaylistView, SortKey};
use crate::song::{overwrite, Song, SongId, SongPatch, SongQuery};

/// Arena key for a song record
/// Slots are handed out in increasing order, so they double as insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Slot(u64);

#[derive(Debug, Clone)]
struct PlaylistEntry {
    name: String,
    tracks: Vec<Slot>,
}

/// Process-wide store for songs and playlists.
///
/// Not synchronized: callers sharing a library across tasks wrap it in a
/// lock and hold the guard for the whole operation.
#[derive(Debug, Default)]
pub struct Library {
    songs: BTreeMap<SongId, Slot>,
    playlists: BTreeMap<PlaylistId, PlaylistEntry>,
    records: HashMap<Slot, Song>,
    next_slot: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    // ---------------------------------------------------------------------
    // Songs
    // ---------------------------------------------------------------------

    /// Insert a new song. Fails with `DuplicateKey` if the id is taken.
    pub fn create_song(&mut self, song: Song) -> Result<()> {
        let id = song.song_id;
        if self.songs.contains_key(&id) {
            return Err(LibraryError::duplicate_song(id));
        }

        let slot = Slot(self.next_slot);
        self.next_slot += 1;
        self.records.insert(slot, song);
        self.songs.insert(id, slot);

        debug!(song_id = id, "song created");
        Ok(())
    }

    pub fn song(&self, id: SongId) -> Result<&Song> {
        self.songs
            .get(&id)
            .and_then(|slot| self.records.get(slot))
            .ok_or_else(|| LibraryError::song_not_found(id))
    }

    /// Apply a partial update in place. Empty values are ignored.
    pub fn update_song(&mut self, id: SongId, patch: SongPatch) -> Result<&Song> {
        let song = self
            .songs
            .get(&id)
            .and_then(|slot| self.records.get_mut(slot))
            .ok_or_else(|| LibraryError::song_not_found(id))?;

        patch.apply(song);
        debug!(song_id = id, "song updated");
        Ok(&*song)
    }

    /// Remove a song from the library, returning its last state.
    ///
    /// Playlists that already reference the song keep it.
    pub fn delete_song(&mut self, id: SongId) -> Result<Song> {
        let slot = self
            .songs
            .remove(&id)
            .ok_or_else(|| LibraryError::song_not_found(id))?;

        let song = self
            .records
            .get(&slot)
            .cloned()
            .ok_or_else(|| LibraryError::song_not_found(id))?;
        self.release_orphans();

        debug!(song_id = id, "song deleted");
        Ok(song)
    }

    /// Songs matching any of the query's filters, in insertion order.
    ///
    /// A song deleted and created again counts as newly inserted.
    pub fn search_songs(&self, query: &SongQuery) -> Vec<Song> {
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = query.matcher();
        let mut hits: Vec<(Slot, &Song)> = self
            .songs
            .values()
            .filter_map(|slot| self.records.get(slot).map(|song| (*slot, song)))
            .filter(|(_, song)| matcher.matches(song))
            .collect();
        hits.sort_unstable_by_key(|(slot, _)| *slot);

        hits.into_iter().map(|(_, song)| song.clone()).collect()
    }

    // ---------------------------------------------------------------------
    // Playlists
    // ---------------------------------------------------------------------

    /// Create an empty playlist. Fails with `DuplicateKey` if the id is taken.
    pub fn create_playlist(&mut self, id: PlaylistId, name: impl Into<String>) -> Result<()> {
        if self.playlists.contains_key(&id) {
            return Err(LibraryError::duplicate_playlist(id));
        }

        self.playlists.insert(
            id,
            PlaylistEntry {
                name: name.into(),
                tracks: Vec::new(),
            },
        );

        debug!(playlist_id = id, "playlist created");
        Ok(())
    }

    /// Snapshot of a playlist with its songs resolved in order.
    pub fn playlist(&self, id: PlaylistId) -> Result<PlaylistView> {
        let entry = self.entry(id)?;
        Ok(PlaylistView {
            playlist_id: id,
            name: entry.name.clone(),
            songs: entry
                .tracks
                .iter()
                .filter_map(|slot| self.records.get(slot))
                .cloned()
                .collect(),
        })
    }

    /// Rename a playlist. An empty name leaves the current one in place.
    pub fn rename_playlist(&mut self, id: PlaylistId, name: impl Into<String>) -> Result<()> {
        let entry = self.entry_mut(id)?;
        overwrite(&mut entry.name, Some(name.into()));

        debug!(playlist_id = id, "playlist renamed");
        Ok(())
    }

    pub fn delete_playlist(&mut self, id: PlaylistId) -> Result<()> {
        self.playlists
            .remove(&id)
            .ok_or_else(|| LibraryError::playlist_not_found(id))?;
        self.release_orphans();

        debug!(playlist_id = id, "playlist deleted");
        Ok(())
    }

    /// Append a song reference. The same song may appear more than once.
    pub fn add_song_to_playlist(&mut self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        if !self.playlists.contains_key(&playlist_id) {
            return Err(LibraryError::playlist_not_found(playlist_id));
        }
        let slot = *self
            .songs
            .get(&song_id)
            .ok_or_else(|| LibraryError::song_not_found(song_id))?;

        self.entry_mut(playlist_id)?.tracks.push(slot);

        debug!(playlist_id, song_id, "song added to playlist");
        Ok(())
    }

    /// Drop every entry whose song id is `song_id`, returning how many were
    /// removed. Removing a song the playlist does not hold is a no-op.
    pub fn remove_song_from_playlist(
        &mut self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<usize> {
        let entry = self
            .playlists
            .get_mut(&playlist_id)
            .ok_or_else(|| LibraryError::playlist_not_found(playlist_id))?;

        let records = &self.records;
        let before = entry.tracks.len();
        entry
            .tracks
            .retain(|slot| records.get(slot).map_or(false, |s| s.song_id != song_id));
        let removed = before - entry.tracks.len();

        if removed > 0 {
            self.release_orphans();
        }

        debug!(playlist_id, song_id, removed, "song removed from playlist");
        Ok(removed)
    }

    /// First entry in the playlist carrying `song_id`.
    pub fn playlist_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<&Song> {
        self.entry(playlist_id)?
            .tracks
            .iter()
            .filter_map(|slot| self.records.get(slot))
            .find(|song| song.song_id == song_id)
            .ok_or_else(|| LibraryError::song_not_found(song_id))
    }

    /// Reorder a playlist ascending by `key`. Ties keep their relative order.
    pub fn sort_playlist(&mut self, playlist_id: PlaylistId, key: SortKey) -> Result<()> {
        let entry = self
            .playlists
            .get_mut(&playlist_id)
            .ok_or_else(|| LibraryError::playlist_not_found(playlist_id))?;

        let records = &self.records;
        entry
            .tracks
            .sort_by(|a, b| match (records.get(a), records.get(b)) {
                (Some(a), Some(b)) => key.compare(a, b),
                _ => std::cmp::Ordering::Equal,
            });

        debug!(playlist_id, key = %key, "playlist sorted");
        Ok(())
    }

    /// Sort by a key given as text.
    ///
    /// A missing playlist is reported before an unsupported key, and an
    /// unsupported key leaves the order unchanged.
    pub fn sort_playlist_by(&mut self, playlist_id: PlaylistId, key: &str) -> Result<()> {
        self.entry(playlist_id)?;
        let key: SortKey = key.parse()?;
        self.sort_playlist(playlist_id, key)
    }

    fn entry(&self, id: PlaylistId) -> Result<&PlaylistEntry> {
        self.playlists
            .get(&id)
            .ok_or_else(|| LibraryError::playlist_not_found(id))
    }

    fn entry_mut(&mut self, id: PlaylistId) -> Result<&mut PlaylistEntry> {
        self.playlists
            .get_mut(&id)
            .ok_or_else(|| LibraryError::playlist_not_found(id))
    }

    /// Drop records no longer reachable from the song index or any playlist.
    fn release_orphans(&mut self) {
        let live: HashSet<Slot> = self
            .songs
            .values()
            .copied()
            .chain(self.playlists.values().flat_map(|p| p.tracks.iter().copied()))
            .collect();

        let before = self.records.len();
        self.records.retain(|slot, _| live.contains(slot));
        let released = before - self.records.len();
        if released > 0 {
            debug!(released, "released orphaned song records");
        }
    }
}
