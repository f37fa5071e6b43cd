use proptest::prelude::*;
use setlist_core::{Library, Song, SongQuery, SortKey};

// Small alphabet so ties and case collisions are common
fn arb_field() -> impl Strategy<Value = String> {
    "[abcABC]{0,3}"
}

fn arb_songs() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec((arb_field(), arb_field(), arb_field()), 1..20)
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Name),
        Just(SortKey::Artist),
        Just(SortKey::Genre),
    ]
}

/// Library with songs 0..n and playlist 1 holding `order` (song ids).
fn build(fields: &[(String, String, String)], order: &[usize]) -> Library {
    let mut lib = Library::new();
    for (id, (name, artist, genre)) in fields.iter().enumerate() {
        lib.create_song(Song::new(id as i64, name, artist, genre)).unwrap();
    }
    lib.create_playlist(1, "prop").unwrap();
    for &id in order {
        lib.add_song_to_playlist(1, id as i64).unwrap();
    }
    lib
}

fn field(song: &Song, key: SortKey) -> &str {
    match key {
        SortKey::Name => &song.name,
        SortKey::Artist => &song.artist,
        SortKey::Genre => &song.genre,
    }
}

proptest! {
    /// Property: sort matches a stable reference sort on the chosen field
    #[test]
    fn prop_sort_is_stable_ascending(
        fields in arb_songs(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..30),
        key in arb_key(),
    ) {
        let order: Vec<usize> = picks.iter().map(|i| i.index(fields.len())).collect();
        let mut lib = build(&fields, &order);

        let mut expected = lib.playlist(1).unwrap().songs;
        expected.sort_by(|a, b| field(a, key).cmp(field(b, key)));

        lib.sort_playlist(1, key).unwrap();
        let sorted = lib.playlist(1).unwrap().songs;

        prop_assert_eq!(sorted.len(), order.len());
        prop_assert_eq!(sorted, expected);
    }

    /// Property: remove drops every occurrence and keeps the rest in order
    #[test]
    fn prop_remove_drops_all_occurrences(
        fields in arb_songs(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..30),
        target in any::<prop::sample::Index>(),
    ) {
        let order: Vec<usize> = picks.iter().map(|i| i.index(fields.len())).collect();
        let target = target.index(fields.len());
        let mut lib = build(&fields, &order);

        let removed = lib.remove_song_from_playlist(1, target as i64).unwrap();

        let expected: Vec<i64> = order
            .iter()
            .filter(|&&id| id != target)
            .map(|&id| id as i64)
            .collect();
        prop_assert_eq!(removed, order.len() - expected.len());
        prop_assert_eq!(lib.playlist(1).unwrap().song_ids(), expected);
    }

    /// Property: search returns exactly the songs matching any filter
    #[test]
    fn prop_search_is_or_of_filters(
        fields in arb_songs(),
        name in proptest::option::of(arb_field()),
        artist in proptest::option::of(arb_field()),
        genre in proptest::option::of(arb_field()),
    ) {
        let lib = build(&fields, &[]);
        let query = SongQuery { name: name.clone(), artist: artist.clone(), genre: genre.clone() };

        let hit = |filter: &Option<String>, value: &str| {
            filter
                .as_deref()
                .filter(|f| !f.is_empty())
                .is_some_and(|f| value.to_lowercase().contains(&f.to_lowercase()))
        };
        let expected: Vec<i64> = fields
            .iter()
            .enumerate()
            .filter(|(_, (n, a, g))| hit(&name, n) || hit(&artist, a) || hit(&genre, g))
            .map(|(id, _)| id as i64)
            .collect();

        let found: Vec<i64> = lib.search_songs(&query).iter().map(|s| s.song_id).collect();
        prop_assert_eq!(found, expected);
    }
}
