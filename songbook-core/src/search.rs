use songbook_state::{Artist, Catalog};

use crate::util::normalize_query;

/// Filters `catalog` down to the artists and songs matching `query`.
///
/// An empty or whitespace-only query returns the catalog unchanged. Otherwise the
/// query is trimmed and lower-cased, and each artist is considered in order:
///
/// - if its name contains the query, the whole artist is kept with all of its songs;
/// - otherwise, if any song's title or lyrics contain the query, the artist is kept
///   with only those songs, in their original order;
/// - otherwise, the artist is dropped.
///
/// Matching is plain substring containment; results are never reordered.
pub fn search(catalog: &Catalog, query: &str) -> Catalog {
    let Some(needle) = normalize_query(query) else {
        return catalog.clone();
    };

    let results: Catalog = catalog
        .iter()
        .filter_map(|artist| filter_artist(artist, &needle))
        .collect();

    tracing::debug!(
        query = %needle,
        artists = results.len(),
        songs = results.total_songs(),
        "search complete"
    );
    results
}

fn filter_artist(artist: &Artist, needle: &str) -> Option<Artist> {
    // A name match keeps the artist whole; song filtering is skipped entirely.
    if artist.name_matches(needle) {
        return Some(artist.clone());
    }

    let songs: Vec<_> = artist
        .songs
        .iter()
        .filter(|song| song.matches(needle))
        .cloned()
        .collect();

    (!songs.is_empty()).then(|| artist.with_songs(songs))
}
