use serde::{Serialize, Serializer};
use songbook_state::Catalog;

use crate::search;

/// The front-page view: whole-catalog totals alongside the (possibly filtered) artists on show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// The trimmed query; empty when nothing was searched for.
    pub query: String,
    pub total_artists: usize,
    pub total_songs: usize,
    pub displayed_artists: usize,
    pub displayed_songs: usize,
    #[serde(serialize_with = "serialize_catalog")]
    pub artists: Catalog,
}

/// Builds the [`Overview`] of `catalog` for `query`.
pub fn overview(catalog: &Catalog, query: &str) -> Overview {
    let artists = search(catalog, query);
    Overview {
        query: query.trim().to_string(),
        total_artists: catalog.len(),
        total_songs: catalog.total_songs(),
        displayed_artists: artists.len(),
        displayed_songs: artists.total_songs(),
        artists,
    }
}

fn serialize_catalog<S: Serializer>(catalog: &Catalog, serializer: S) -> Result<S::Ok, S::Error> {
    catalog.to_document().serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_overview_without_query_shows_everything() {
        let catalog = fixtures::larger();
        let overview = overview(&catalog, "  ");

        assert_eq!(overview.query, "");
        assert_eq!(overview.total_artists, 5);
        assert_eq!(overview.total_songs, 9);
        assert_eq!(overview.displayed_artists, 5);
        assert_eq!(overview.displayed_songs, 9);
        assert_eq!(overview.artists, catalog);
    }

    #[test]
    fn test_overview_with_query_keeps_totals() {
        let catalog = fixtures::larger();
        let overview = overview(&catalog, " Hello ");

        assert_eq!(overview.query, "Hello");
        assert_eq!(overview.total_artists, 5);
        assert_eq!(overview.total_songs, 9);
        assert_eq!(overview.displayed_artists, 2);
        assert_eq!(overview.displayed_songs, 2);
    }

    #[test]
    fn test_overview_serializes_artists_in_document_shape() {
        let overview = overview(&fixtures::adele_and_drake(), "plan");
        let json = serde_json::to_value(&overview).unwrap();

        assert_eq!(json["displayed_artists"], 1);
        assert_eq!(json["artists"][0]["artist"], "Drake");
        assert_eq!(json["artists"][0]["country"], "Unknown");
        assert_eq!(json["artists"][0]["songs"][0]["title"], "God's Plan");
    }
}
