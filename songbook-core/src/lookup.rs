use serde::Serialize;
use songbook_state::{Artist, Catalog};

use crate::util::artist_path;

/// Finds the first artist whose name equals `name`, ignoring case.
///
/// This is an exact comparison; use [`crate::search`] for substring matches.
pub fn find_artist<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Artist> {
    let found = catalog.iter().find(|artist| artist.is_named(name));
    if found.is_none() {
        tracing::debug!(name, "artist not found");
    }
    found
}

/// A one-line summary of an artist, as shown in artist listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub name: String,
    pub country: String,
    #[serde(rename = "songs_count")]
    pub song_count: usize,
    #[serde(rename = "url")]
    pub path: String,
}
impl From<&Artist> for ArtistSummary {
    fn from(artist: &Artist) -> Self {
        ArtistSummary {
            name: artist.name.clone(),
            country: artist.country().to_string(),
            song_count: artist.songs.len(),
            path: artist_path(&artist.name),
        }
    }
}

/// Summarises every artist, in catalog order.
pub fn list_artists(catalog: &Catalog) -> Vec<ArtistSummary> {
    catalog.iter().map(ArtistSummary::from).collect()
}
