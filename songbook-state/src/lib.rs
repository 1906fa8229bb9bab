//! Representations of songbook's catalog, as well as a way to load it from the music document.
//!
//! Separated out so that the query engine and any consumer share the same model.
#![deny(missing_docs)]

use std::path::Path;

pub use songbook_document_types as sdt;
use songbook_document_types::{Document, DocumentArtist, DocumentSong};

mod artist;
pub use artist::{Artist, UNKNOWN_COUNTRY};

mod song;
pub use song::Song;

#[derive(Debug)]
/// An error that can occur when loading the music document.
pub enum LoadError {
    /// The document could not be read.
    Io(std::io::Error),
    /// The document is not valid JSON, or its top level is not an array.
    Parse(serde_json::Error),
}
impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}
impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}
impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}
impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}
/// A result type for loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// All artists and their songs for one load of the music document.
///
/// Artists are kept in document order, which is also the display order.
/// Names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// The artists, in document order.
    pub artists: Vec<Artist>,
}
impl Catalog {
    /// Create a catalog from already-built artists.
    pub fn new(artists: Vec<Artist>) -> Self {
        Self { artists }
    }

    /// Loads the catalog at `path`.
    ///
    /// Never fails: a missing, unreadable or malformed document yields an empty
    /// catalog, and the reason is logged. Use [`Catalog::try_load`] to get at the error.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(LoadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no music document found, using empty catalog");
                Self::default()
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to load music document: {e}");
                Self::default()
            }
        }
    }

    /// Loads the catalog at `path`, reporting why it could not be loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or is not an array.
    /// Individual malformed records are skipped rather than failing the load.
    pub fn try_load(path: &Path) -> LoadResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let document = parse_document(&contents)?;
        let catalog = Self::from_document(document);
        tracing::debug!(
            path = %path.display(),
            artists = catalog.artists.len(),
            songs = catalog.total_songs(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Builds a catalog from a parsed document.
    ///
    /// Artists with a blank name and songs with a blank title are dropped.
    pub fn from_document(document: Document) -> Self {
        let artists = document
            .into_iter()
            .filter_map(|record| {
                if record.artist.trim().is_empty() {
                    tracing::warn!("skipping artist record with an empty name");
                    return None;
                }

                let mut artist = Artist::from(record);
                artist.songs.retain(|song| {
                    let keep = !song.title.trim().is_empty();
                    if !keep {
                        tracing::warn!(artist = %artist.name, "skipping song with an empty title");
                    }
                    keep
                });
                Some(artist)
            })
            .collect();

        Self { artists }
    }

    /// Converts the catalog back into its document form.
    pub fn to_document(&self) -> Document {
        self.artists.iter().map(DocumentArtist::from).collect()
    }

    /// The number of artists.
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    /// Whether the catalog has no artists.
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// The number of songs across all artists.
    pub fn total_songs(&self) -> usize {
        self.artists.iter().map(|a| a.songs.len()).sum()
    }

    /// Iterates over the artists in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Artist> {
        self.artists.iter()
    }
}
impl FromIterator<Artist> for Catalog {
    fn from_iter<I: IntoIterator<Item = Artist>>(iter: I) -> Self {
        Self {
            artists: iter.into_iter().collect(),
        }
    }
}
impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Artist;
    type IntoIter = std::slice::Iter<'a, Artist>;

    fn into_iter(self) -> Self::IntoIter {
        self.artists.iter()
    }
}

/// Parses a document leniently: the top level must be an array, but artist
/// records and songs that don't have the expected shape are skipped.
fn parse_document(contents: &str) -> LoadResult<Document> {
    let records: Vec<serde_json::Value> = serde_json::from_str(contents)?;
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| parse_artist(index, record))
        .collect())
}

fn parse_artist(index: usize, mut record: serde_json::Value) -> Option<DocumentArtist> {
    // Songs are parsed one at a time so that a bad song only loses itself.
    let songs = match record.as_object_mut().and_then(|o| o.remove("songs")) {
        Some(serde_json::Value::Array(songs)) => songs,
        _ => {
            tracing::warn!(index, "skipping artist record without a songs array");
            return None;
        }
    };
    if let Some(object) = record.as_object_mut() {
        object.insert("songs".to_string(), serde_json::Value::Array(vec![]));
    }

    let mut artist: DocumentArtist = match serde_json::from_value(record) {
        Ok(artist) => artist,
        Err(e) => {
            tracing::warn!(index, "skipping malformed artist record: {e}");
            return None;
        }
    };
    artist.songs = songs
        .into_iter()
        .filter_map(|song| match serde_json::from_value::<DocumentSong>(song) {
            Ok(song) => Some(song),
            Err(e) => {
                tracing::warn!(artist = %artist.artist, "skipping malformed song: {e}");
                None
            }
        })
        .collect();
    Some(artist)
}
