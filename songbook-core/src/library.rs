use std::path::PathBuf;

use songbook_state::{Artist, Catalog};

use crate::{ArtistSummary, Overview, Stats};

/// The music document on disk, queried afresh on every call.
///
/// Nothing is cached between queries: each method loads its own [`Catalog`], so
/// edits to the document are visible to the next query and concurrent callers
/// never share state.
#[derive(Debug, Clone)]
pub struct Library {
    path: PathBuf,
}
impl Library {
    /// A library backed by the document at `path`. Nothing is read until the first query.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the current catalog. Empty if the document can't be loaded.
    pub fn catalog(&self) -> Catalog {
        Catalog::load(&self.path)
    }

    /// Searches the current catalog; see [`crate::search`].
    pub fn search(&self, query: &str) -> Catalog {
        crate::search(&self.catalog(), query)
    }

    /// Looks an artist up by name in the current catalog; see [`crate::find_artist`].
    pub fn find_artist(&self, name: &str) -> Option<Artist> {
        crate::find_artist(&self.catalog(), name).cloned()
    }

    /// Summarises every artist in the current catalog.
    pub fn list_artists(&self) -> Vec<ArtistSummary> {
        crate::list_artists(&self.catalog())
    }

    /// Computes statistics for the current catalog.
    pub fn stats(&self) -> Stats {
        crate::stats(&self.catalog())
    }

    /// Builds the front-page view of the current catalog for `query`.
    pub fn overview(&self, query: &str) -> Overview {
        crate::overview(&self.catalog(), query)
    }
}
