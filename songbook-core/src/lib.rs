//! The query engine: searching, looking up, listing and summarising a [`Catalog`].
//!
//! Every operation is a pure function of the catalog it is given; [`Library`]
//! pairs them with a fresh load of the music document.
pub mod util;

mod library;
pub use library::Library;

mod lookup;
pub use lookup::{ArtistSummary, find_artist, list_artists};

mod overview;
pub use overview::{Overview, overview};

mod search;
pub use search::search;

mod stats;
pub use stats::{Stats, stats, stats_at};

#[cfg(test)]
mod fixtures;

pub use songbook_state;
pub use songbook_state::{Artist, Catalog, Song};
