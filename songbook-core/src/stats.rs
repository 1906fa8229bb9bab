use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;
use songbook_state::Catalog;

/// Aggregate figures for a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_artists: usize,
    pub total_songs: usize,
    /// Number of artists per country; artists without one count as "Unknown".
    pub artists_by_country: HashMap<SmolStr, usize>,
    /// When these figures were computed.
    #[serde(rename = "last_updated")]
    pub timestamp: DateTime<Utc>,
}

/// Computes [`Stats`] for `catalog`, stamped with the current time.
pub fn stats(catalog: &Catalog) -> Stats {
    stats_at(catalog, Utc::now())
}

/// Computes [`Stats`] for `catalog`, stamped with `timestamp`.
pub fn stats_at(catalog: &Catalog, timestamp: DateTime<Utc>) -> Stats {
    let mut artists_by_country: HashMap<SmolStr, usize> = HashMap::new();
    for artist in catalog {
        *artists_by_country
            .entry(SmolStr::new(artist.country()))
            .or_default() += 1;
    }

    Stats {
        total_artists: catalog.len(),
        total_songs: catalog.total_songs(),
        artists_by_country,
        timestamp,
    }
}
