//! The on-disk shape of the music document, as written by the scraper and read by `songbook`.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentSong {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genius_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub featured_artists: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentArtist {
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genius_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub songs: Vec<DocumentSong>,
}

pub type Document = Vec<DocumentArtist>;

// The scraper writes `null` where it could not find a value.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
