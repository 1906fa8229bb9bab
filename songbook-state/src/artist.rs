use smol_str::SmolStr;
use songbook_document_types::DocumentArtist;

use crate::Song;

/// The country reported for artists whose document record has none.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// An artist, as `songbook` cares about it
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// The artist name. Compared case-insensitively when looking artists up.
    pub name: String,
    /// The country, if the document recorded one. See [`Artist::country`].
    pub country: Option<SmolStr>,
    /// The artist's page on the lyrics site
    pub profile_url: Option<String>,
    /// The artist's image
    pub image_url: Option<String>,
    /// The artist's songs, in document order
    pub songs: Vec<Song>,
}
impl Artist {
    /// The artist's country, or [`UNKNOWN_COUNTRY`] if none was recorded.
    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or(UNKNOWN_COUNTRY)
    }

    /// Whether the lower-cased name contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Whether the name equals `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// A copy of this artist carrying only `songs`, with the country made explicit.
    pub fn with_songs(&self, songs: Vec<Song>) -> Artist {
        Artist {
            name: self.name.clone(),
            country: Some(SmolStr::new(self.country())),
            profile_url: self.profile_url.clone(),
            image_url: self.image_url.clone(),
            songs,
        }
    }
}
impl From<DocumentArtist> for Artist {
    fn from(artist: DocumentArtist) -> Self {
        Artist {
            name: artist.artist,
            country: artist.country.map(SmolStr::from),
            profile_url: artist.genius_url,
            image_url: artist.image_url,
            songs: artist.songs.into_iter().map(Song::from).collect(),
        }
    }
}
impl From<&Artist> for DocumentArtist {
    fn from(artist: &Artist) -> Self {
        DocumentArtist {
            artist: artist.name.clone(),
            country: artist.country.as_ref().map(|c| c.to_string()),
            genius_url: artist.profile_url.clone(),
            image_url: artist.image_url.clone(),
            songs: artist.songs.iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str, country: Option<&str>) -> Artist {
        Artist {
            name: name.to_string(),
            country: country.map(SmolStr::from),
            profile_url: Some("https://genius.com/artists/x".to_string()),
            image_url: None,
            songs: vec![],
        }
    }

    #[test]
    fn test_country_defaults_to_unknown() {
        assert_eq!(artist("Drake", None).country(), "Unknown");
        assert_eq!(artist("Adele", Some("UK")).country(), "UK");
    }

    #[test]
    fn test_is_named_ignores_case_but_not_substrings() {
        let adele = artist("Adele", Some("UK"));
        assert!(adele.is_named("ADELE"));
        assert!(adele.is_named("adele"));
        assert!(!adele.is_named("adel"));
    }

    #[test]
    fn test_with_songs_makes_country_explicit() {
        let drake = artist("Drake", None);
        let copy = drake.with_songs(vec![]);
        assert_eq!(copy.country.as_deref(), Some("Unknown"));
        assert_eq!(copy.name, drake.name);
        assert_eq!(copy.profile_url, drake.profile_url);
        assert_eq!(copy.image_url, drake.image_url);
    }

    #[test]
    fn test_document_round_trip_keeps_absent_country_absent() {
        let drake = artist("Drake", None);
        let document = DocumentArtist::from(&drake);
        assert_eq!(document.country, None);
        assert_eq!(Artist::from(document), drake);
    }
}
