use songbook_document_types::DocumentSong;

/// A song, as `songbook` cares about it
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// The song title
    pub title: String,
    /// The release year
    pub year: Option<i32>,
    /// The lyrics. May be a placeholder when the scraper could not retrieve them;
    /// this is ordinary text as far as searching is concerned.
    pub lyrics: String,
    /// The song's page on the lyrics site
    pub profile_url: Option<String>,
    /// Other artists credited on the song
    pub featured_artists: Vec<String>,
}
impl Song {
    /// Whether the lower-cased title or lyrics contain `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.lyrics.to_lowercase().contains(needle)
    }
}
impl From<DocumentSong> for Song {
    fn from(song: DocumentSong) -> Self {
        Song {
            title: song.title,
            year: song.year,
            lyrics: song.lyrics,
            profile_url: song.genius_url,
            featured_artists: song.featured_artists,
        }
    }
}
impl From<&Song> for DocumentSong {
    fn from(song: &Song) -> Self {
        DocumentSong {
            title: song.title.clone(),
            year: song.year,
            lyrics: song.lyrics.clone(),
            genius_url: song.profile_url.clone(),
            featured_artists: song.featured_artists.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, lyrics: &str) -> Song {
        Song {
            title: title.to_string(),
            year: None,
            lyrics: lyrics.to_string(),
            profile_url: None,
            featured_artists: vec![],
        }
    }

    #[test]
    fn test_matches_title_or_lyrics() {
        let song = song("Hello", "Hello, it's me");
        assert!(song.matches("hello"));
        assert!(song.matches("it's me"));
        assert!(!song.matches("goodbye"));
    }

    #[test]
    fn test_matches_is_unicode_aware() {
        let song = song("ÜBER ALLES", "L'ÉTÉ INDIEN");
        assert!(song.matches("über"));
        assert!(song.matches("été"));
    }

    #[test]
    fn test_placeholder_lyrics_are_searchable() {
        let song = song("Unreleased", "Lyrics unavailable");
        assert!(song.matches("unavailable"));
    }
}
