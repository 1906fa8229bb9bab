//! Catalogs shared by the query engine's tests.
use songbook_state::{Artist, Catalog, Song};

pub fn song(title: &str, lyrics: &str) -> Song {
    Song {
        title: title.to_string(),
        year: None,
        lyrics: lyrics.to_string(),
        profile_url: None,
        featured_artists: vec![],
    }
}

pub fn artist(name: &str, country: Option<&str>, songs: Vec<Song>) -> Artist {
    Artist {
        name: name.to_string(),
        country: country.map(Into::into),
        profile_url: Some(format!("https://genius.com/artists/{name}")),
        image_url: None,
        songs,
    }
}

/// Adele (UK, one song) and Drake (no country, one song).
pub fn adele_and_drake() -> Catalog {
    Catalog::new(vec![
        artist("Adele", Some("UK"), vec![song("Hello", "hello it's me")]),
        artist("Drake", None, vec![song("God's Plan", "...")]),
    ])
}

pub fn larger() -> Catalog {
    Catalog::new(vec![
        artist(
            "Adele",
            Some("UK"),
            vec![
                song("Hello", "hello it's me"),
                song("Someone Like You", "never mind, I'll find someone like you"),
                song("Skyfall", "this is the end"),
            ],
        ),
        artist(
            "Drake",
            None,
            vec![
                song("God's Plan", "God's plan"),
                song("Hotline Bling", "you used to call me on my cell phone"),
            ],
        ),
        artist(
            "Lionel Richie",
            Some("US"),
            vec![
                song("Hello", "hello, is it me you're looking for"),
                song("All Night Long", "all night long"),
                song("Say You, Say Me", "say you, say me"),
            ],
        ),
        artist("The Weeknd", Some("Canada"), vec![song("Blinding Lights", "I said, ooh")]),
        artist("Empty Handed", Some("US"), vec![]),
    ])
}
