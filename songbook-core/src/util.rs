/// Prefix of the path at which an artist's page lives.
pub const ARTIST_PATH_PREFIX: &str = "/artist/";

/// Trim and lower-case a search query. Returns `None` if nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| query.to_lowercase())
}

/// The path of an artist's page.
///
/// The name is appended as-is; escaping it is up to whatever renders the path.
pub fn artist_path(name: &str) -> String {
    format!("{ARTIST_PATH_PREFIX}{name}")
}
