use serde::{Deserialize, Serialize};

/// A recommended movie returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    /// Average rating on a 0-10 scale
    pub rating: f64,
    pub synopsis: String,
    /// Fully-qualified poster URL, `None` when the catalog has no poster
    pub poster_url: Option<String>,
}

/// Builds a poster URL from a catalog path fragment
///
/// An empty or absent fragment means no poster is available.
pub fn poster_url(base_url: &str, path: Option<&str>) -> Option<String> {
    match path.map(str::trim) {
        Some(path) if !path.is_empty() => {
            Some(format!("{}{}", base_url.trim_end_matches('/'), path))
        }
        _ => None,
    }
}
