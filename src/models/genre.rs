use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Movie genres a classification can resolve to
///
/// Declaration order is the canonical genre order. Score tables iterate in this order
/// and ties on the maximum weight resolve to the earliest genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    SciFi,
    Romance,
    Fantasy,
}

impl Genre {
    /// All genres in canonical order
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::SciFi,
        Genre::Romance,
        Genre::Fantasy,
    ];

    /// Genre identifier used by the movie catalog (TMDB genre ids)
    pub fn catalog_id(self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Comedy => 35,
            Genre::Drama => 18,
            Genre::SciFi => 878,
            Genre::Romance => 10749,
            Genre::Fantasy => 14,
        }
    }

    /// Display name shown to users
    pub fn display_name(self) -> &'static str {
        match self {
            Genre::Action => "액션",
            Genre::Comedy => "코미디",
            Genre::Drama => "드라마",
            Genre::SciFi => "SF",
            Genre::Romance => "로맨스",
            Genre::Fantasy => "판타지",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Genre as returned to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreSummary {
    pub key: Genre,
    pub name: &'static str,
    pub catalog_id: u32,
}

impl From<Genre> for GenreSummary {
    fn from(genre: Genre) -> Self {
        Self {
            key: genre,
            name: genre.display_name(),
            catalog_id: genre.catalog_id(),
        }
    }
}

/// Accumulated weight per genre for one evaluation
///
/// Every genre is present from construction, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreScores(BTreeMap<Genre, u32>);

impl Default for GenreScores {
    fn default() -> Self {
        Self::new()
    }
}

impl GenreScores {
    pub fn new() -> Self {
        Self(Genre::ALL.iter().map(|genre| (*genre, 0)).collect())
    }

    /// Adds `weight` to a genre's running total
    pub fn add(&mut self, genre: Genre, weight: u32) {
        *self.0.entry(genre).or_insert(0) += weight;
    }

    pub fn get(&self, genre: Genre) -> u32 {
        self.0.get(&genre).copied().unwrap_or(0)
    }

    /// Genre with the highest weight; the first genre in canonical order wins ties
    pub fn best(&self) -> Genre {
        let mut best = Genre::ALL[0];
        let mut best_weight = self.get(best);

        for (genre, weight) in &self.0 {
            if *weight > best_weight {
                best = *genre;
                best_weight = *weight;
            }
        }

        best
    }

    /// Iterates `(genre, weight)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Genre, u32)> + '_ {
        self.0.iter().map(|(genre, weight)| (*genre, *weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids() {
        assert_eq!(Genre::Action.catalog_id(), 28);
        assert_eq!(Genre::Comedy.catalog_id(), 35);
        assert_eq!(Genre::Drama.catalog_id(), 18);
        assert_eq!(Genre::SciFi.catalog_id(), 878);
        assert_eq!(Genre::Romance.catalog_id(), 10749);
        assert_eq!(Genre::Fantasy.catalog_id(), 14);
    }

    #[test]
    fn test_new_scores_start_at_zero() {
        let scores = GenreScores::new();
        assert_eq!(scores.iter().count(), 6);
        assert!(scores.iter().all(|(_, weight)| weight == 0));
    }

    #[test]
    fn test_scores_iterate_in_canonical_order() {
        let scores = GenreScores::new();
        let order: Vec<Genre> = scores.iter().map(|(genre, _)| genre).collect();
        assert_eq!(order, Genre::ALL.to_vec());
    }

    #[test]
    fn test_best_picks_unique_maximum() {
        let mut scores = GenreScores::new();
        scores.add(Genre::Romance, 3);
        scores.add(Genre::Drama, 2);
        assert_eq!(scores.best(), Genre::Romance);
    }

    #[test]
    fn test_best_tie_goes_to_first_in_canonical_order() {
        let mut scores = GenreScores::new();
        scores.add(Genre::Fantasy, 4);
        scores.add(Genre::SciFi, 4);
        scores.add(Genre::Comedy, 4);
        assert_eq!(scores.best(), Genre::Comedy);
    }

    #[test]
    fn test_best_of_all_zero_is_action() {
        assert_eq!(GenreScores::new().best(), Genre::Action);
    }

    #[test]
    fn test_genre_serializes_snake_case() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, r#""sci_fi""#);
    }

    #[test]
    fn test_scores_serialize_as_map() {
        let mut scores = GenreScores::new();
        scores.add(Genre::Comedy, 2);
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["comedy"], 2);
        assert_eq!(json["action"], 0);
    }
}
