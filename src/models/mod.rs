use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod genre;
pub mod introduction;
pub mod movie;
pub mod personality;
pub mod question;

pub use genre::{Genre, GenreScores, GenreSummary};
pub use introduction::{IntroductionOptions, IntroductionRequest, IntroductionResponse};
pub use movie::{poster_url, Recommendation};
pub use personality::{Axis, AxisScores, Letter, PersonalityCode};
pub use question::{Answer, AnswerOption, AnswerSet, Effect, Question, QuestionTag};

/// Questionnaire submission shared by both recommendation flows
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    /// Chosen option label keyed by question id
    #[serde(default)]
    pub answers: HashMap<String, String>,
    /// Catalog API key, passed through as-is
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Result of the personality questionnaire
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityRecommendation {
    pub personality: PersonalityCode,
    pub axis_scores: AxisScores,
    pub genre: GenreSummary,
    pub genre_scores: GenreScores,
    pub reasons: Vec<String>,
    pub movies: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Result of the mood questionnaire
#[derive(Debug, Clone, Serialize)]
pub struct MoodRecommendation {
    pub genre: GenreSummary,
    pub genre_scores: GenreScores,
    pub reasons: Vec<String>,
    pub movies: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Non-fatal message shown alongside a successful result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// API response from GET /discover/movie
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDiscoverResponse {
    pub results: Vec<ApiMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovie {
    pub title: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl ApiMovie {
    /// Converts the raw catalog entry, resolving its poster against `image_base_url`
    pub fn into_recommendation(self, image_base_url: &str) -> Recommendation {
        let poster_url = poster_url(image_base_url, self.poster_path.as_deref());

        Recommendation {
            title: self.title,
            rating: self.vote_average,
            synopsis: self.overview.unwrap_or_default(),
            poster_url,
        }
    }
}
