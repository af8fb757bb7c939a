use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{
        Genre, GenreSummary, IntroductionOptions, IntroductionRequest, IntroductionResponse,
        MoodRecommendation, PersonalityRecommendation, Question, RecommendationRequest,
    },
    services::{
        introduction,
        questionnaire::{MOOD_QUESTIONS, PERSONALITY_QUESTIONS},
        recommendations,
    },
};

use super::{extract::ApiJson, AppState};

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub title: &'static str,
    pub questions: &'static [Question],
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Choice lists for the introduction form
pub async fn introduction_options() -> Json<IntroductionOptions> {
    Json(introduction::introduction_options())
}

/// Generate a self introduction
pub async fn create_introduction(
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<IntroductionRequest>,
) -> AppResult<Json<IntroductionResponse>> {
    tracing::info!(
        request_id = %request_id,
        interests = request.interests.len(),
        "Processing introduction request"
    );

    let response = introduction::introduce(&request).map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Introduction rejected");
        e
    })?;

    Ok(Json(response))
}

/// Personality questionnaire
pub async fn personality_quiz() -> Json<QuizResponse> {
    Json(QuizResponse {
        title: "MBTI로 알아보는 나에게 맞는 영화",
        questions: PERSONALITY_QUESTIONS,
    })
}

/// Mood questionnaire
pub async fn mood_quiz() -> Json<QuizResponse> {
    Json(QuizResponse {
        title: "지금 기분에 딱 맞는 영화",
        questions: MOOD_QUESTIONS,
    })
}

/// Genre table in canonical order
pub async fn list_genres() -> Json<Vec<GenreSummary>> {
    Json(Genre::ALL.iter().copied().map(GenreSummary::from).collect())
}

/// Classify personality answers and fetch matching movies
pub async fn recommend_by_personality(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<RecommendationRequest>,
) -> AppResult<Json<PersonalityRecommendation>> {
    tracing::info!(
        request_id = %request_id,
        answers = request.answers.len(),
        "Processing personality recommendation request"
    );

    let response =
        recommendations::recommend_by_personality(state.catalog.as_ref(), &state.config, &request)
            .await?;

    tracing::info!(
        request_id = %request_id,
        personality = %response.personality,
        movies = response.movies.len(),
        "Personality recommendation completed"
    );

    Ok(Json(response))
}

/// Score mood answers and fetch matching movies
pub async fn recommend_by_mood(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ApiJson(request): ApiJson<RecommendationRequest>,
) -> AppResult<Json<MoodRecommendation>> {
    tracing::info!(
        request_id = %request_id,
        answers = request.answers.len(),
        "Processing mood recommendation request"
    );

    let response =
        recommendations::recommend_by_mood(state.catalog.as_ref(), &state.config, &request).await?;

    tracing::info!(
        request_id = %request_id,
        genre = %response.genre.key,
        movies = response.movies.len(),
        "Mood recommendation completed"
    );

    Ok(Json(response))
}
