use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Introduction
        .route("/introductions/options", get(handlers::introduction_options))
        .route("/introductions", post(handlers::create_introduction))
        // Questionnaires
        .route("/quizzes/personality", get(handlers::personality_quiz))
        .route("/quizzes/mood", get(handlers::mood_quiz))
        .route("/genres", get(handlers::list_genres))
        // Recommendations
        .route(
            "/recommendations/personality",
            post(handlers::recommend_by_personality),
        )
        .route("/recommendations/mood", post(handlers::recommend_by_mood))
}
