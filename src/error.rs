use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Catalog API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Drops the request URL; the catalog key travels in its query string
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::HttpClient(e.without_url())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(format!("요청 형식이 올바르지 않아요: {}", rejection.body_text()))
    }
}

impl AppError {
    /// Message shown to the user, without the error-kind prefix for input errors
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::MissingInput(msg) => msg.clone(),
            AppError::HttpClient(e) if e.is_timeout() => {
                "영화 정보를 불러오는 데 시간이 너무 오래 걸렸어요.".to_string()
            }
            AppError::HttpClient(_) | AppError::ExternalApi(_) => {
                format!("영화 정보를 불러오지 못했어요: {}", self)
            }
            AppError::Internal(_) => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidInput(_) | AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            AppError::HttpClient(_) | AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.user_message()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
