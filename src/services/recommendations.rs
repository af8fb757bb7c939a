use crate::{
    config::{Config, MAX_RESULT_LIMIT},
    error::{AppError, AppResult},
    models::{
        Genre, MoodRecommendation, Notice, NoticeLevel, PersonalityRecommendation,
        Recommendation, RecommendationRequest,
    },
    services::{
        genre_mapper::{map_mood, map_personality},
        providers::CatalogProvider,
        questionnaire::{resolve_answers, MOOD_QUESTIONS, PERSONALITY_QUESTIONS},
        scoring::score_axes,
    },
};

const MISSING_API_KEY: &str = "TMDB API 키를 입력해 주세요.";
const NO_RESULTS: &str = "추천할 영화를 찾지 못했어요. 잠시 후 다시 시도해 주세요.";

/// Answers the personality questionnaire with a genre and matching movies
///
/// All input is validated before any scoring happens. The catalog is queried once;
/// a failed call is returned as an error, an empty result as a warning notice.
pub async fn recommend_by_personality(
    catalog: &dyn CatalogProvider,
    config: &Config,
    request: &RecommendationRequest,
) -> AppResult<PersonalityRecommendation> {
    let api_key = resolve_api_key(config, request)?;
    let limit = resolve_limit(config, request)?;
    let answers = resolve_answers(PERSONALITY_QUESTIONS, &request.answers)?;

    let axis_scores = score_axes(&answers);
    let personality = axis_scores.classify();
    let mapping = map_personality(personality, &axis_scores);

    tracing::info!(
        personality = %personality,
        genre = %mapping.genre,
        reasons = mapping.reasons.len(),
        "Personality classified"
    );

    let (movies, notice) = fetch_movies(catalog, api_key, mapping.genre, limit).await?;

    Ok(PersonalityRecommendation {
        personality,
        axis_scores,
        genre: mapping.genre.into(),
        genre_scores: mapping.scores,
        reasons: mapping.reasons,
        movies,
        notice,
    })
}

/// Answers the mood questionnaire with a genre and matching movies
pub async fn recommend_by_mood(
    catalog: &dyn CatalogProvider,
    config: &Config,
    request: &RecommendationRequest,
) -> AppResult<MoodRecommendation> {
    let api_key = resolve_api_key(config, request)?;
    let limit = resolve_limit(config, request)?;
    let answers = resolve_answers(MOOD_QUESTIONS, &request.answers)?;

    let mapping = map_mood(&answers);

    tracing::info!(
        genre = %mapping.genre,
        weight = mapping.scores.get(mapping.genre),
        "Mood classified"
    );

    let (movies, notice) = fetch_movies(catalog, api_key, mapping.genre, limit).await?;

    Ok(MoodRecommendation {
        genre: mapping.genre.into(),
        genre_scores: mapping.scores,
        reasons: mapping.reasons,
        movies,
        notice,
    })
}

/// Request key first, then the configured default
fn resolve_api_key<'a>(config: &'a Config, request: &'a RecommendationRequest) -> AppResult<&'a str> {
    request
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .or_else(|| config.default_api_key())
        .ok_or_else(|| AppError::MissingInput(MISSING_API_KEY.to_string()))
}

fn resolve_limit(config: &Config, request: &RecommendationRequest) -> AppResult<usize> {
    let limit = request.limit.unwrap_or(config.result_limit);
    if limit == 0 || limit > MAX_RESULT_LIMIT {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}, got {}",
            MAX_RESULT_LIMIT, limit
        )));
    }
    Ok(limit)
}

async fn fetch_movies(
    catalog: &dyn CatalogProvider,
    api_key: &str,
    genre: Genre,
    limit: usize,
) -> AppResult<(Vec<Recommendation>, Option<Notice>)> {
    let movies = catalog
        .discover_by_genre(api_key, genre, limit)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                genre = %genre,
                provider = catalog.name(),
                "Catalog query failed"
            );
            e
        })?;

    if movies.is_empty() {
        tracing::warn!(genre = %genre, provider = catalog.name(), "Catalog returned no movies");
        let notice = Notice {
            level: NoticeLevel::Warning,
            message: NO_RESULTS.to_string(),
        };
        return Ok((movies, Some(notice)));
    }

    Ok((movies, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;
    use crate::services::providers::MockCatalogProvider;
    use std::collections::HashMap;

    fn movie(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            rating: 7.5,
            synopsis: "줄거리".to_string(),
            poster_url: None,
        }
    }

    fn personality_request(choice: usize, api_key: Option<&str>) -> RecommendationRequest {
        RecommendationRequest {
            answers: PERSONALITY_QUESTIONS
                .iter()
                .map(|q| (q.id.to_string(), q.options[choice].label.to_string()))
                .collect(),
            api_key: api_key.map(str::to_string),
            limit: None,
        }
    }

    fn comedy_request() -> RecommendationRequest {
        let answers: HashMap<String, String> = [
            ("m1", "친구들과 수다"),
            ("m2", "웃음"),
            ("m3", "유쾌함"),
            ("m4", "가볍고 밝음"),
        ]
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect();

        RecommendationRequest {
            answers,
            api_key: Some("secret".to_string()),
            limit: Some(3),
        }
    }

    fn unused_catalog() -> MockCatalogProvider {
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_discover_by_genre().never();
        catalog.expect_name().return_const("mock");
        catalog
    }

    #[tokio::test]
    async fn test_personality_flow_all_first_options() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover_by_genre()
            .withf(|api_key, genre, limit| {
                api_key == "secret" && *genre == Genre::Action && *limit == 5
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![movie("다이하드"), movie("매드맥스")]));
        catalog.expect_name().return_const("mock");

        let request = personality_request(0, Some("secret"));
        let result = recommend_by_personality(&catalog, &Config::default(), &request)
            .await
            .unwrap();

        assert_eq!(result.personality.to_string(), "ESTJ");
        assert_eq!(result.axis_scores.get(Letter::E), 3);
        assert_eq!(result.genre.key, Genre::Action);
        assert_eq!(result.genre.catalog_id, 28);
        assert_eq!(result.movies.len(), 2);
        assert!(result.notice.is_none());
        // four letter rules plus the E bonus
        assert_eq!(result.reasons.len(), 5);
    }

    #[tokio::test]
    async fn test_personality_flow_all_second_options() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover_by_genre()
            .withf(|_, genre, _| *genre == Genre::Fantasy)
            .times(1)
            .returning(|_, _, _| Ok(vec![movie("반지의 제왕")]));
        catalog.expect_name().return_const("mock");

        let request = personality_request(1, Some("secret"));
        let result = recommend_by_personality(&catalog, &Config::default(), &request)
            .await
            .unwrap();

        assert_eq!(result.personality.to_string(), "INFP");
        assert_eq!(result.genre_scores.get(Genre::Fantasy), 5);
        assert_eq!(result.genre.name, "판타지");
    }

    #[tokio::test]
    async fn test_mood_flow_comedy() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover_by_genre()
            .withf(|_, genre, limit| *genre == Genre::Comedy && *limit == 3)
            .times(1)
            .returning(|_, _, _| Ok(vec![movie("극한직업")]));
        catalog.expect_name().return_const("mock");

        let result = recommend_by_mood(&catalog, &Config::default(), &comedy_request())
            .await
            .unwrap();

        assert_eq!(result.genre.key, Genre::Comedy);
        assert_eq!(result.genre.catalog_id, 35);
        assert_eq!(result.reasons.len(), 4);
        assert_eq!(result.movies[0].title, "극한직업");
    }

    #[tokio::test]
    async fn test_empty_results_produce_warning_notice() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover_by_genre()
            .returning(|_, _, _| Ok(vec![]));
        catalog.expect_name().return_const("mock");

        let result = recommend_by_mood(&catalog, &Config::default(), &comedy_request())
            .await
            .unwrap();

        assert!(result.movies.is_empty());
        let notice = result.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, NO_RESULTS);
    }

    #[tokio::test]
    async fn test_catalog_failure_is_an_error() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover_by_genre()
            .returning(|_, _, _| Err(AppError::ExternalApi("API returned status 503".to_string())));
        catalog.expect_name().return_const("mock");

        let result = recommend_by_mood(&catalog, &Config::default(), &comedy_request()).await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_fetch() {
        let catalog = unused_catalog();
        let request = personality_request(0, None);

        let result = recommend_by_personality(&catalog, &Config::default(), &request).await;
        assert!(matches!(result, Err(AppError::MissingInput(msg)) if msg == MISSING_API_KEY));
    }

    #[tokio::test]
    async fn test_blank_request_key_falls_back_to_config() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover_by_genre()
            .withf(|api_key, _, _| api_key == "configured")
            .times(1)
            .returning(|_, _, _| Ok(vec![movie("인터스텔라")]));
        catalog.expect_name().return_const("mock");

        let config = Config {
            tmdb_api_key: Some("configured".to_string()),
            ..Config::default()
        };
        let request = personality_request(0, Some("  "));
        assert!(recommend_by_personality(&catalog, &config, &request).await.is_ok());
    }

    #[tokio::test]
    async fn test_incomplete_answers_fail_before_fetch() {
        let catalog = unused_catalog();
        let mut request = personality_request(0, Some("secret"));
        request.answers.remove("q7");

        let result = recommend_by_personality(&catalog, &Config::default(), &request).await;
        assert!(matches!(result, Err(AppError::MissingInput(msg)) if msg.contains("q7")));
    }

    #[tokio::test]
    async fn test_limit_out_of_range() {
        let catalog = unused_catalog();
        let mut request = comedy_request();
        request.limit = Some(MAX_RESULT_LIMIT + 1);

        let result = recommend_by_mood(&catalog, &Config::default(), &request).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        request.limit = Some(0);
        let result = recommend_by_mood(&catalog, &Config::default(), &request).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
