/// TMDB catalog provider
///
/// Uses the discover endpoint: GET /discover/movie filtered by genre id, sorted by
/// popularity, first page only. The API key travels as a query parameter.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ApiDiscoverResponse, Genre, Recommendation},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

const SORT_ORDER: &str = "popularity.desc";
const FIRST_PAGE: &str = "1";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_url: String,
    image_base_url: String,
    language: String,
}

impl TmdbProvider {
    /// Creates a provider whose requests give up after the configured timeout
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.catalog_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.tmdb_api_url.trim_end_matches('/').to_string(),
            image_base_url: config.tmdb_image_base_url.clone(),
            language: config.catalog_language.clone(),
        })
    }

    fn discover_url(&self) -> String {
        format!("{}/discover/movie", self.api_url)
    }

    fn convert_response(&self, response: ApiDiscoverResponse, limit: usize) -> Vec<Recommendation> {
        response
            .results
            .into_iter()
            .take(limit)
            .map(|movie| movie.into_recommendation(&self.image_base_url))
            .collect()
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover_by_genre(
        &self,
        api_key: &str,
        genre: Genre,
        limit: usize,
    ) -> AppResult<Vec<Recommendation>> {
        let genre_id = genre.catalog_id().to_string();
        let response = self
            .http_client
            .get(self.discover_url())
            .query(&[
                ("api_key", api_key),
                ("with_genres", genre_id.as_str()),
                ("language", self.language.as_str()),
                ("sort_by", SORT_ORDER),
                ("page", FIRST_PAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let discovered: ApiDiscoverResponse = response.json().await?;
        let total = discovered.results.len();
        let movies = self.convert_response(discovered, limit);

        tracing::info!(
            genre = %genre,
            genre_id = %genre_id,
            total = total,
            returned = movies.len(),
            provider = "tmdb",
            "Discover query completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
