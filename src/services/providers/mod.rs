/// Movie catalog provider abstraction
///
/// The recommendation flow only needs one query: popular movies for a genre. Keeping it
/// behind a trait lets the HTTP layer run against an in-process catalog in tests.
use crate::{
    error::AppResult,
    models::{Genre, Recommendation},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie catalog providers
///
/// Implementations must report a failed call as an error and a successful call with no
/// matches as an empty list; callers show different messages for the two.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the first page of movies in `genre`, most popular first, truncated to `limit`
    ///
    /// `api_key` is forwarded to the catalog untouched.
    async fn discover_by_genre(
        &self,
        api_key: &str,
        genre: Genre,
        limit: usize,
    ) -> AppResult<Vec<Recommendation>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
