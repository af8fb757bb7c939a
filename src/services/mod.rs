pub mod genre_mapper;
pub mod introduction;
pub mod providers;
pub mod questionnaire;
pub mod recommendations;
pub mod scoring;

pub use providers::{CatalogProvider, TmdbProvider};
