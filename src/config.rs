use serde::Deserialize;

/// Upper bound for a requested result count; one catalog page holds 20 movies
pub const MAX_RESULT_LIMIT: usize = 20;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Default TMDB API key, used when a request does not carry its own
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL poster paths are appended to
    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Language tag sent with catalog queries
    #[serde(default = "default_catalog_language")]
    pub catalog_language: String,

    /// Catalog request timeout in seconds
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Number of movies returned when a request does not ask for a specific count
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_catalog_language() -> String {
    "ko-KR".to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    10
}

fn default_result_limit() -> usize {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tmdb_api_url: default_tmdb_api_url(),
            tmdb_image_base_url: default_tmdb_image_base_url(),
            catalog_language: default_catalog_language(),
            catalog_timeout_secs: default_catalog_timeout_secs(),
            result_limit: default_result_limit(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.result_limit == 0 || self.result_limit > MAX_RESULT_LIMIT {
            anyhow::bail!(
                "RESULT_LIMIT must be between 1 and {}, got {}",
                MAX_RESULT_LIMIT,
                self.result_limit
            );
        }
        if self.catalog_timeout_secs == 0 {
            anyhow::bail!("CATALOG_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    /// Configured API key, ignoring blank values
    pub fn default_api_key(&self) -> Option<&str> {
        self.tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
