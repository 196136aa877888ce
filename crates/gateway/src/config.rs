//! Gateway configuration loaded from environment variables.

/// Connection settings for the hosted projects API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the REST endpoint, without a trailing slash,
    /// e.g. `https://db.example.com/rest/v1`.
    pub base_url: String,
    /// Bearer key sent with every request, if the deployment requires
    /// one.
    pub api_key: Option<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default    |
    /// |-------------------|------------|
    /// | `ATELIER_API_URL` | (required) |
    /// | `ATELIER_API_KEY` | (none)     |
    pub fn from_env() -> Self {
        let base_url = std::env::var("ATELIER_API_URL").expect("ATELIER_API_URL must be set");
        let api_key = std::env::var("ATELIER_API_KEY").ok();
        Self::new(base_url, api_key)
    }

    /// Build a config, normalizing the base URL.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}
