#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub scan_cooldown_ms: u64,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub spotify_base_url: String,
    pub spotify_token: Option<String>,
    pub discogs_base_url: String,
    pub discogs_token: Option<String>,
    pub store_search_radius_km: f64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("scan_cooldown_ms", &self.scan_cooldown_ms)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("spotify_base_url", &self.spotify_base_url)
            .field(
                "spotify_token",
                &self.spotify_token.as_ref().map(|_| "[redacted]"),
            )
            .field("discogs_base_url", &self.discogs_base_url)
            .field(
                "discogs_token",
                &self.discogs_token.as_ref().map(|_| "[redacted]"),
            )
            .field("store_search_radius_km", &self.store_search_radius_km)
            .finish()
    }
}
