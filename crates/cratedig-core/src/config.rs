use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Empty secrets are treated the same as unset ones.
    let optional_secret = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("CRATEDIG_ENV", "development"))?;
    let log_level = or_default("CRATEDIG_LOG_LEVEL", "info");

    let scan_cooldown_ms = parse_u64("CRATEDIG_SCAN_COOLDOWN_MS", "5000")?;
    let http_timeout_secs = parse_u64("CRATEDIG_HTTP_TIMEOUT_SECS", "30")?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CRATEDIG_HTTP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("CRATEDIG_USER_AGENT", "cratedig/0.1 (record-lookup)");

    let spotify_base_url = or_default("CRATEDIG_SPOTIFY_BASE_URL", "https://api.spotify.com/v1/");
    let spotify_token = optional_secret("CRATEDIG_SPOTIFY_TOKEN");
    let discogs_base_url = or_default("CRATEDIG_DISCOGS_BASE_URL", "https://api.discogs.com/");
    let discogs_token = optional_secret("CRATEDIG_DISCOGS_TOKEN");

    let store_search_radius_km = parse_f64("CRATEDIG_STORE_SEARCH_RADIUS_KM", "20")?;
    if !store_search_radius_km.is_finite() || store_search_radius_km <= 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CRATEDIG_STORE_SEARCH_RADIUS_KM".to_string(),
            reason: format!("must be a positive number, got {store_search_radius_km}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        scan_cooldown_ms,
        http_timeout_secs,
        user_agent,
        spotify_base_url,
        spotify_token,
        discogs_base_url,
        discogs_token,
        store_search_radius_km,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CRATEDIG_ENV".to_string(),
            reason: format!("expected development, test or production, got {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
