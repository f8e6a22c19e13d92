//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_CITY, DEFAULT_DATABASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_JOKE_API_URL,
    DEFAULT_QUOTE_API_URL, DEFAULT_SESSION_TTL_HOURS, DEFAULT_WEATHER_API_BASE, DEV_SECRET_KEY, MIN_SECRET_KEY_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    secret_key: String,
    weather_api_key: Option<String>,
    pub session_ttl_hours: i64,
    /// Key rate limits on `X-Forwarded-For` / `X-Real-IP` instead of the peer
    /// address. Only safe behind a reverse proxy that overwrites them.
    pub trust_proxy_headers: bool,
    pub city: String,
    pub http_timeout: Duration,
    pub weather_api_base: String,
    pub quote_api_url: String,
    pub joke_api_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("secret_key", &"[REDACTED]")
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("trust_proxy_headers", &self.trust_proxy_headers)
            .field("city", &self.city)
            .field("http_timeout", &self.http_timeout)
            .field("weather_api_base", &self.weather_api_base)
            .field("quote_api_url", &self.quote_api_url)
            .field("joke_api_url", &self.joke_api_url)
            .finish()
    }
}

impl Default for Config {
    /// Development defaults, no environment lookup.
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            secret_key: DEV_SECRET_KEY.to_string(),
            weather_api_key: None,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            trust_proxy_headers: false,
            city: DEFAULT_CITY.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            weather_api_base: DEFAULT_WEATHER_API_BASE.to_string(),
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            joke_api_url: DEFAULT_JOKE_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// Returns a configuration error if SECRET_KEY is missing in a release
    /// build or shorter than the minimum length.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret_key = match env::var("SECRET_KEY") {
            Ok(value) => value,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SECRET_KEY not set, using insecure default for development");
                DEV_SECRET_KEY.to_string()
            }
            Err(_) => {
                return Err(AppError::config(
                    "SECRET_KEY environment variable must be set in production",
                ))
            }
        };

        let weather_api_key = env::var("WEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if weather_api_key.is_none() {
            tracing::warn!("WEATHER_API_KEY not set, weather will use fallback text");
        }

        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            secret_key,
            weather_api_key,
            session_ttl_hours: parse_var("SESSION_TTL_HOURS")
                .unwrap_or(defaults.session_ttl_hours),
            trust_proxy_headers: parse_var("TRUST_PROXY_HEADERS")
                .unwrap_or(defaults.trust_proxy_headers),
            city: env::var("DASHBOARD_CITY").unwrap_or(defaults.city),
            http_timeout: parse_var("HTTP_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            weather_api_base: env::var("WEATHER_API_BASE").unwrap_or(defaults.weather_api_base),
            quote_api_url: env::var("QUOTE_API_URL").unwrap_or(defaults.quote_api_url),
            joke_api_url: env::var("JOKE_API_URL").unwrap_or(defaults.joke_api_url),
        }
        .validated()
    }

    /// Check invariants that cannot be expressed in the type.
    pub fn validated(self) -> AppResult<Self> {
        if self.secret_key.len() < MIN_SECRET_KEY_LENGTH {
            return Err(AppError::config(format!(
                "SECRET_KEY must be at least {} characters long",
                MIN_SECRET_KEY_LENGTH
            )));
        }
        if self.session_ttl_hours <= 0 {
            return Err(AppError::config("SESSION_TTL_HOURS must be positive"));
        }
        Ok(self)
    }

    /// Replace the session signing secret.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = secret_key.into();
        self
    }

    /// Replace the weather provider key.
    pub fn with_weather_api_key(mut self, key: Option<String>) -> Self {
        self.weather_api_key = key;
        self
    }

    /// Get secret bytes for session token signing/verification.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    pub fn weather_api_key(&self) -> Option<&str> {
        self.weather_api_key.as_deref()
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default().validated().unwrap();
        assert_eq!(config.city, "Houston");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert!(config.weather_api_key().is_none());
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::default().with_secret_key("short").validated();
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::default().with_weather_api_key(Some("abc123".to_string()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("abc123"));
        assert!(!debug.contains(DEV_SECRET_KEY));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_proxy_headers_untrusted_by_default() {
        assert!(!Config::default().trust_proxy_headers);
    }
}
