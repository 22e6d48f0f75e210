use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_SEARCH_URL: &str = "http://localhost:9000/search/lyrics/";

pub const SEARCH_URL_ENV: &str = "LYRICS_SEARCH_URL";
pub const TIMEOUT_ENV: &str = "LYRICS_SEARCH_TIMEOUT_SECS";
pub const TICK_ENV: &str = "LYRICS_SEARCH_TICK_MS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_url: String,
    pub request_timeout: Duration,
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            tick_rate: Duration::from_millis(33),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid url: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let search_url = match lookup(SEARCH_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let raw = raw.trim().to_string();
                Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
                    key: SEARCH_URL_ENV,
                    reason: e.to_string(),
                })?;
                raw
            }
            None => defaults.search_url,
        };

        let request_timeout = positive(&lookup, TIMEOUT_ENV)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let tick_rate = positive(&lookup, TICK_ENV)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_rate);

        Ok(Self {
            search_url,
            request_timeout,
            tick_rate,
        })
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidNumber { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.tick_rate, Duration::from_millis(33));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (SEARCH_URL_ENV, "https://lyrics.example.com/search/"),
            (TIMEOUT_ENV, "3"),
            (TICK_ENV, "50"),
        ]))
        .unwrap();
        assert_eq!(config.search_url, "https://lyrics.example.com/search/");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.tick_rate, Duration::from_millis(50));
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup(&[(SEARCH_URL_ENV, "  ")])).unwrap();
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn rejects_relative_url() {
        let err = AppConfig::from_lookup(lookup(&[(SEARCH_URL_ENV, "search/lyrics")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_zero_and_garbage_numbers() {
        let err = AppConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: TIMEOUT_ENV, .. }));

        let err = AppConfig::from_lookup(lookup(&[(TICK_ENV, "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: TICK_ENV, .. }));
    }
}
