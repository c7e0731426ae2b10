//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::source::DEFAULT_BATCH_SIZE;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings of the `juris-server` binary
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `JURIS_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `JURIS_SEED` - fixed seed for the synthetic generator
    pub seed: Option<u64>,
    /// `JURIS_BATCH_SIZE`
    pub batch_size: usize,
    /// `JURIS_LATENCY_MS` - simulated latency before each fetch
    pub latency: Duration,
    /// `JURIS_TIMEOUT_MS`
    pub timeout: Option<Duration>,
    /// `JURIS_MAX_QUERY_CHARS`
    pub max_query_chars: Option<usize>,
    /// `JURIS_BACKEND_URL` - use an HTTP backend instead of the generator
    pub backend_url: Option<String>,
    /// `JURIS_SYNONYMS_FILE` - JSON dictionary replacing the built-in one
    pub synonyms_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3030))),
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            latency: Duration::ZERO,
            timeout: None,
            max_query_chars: None,
            backend_url: None,
            synonyms_file: None,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_var(&get, "JURIS_BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            seed: parse_var(&get, "JURIS_SEED")?,
            batch_size: parse_var(&get, "JURIS_BATCH_SIZE")?.unwrap_or(defaults.batch_size),
            latency: parse_var(&get, "JURIS_LATENCY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.latency),
            timeout: parse_var(&get, "JURIS_TIMEOUT_MS")?.map(Duration::from_millis),
            max_query_chars: parse_var(&get, "JURIS_MAX_QUERY_CHARS")?,
            backend_url: get("JURIS_BACKEND_URL"),
            synonyms_file: get("JURIS_SYNONYMS_FILE"),
        })
    }
}

fn parse_var<T, G>(get: &G, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var,
                value,
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.batch_size, 50);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("JURIS_BIND_ADDR", "0.0.0.0:8080"),
            ("JURIS_SEED", "42"),
            ("JURIS_BATCH_SIZE", "10"),
            ("JURIS_LATENCY_MS", "250"),
            ("JURIS_TIMEOUT_MS", "5000"),
            ("JURIS_MAX_QUERY_CHARS", "512"),
            ("JURIS_BACKEND_URL", "http://localhost:9200/documents"),
            ("JURIS_SYNONYMS_FILE", "synonyms.json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.latency, Duration::from_millis(250));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.max_query_chars, Some(512));
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:9200/documents"));
        assert_eq!(config.synonyms_file.as_deref(), Some("synonyms.json"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config(&[("JURIS_SEED", "  "), ("JURIS_BACKEND_URL", "")]).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.backend_url, None);
    }

    #[test]
    fn test_invalid_value() {
        let err = config(&[("JURIS_BATCH_SIZE", "fifty")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "JURIS_BATCH_SIZE", .. }
        ));
    }
}
