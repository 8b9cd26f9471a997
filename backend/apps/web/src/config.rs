//! Server configuration from the environment
//!
//! | Variable                 | Default                          |
//! |--------------------------|----------------------------------|
//! | `BIND_ADDR`              | `0.0.0.0:31113`                  |
//! | `AUTHORITY_URL`          | `http://localhost:4000`          |
//! | `GRAPHQL_URL`            | `http://localhost:4000/graphql`  |
//! | `AUTHORITY_TIMEOUT_SECS` | unset (no timeout)               |
//! | `COOKIE_SECURE`          | `true`                           |
//! | `NOT_FOUND_PATH`         | `/404`                           |
//! | `FRONTEND_ORIGINS`       | `http://localhost:40922,...`     |

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use booking::BookingConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub booking: BookingConfig,
    pub frontend_origins: Vec<String>,
}

impl WebConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let mut auth = AuthConfig::default();
        if let Some(url) = var("AUTHORITY_URL") {
            auth.authority_url = url;
        }
        if let Some(secs) = var("AUTHORITY_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("AUTHORITY_TIMEOUT_SECS must be a whole number of seconds")?;
            auth.authority_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(raw) = var("COOKIE_SECURE") {
            match parse_bool(&raw) {
                Some(secure) => auth.cookie_secure = secure,
                None => bail!("COOKIE_SECURE must be a boolean, got {raw:?}"),
            }
        }
        if let Some(path) = var("NOT_FOUND_PATH") {
            if !path.starts_with('/') {
                bail!("NOT_FOUND_PATH must start with '/', got {path:?}");
            }
            auth.not_found_path = path;
        }

        let mut booking = BookingConfig::default();
        if let Some(url) = var("GRAPHQL_URL") {
            booking.graphql_url = url;
        }

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            bind_addr,
            auth,
            booking,
            frontend_origins,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<WebConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr.port(), 31113);
        assert_eq!(config.auth.authority_url, "http://localhost:4000");
        assert!(config.auth.authority_timeout.is_none());
        assert!(config.auth.cookie_secure);
        assert_eq!(config.auth.not_found_path, "/404");
        assert_eq!(config.booking.graphql_url, "http://localhost:4000/graphql");
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("AUTHORITY_URL", "http://authority:4000"),
            ("AUTHORITY_TIMEOUT_SECS", "5"),
            ("COOKIE_SECURE", "off"),
            ("NOT_FOUND_PATH", "/missing"),
            ("GRAPHQL_URL", "http://api:4000/graphql"),
            ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.auth.authority_timeout, Some(Duration::from_secs(5)));
        assert!(!config.auth.cookie_secure);
        assert_eq!(config.auth.not_found_path, "/missing");
        assert_eq!(config.booking.graphql_url, "http://api:4000/graphql");
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("BIND_ADDR", "nowhere")]).is_err());
        assert!(config_from(&[("AUTHORITY_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("COOKIE_SECURE", "maybe")]).is_err());
        assert!(config_from(&[("NOT_FOUND_PATH", "404")]).is_err());
    }

    #[test]
    fn test_parse_bool() {
        for raw in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(raw), Some(true));
        }
        for raw in ["0", "false", "No", "off"] {
            assert_eq!(parse_bool(raw), Some(false));
        }
        assert_eq!(parse_bool("enabled"), None);
    }
}
