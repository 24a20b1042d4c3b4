// secrets
use once_cell::sync::Lazy;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tracing::info;

pub static SECRET_MANAGER: Lazy<SecretManager> = Lazy::new(SecretManager::new);

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DEEZER_SEARCH_URL: &str = "https://api.deezer.com/search";

const KEYS: [&str; 5] = ["MODE", "PORT", "BIND_ADDR", "DEEZER_SEARCH_URL", "HOSTING"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dev,
    Prod,
}

/// How the process receives requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hosting {
    /// Persistent TCP listener.
    Listener,
    /// Invoked per request by the Lambda HTTP runtime.
    Lambda,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{0} must be set in production mode")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub hosting: Hosting,
    pub bind_addr: SocketAddr,
    pub deezer_search_url: String,
}

impl Config {
    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match get("MODE") {
            Some(mode) if mode.eq_ignore_ascii_case("prod") => Mode::Prod,
            _ => Mode::Dev,
        };

        let port = match (get("PORT"), mode) {
            (Some(port), _) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: port })?,
            (None, Mode::Dev) => DEFAULT_PORT,
            (None, Mode::Prod) => return Err(ConfigError::Missing("PORT")),
        };

        let ip = match get("BIND_ADDR") {
            Some(addr) => addr
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: addr })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let hosting = match get("HOSTING") {
            None => Hosting::Listener,
            Some(h) if h.eq_ignore_ascii_case("listener") => Hosting::Listener,
            Some(h) if h.eq_ignore_ascii_case("lambda") => Hosting::Lambda,
            Some(h) => return Err(ConfigError::Invalid { key: "HOSTING", value: h }),
        };

        let deezer_search_url =
            get("DEEZER_SEARCH_URL").unwrap_or_else(|| DEFAULT_DEEZER_SEARCH_URL.to_string());

        Ok(Config {
            mode,
            hosting,
            bind_addr: SocketAddr::new(ip, port),
            deezer_search_url,
        })
    }
}

pub struct SecretManager {
    config: Result<Config, ConfigError>,
}

impl SecretManager {
    fn new() -> Self {
        // .env is optional
        dotenvy::dotenv().ok();

        let configured: Vec<&str> = KEYS
            .iter()
            .copied()
            .filter(|k| env::var(k).map(|v| !v.is_empty()).unwrap_or(false))
            .collect();
        info!("Secrets configured: {:?}", configured);

        SecretManager {
            config: Config::from_lookup(|key| env::var(key).ok()),
        }
    }

    /// In prod only `PORT` is mandatory; the other keys fall back to defaults.
    pub fn config(&self) -> Result<Config, ConfigError> {
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_public_deezer_setup() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.mode, Mode::Dev);
        assert_eq!(config.hosting, Hosting::Listener);
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.deezer_search_url, DEFAULT_DEEZER_SEARCH_URL);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("HOSTING", "Lambda"),
            ("DEEZER_SEARCH_URL", "http://localhost:9000/search"),
        ])
        .unwrap();
        assert_eq!(config.hosting, Hosting::Lambda);
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.deezer_search_url, "http://localhost:9000/search");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", ""), ("HOSTING", " ")]).unwrap();
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.hosting, Hosting::Listener);
    }

    #[test]
    fn rejects_bad_port_and_hosting() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", value: "eighty".to_string() })
        );
        assert_eq!(
            config_from(&[("HOSTING", "cgi")]),
            Err(ConfigError::Invalid { key: "HOSTING", value: "cgi".to_string() })
        );
    }

    #[test]
    fn prod_requires_port() {
        assert_eq!(config_from(&[("MODE", "prod")]), Err(ConfigError::Missing("PORT")));
        let config = config_from(&[("MODE", "PROD"), ("PORT", "8000")]).unwrap();
        assert_eq!(config.mode, Mode::Prod);
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn prod_keeps_defaults_for_everything_but_port() {
        let config = config_from(&[("MODE", "prod"), ("PORT", "8000")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.deezer_search_url, DEFAULT_DEEZER_SEARCH_URL);
        assert_eq!(config.hosting, Hosting::Listener);
    }
}
