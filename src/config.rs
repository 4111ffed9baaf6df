use std::{
    env,
    fmt::{Display, Formatter},
};

use url::Url;

pub const BASE_URL_VAR: &str = "FLOCK_BASE_URL";
pub const API_TOKEN_VAR: &str = "FLOCK_API_TOKEN";
pub const BIND_ADDR_VAR: &str = "FLOCK_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Where the remote collection lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub api_token: String,
    pub bind_addr: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidBaseUrl(url::ParseError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "environment variable {name} is not set")
            }
            ConfigError::InvalidBaseUrl(e) => {
                write!(f, "{BASE_URL_VAR} is not a valid url: {e}")
            }
        }
    }
}
impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolution split out from the process environment so tests can feed
    /// their own variable sets.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).ok_or(ConfigError::MissingVar(BASE_URL_VAR))?;
        let base_url = Url::parse(&base_url).map_err(ConfigError::InvalidBaseUrl)?;
        let api_token = lookup(API_TOKEN_VAR).ok_or(ConfigError::MissingVar(API_TOKEN_VAR))?;
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            base_url,
            api_token,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| {
            vars.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn resolves_full_configuration() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "https://content.example.com"),
            (API_TOKEN_VAR, "token"),
            (BIND_ADDR_VAR, "0.0.0.0:9000"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.base_url.as_str(), "https://content.example.com/");
        assert_eq!(config.api_token, "token");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn bind_address_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "https://content.example.com"),
            (API_TOKEN_VAR, "token"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn missing_token_is_an_error() {
        let result =
            AppConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "https://content.example.com")]));
        assert!(matches!(result, Err(ConfigError::MissingVar(API_TOKEN_VAR))));
    }

    #[test]
    fn malformed_base_url_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "not a url"),
            (API_TOKEN_VAR, "token"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }
}
