use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PORT_ATTEMPTS: u16 = 5;
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings, read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub port_attempts: u16,
    pub login_delay: Duration,
    pub api_docs: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = parse_or(&lookup, "HOST", DEFAULT_HOST.parse().ok())?;
        let port = parse_or(&lookup, "PORT", Some(DEFAULT_PORT))?;
        let port_attempts = parse_or(&lookup, "PORT_ATTEMPTS", Some(DEFAULT_PORT_ATTEMPTS))?;
        let delay_ms = parse_or(&lookup, "LOGIN_DELAY_MS", Some(DEFAULT_LOGIN_DELAY_MS))?;
        let api_docs = parse_flag(&lookup, "API_DOCS")?;

        if port_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                key: "PORT_ATTEMPTS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            port_attempts,
            login_delay: Duration::from_millis(delay_ms),
            api_docs,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            port_attempts: DEFAULT_PORT_ATTEMPTS,
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            api_docs: false,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => default.ok_or(ConfigError::InvalidValue {
            key,
            value: String::new(),
        }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::InvalidValue {
            key,
            value: v.to_string(),
        }),
    }
}
