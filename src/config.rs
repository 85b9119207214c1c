//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PREDICT_UPSTREAM_URL: &str = "https://numerix-backend.onrender.com/api/predict/";
pub const DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Full URL the `/api/predict/` relay posts to.
    pub upstream_url: String,
    pub timeouts: RelayTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PREDICT_UPSTREAM_URL`: prediction backend endpoint
    /// - `PREDICT_REQUEST_TIMEOUT_SECS`: default 60
    /// - `PREDICT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream_url = parse_upstream_url(lookup("PREDICT_UPSTREAM_URL"))?;
        let timeouts = RelayTimeouts {
            request_secs: parse_secs(
                "PREDICT_REQUEST_TIMEOUT_SECS",
                lookup("PREDICT_REQUEST_TIMEOUT_SECS"),
                DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_secs(
                "PREDICT_CONNECT_TIMEOUT_SECS",
                lookup("PREDICT_CONNECT_TIMEOUT_SECS"),
                DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { port, upstream_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { key, value }),
        },
    }
}

fn parse_secs(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let secs = parse_or(key, raw, default)?;
    if secs == 0 {
        return Err(ConfigError::Invalid { key, value: "0".to_owned() });
    }
    Ok(secs)
}

fn parse_upstream_url(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_PREDICT_UPSTREAM_URL.to_owned());
    };
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::Invalid { key: "PREDICT_UPSTREAM_URL", value })
    }
}
