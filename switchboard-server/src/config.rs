use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on. `PORT`, default 3000.
    pub port: u16,
    /// Origins accepted by the CORS layer. `ALLOWED_ORIGINS`, either `*`
    /// or a comma-separated list; default `*`.
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),
    #[error("invalid origin in ALLOWED_ORIGINS: `{0}`")]
    InvalidOrigin(String),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

impl ServerConfig {
    /// Missing variables fall back to defaults; variables that are present
    /// but unparseable fail startup instead of being silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => AllowedOrigins::parse(&raw)?,
            Err(_) => AllowedOrigins::Any,
        };

        Ok(Self {
            port,
            allowed_origins,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}

impl AllowedOrigins {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::Any);
        }

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::List(origins))
    }
}
