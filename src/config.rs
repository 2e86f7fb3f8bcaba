use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// Runtime mode of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvMode {
    #[default]
    Development,
    Production,
}

impl EnvMode {
    pub fn is_development(self) -> bool {
        self == EnvMode::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnvMode::Development => "development",
            EnvMode::Production => "production",
        }
    }
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(EnvMode::Development),
            "production" => Ok(EnvMode::Production),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("Invalid environment mode '{0}', expected 'development' or 'production'")]
    InvalidMode(String),

    #[error("CORS_ALLOWED_ORIGINS must list at least one origin")]
    MissingAllowedOrigins,
}

/// Process configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub mode: EnvMode,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mode = match lookup("NODE_ENV") {
            Some(raw) => raw.parse()?,
            None => EnvMode::default(),
        };

        let cors_allowed_origins = parse_origins(
            &lookup("CORS_ALLOWED_ORIGINS").ok_or(ConfigError::MissingAllowedOrigins)?,
        );
        if cors_allowed_origins.is_empty() {
            return Err(ConfigError::MissingAllowedOrigins);
        }

        Ok(Self {
            port,
            mode,
            cors_allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
