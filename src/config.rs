//! Application configuration loaded from environment variables.
//!
//! | key | default |
//! |-----|---------|
//! | `DATABASE_URL` | required |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `JWT_SECRET` | required |
//! | `JWT_TTL_SECONDS` | `3600` |
//! | `JWT_ISSUER` | `taskery` |
//! | `LOG_FORMAT` | `pretty` |

use chrono::Duration;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;
const DEFAULT_ISSUER: &str = "taskery";

/// Configuration loading errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("environment variable '{0}' is required but not set")]
    Missing(&'static str),

    /// A variable is set but unusable.
    #[error("environment variable '{key}' is invalid: {reason}")]
    Invalid {
        /// Offending variable.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pretty") {
            Ok(Self::Pretty)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(format!("expected 'pretty' or 'json', got '{s}'"))
        }
    }
}

/// Database connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string.
    pub url: String,
    /// Maximum pool size.
    pub max_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

/// Access token settings.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenConfig {
    /// HMAC signing secret.
    pub secret: String,
    /// Token lifetime.
    pub ttl: Duration,
    /// Issuer claim.
    pub issuer: String,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database settings.
    pub database: DatabaseConfig,
    /// Token settings.
    pub token: TokenConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, "DATABASE_URL")?;
        let max_connections = parsed(&lookup, "DATABASE_MAX_CONNECTIONS")?
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".to_owned(),
            });
        }

        let secret = required(&lookup, "JWT_SECRET")?;
        let ttl_seconds: i64 =
            parsed(&lookup, "JWT_TTL_SECONDS")?.unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);
        let ttl = Duration::try_seconds(ttl_seconds)
            .filter(|value| *value > Duration::zero())
            .ok_or_else(|| ConfigError::Invalid {
                key: "JWT_TTL_SECONDS",
                reason: format!("expected a positive number of seconds, got {ttl_seconds}"),
            })?;
        let issuer = optional(&lookup, "JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_owned());

        let log_format = parsed(&lookup, "LOG_FORMAT")?.unwrap_or_default();

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
            },
            token: TokenConfig {
                secret,
                ttl,
                issuer,
            },
            log_format,
        })
    }
}

/// Returns the trimmed value, treating blank values as unset.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(ConfigError::Missing(key))
}

fn parsed<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    optional(lookup, key)
        .map(|raw| {
            raw.parse::<T>().map_err(|err| ConfigError::Invalid {
                key,
                reason: err.to_string(),
            })
        })
        .transpose()
}
