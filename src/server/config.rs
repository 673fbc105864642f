use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;
const DEFAULT_LEVEL_BASE_EXP: i64 = 60;
const DEFAULT_LEVEL_EXP_STEP: i64 = 30;
const DEFAULT_STATS_UTC_OFFSET_HOURS: i32 = 9;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub log_level: String,

    /// Allowed browser origin. No CORS layer is installed when unset.
    pub cors_origin: Option<String>,

    pub session_secure_cookie: bool,
    pub session_expiry_days: i64,

    /// Exp required to leave level 1.
    pub level_base_exp: i64,
    /// Additional exp required for every level after the first.
    pub level_exp_step: i64,

    /// UTC offset, in hours, that defines "today" and "this week" for statistics.
    pub stats_utc_offset_hours: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
            session_secure_cookie: parse_or("SESSION_SECURE_COOKIE", false)?,
            session_expiry_days: parse_or("SESSION_EXPIRY_DAYS", DEFAULT_SESSION_EXPIRY_DAYS)?,
            level_base_exp: parse_or("LEVEL_BASE_EXP", DEFAULT_LEVEL_BASE_EXP)?,
            level_exp_step: parse_or("LEVEL_EXP_STEP", DEFAULT_LEVEL_EXP_STEP)?,
            stats_utc_offset_hours: parse_or(
                "STATS_UTC_OFFSET_HOURS",
                DEFAULT_STATS_UTC_OFFSET_HOURS,
            )?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
///
/// # Returns
/// - `Ok(T)` - Parsed value or the default
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but cannot be parsed as `T`
fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
