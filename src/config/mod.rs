//! Configuration module for the match signup backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::schedule::MatchSchedule;

/// Admin key used when `SIGNUP_ADMIN_KEY` is not set.
pub const DEFAULT_ADMIN_KEY: &str = "letmein";

/// Format accepted for the next match start/end variables.
pub const MATCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const DEFAULT_MATCH_START: &str = "2025-10-09 20:00";
const DEFAULT_MATCH_END: &str = "2025-10-09 22:00";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret required by the reset endpoint
    pub admin_key: String,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Date and time window of the next match
    pub next_match: MatchSchedule,
}

/// Configuration that could not be parsed at startup.
#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
    InvalidMatchTime { var: &'static str, value: String },
    MatchEndsBeforeStart,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(value) => {
                write!(f, "Invalid SIGNUP_BIND_ADDR format: {}", value)
            }
            ConfigError::InvalidMatchTime { var, value } => write!(
                f,
                "Invalid {} value {:?}, expected {}",
                var, value, MATCH_TIME_FORMAT
            ),
            ConfigError::MatchEndsBeforeStart => {
                write!(f, "SIGNUP_NEXT_MATCH_END is earlier than SIGNUP_NEXT_MATCH_START")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let admin_key = env::var("SIGNUP_ADMIN_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_KEY.to_string());

        // SIGNUP_DB_PATH wins over DATA_DIR so a deployment can point at a mounted disk either way
        let db_path = match env::var("SIGNUP_DB_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string()))
                    .join("data.db")
            }
        };

        let bind_addr_raw =
            env::var("SIGNUP_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw.clone()))?;

        let log_level = env::var("SIGNUP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_json = env::var("SIGNUP_LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let starts_at = match_time_from_env("SIGNUP_NEXT_MATCH_START", DEFAULT_MATCH_START)?;
        let ends_at = match_time_from_env("SIGNUP_NEXT_MATCH_END", DEFAULT_MATCH_END)?;
        if ends_at < starts_at {
            return Err(ConfigError::MatchEndsBeforeStart);
        }

        Ok(Self {
            admin_key,
            db_path,
            bind_addr,
            log_level,
            log_json,
            next_match: MatchSchedule::new(starts_at, ends_at),
        })
    }

    /// Whether the reset endpoint is still protected by the built-in key.
    pub fn uses_default_admin_key(&self) -> bool {
        self.admin_key == DEFAULT_ADMIN_KEY
    }
}

fn match_time_from_env(var: &'static str, default: &str) -> Result<NaiveDateTime, ConfigError> {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    parse_match_time(&value).ok_or(ConfigError::InvalidMatchTime { var, value })
}

/// Parse a match time in [`MATCH_TIME_FORMAT`].
pub fn parse_match_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), MATCH_TIME_FORMAT).ok()
}
