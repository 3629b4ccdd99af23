//! Configuration management for the contact book.
//!
//! Every setting has a default, so the program runs with no environment at
//! all. Values can be overridden from the environment or a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_DATA_FILE;
use std::env;
use std::path::PathBuf;

/// Default number of days `birthdays` looks ahead.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// Largest accepted birthday window (one leap year).
pub const MAX_BIRTHDAY_WINDOW_DAYS: u64 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the address book
    pub data_file: PathBuf,

    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u64,

    /// Log filter used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: data file path (default: `address_book.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: days ahead for `birthdays` (default: 7, max: 366)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Self::default();

        let data_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.data_file,
        };

        let birthday_window_days =
            Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
