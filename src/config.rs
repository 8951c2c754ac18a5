//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present; stdout is left
//! untouched since it carries the conversation with the user.

use crate::domain::{Birthday, LeapDayPolicy};
use crate::error::{ConfigError, ConfigResult};
use crate::models::{BirthdayWindow, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;
use std::env;

/// Prompt printed before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Largest accepted birthday window, in days.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before each command
    pub prompt: String,

    /// Fixed date to use as "today" instead of the system clock
    pub today: Option<NaiveDate>,

    /// Window and leap-day handling for the `birthdays` command
    pub birthday_window: BirthdayWindow,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `ASSISTANT_TODAY`: Pin "today" to a `DD.MM.YYYY` date
    /// - `BIRTHDAY_WINDOW_DAYS`: Days ahead counted as upcoming (default: 7)
    /// - `LEAP_DAY_POLICY`: `mar1` or `feb28` (default: `mar1`)
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let today = Self::parse_env_date("ASSISTANT_TODAY")?;

        let days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let leap_day_policy = match env::var("LEAP_DAY_POLICY") {
            Ok(val) => val
                .parse::<LeapDayPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "LEAP_DAY_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => LeapDayPolicy::default(),
        };

        Ok(Config {
            log_level,
            prompt,
            today,
            birthday_window: BirthdayWindow {
                days,
                leap_day_policy,
            },
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional environment variable as a `DD.MM.YYYY` date.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::new(val.as_str())
                .map(|date| Some(date.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a DD.MM.YYYY date, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            today: None,
            birthday_window: BirthdayWindow::default(),
        }
    }
}
