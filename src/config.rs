//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. They only affect logging and presentation; what a command returns
//! never depends on the environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for an address book session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before each command (default: "> ")
    pub prompt: String,

    /// Print the command summary at startup (default: true)
    pub show_help_on_start: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESS_BOOK_PROMPT`: Input prompt (default: "> ")
    /// - `ADDRESS_BOOK_SHOW_HELP_ON_START`: `true` or `false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Load configuration from the process environment only.
    fn from_current_env() -> ConfigResult<Self> {
        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let show_help_on_start =
            Self::parse_env_bool("ADDRESS_BOOK_SHOW_HELP_ON_START", defaults.show_help_on_start)?;
        Ok(Config {
            log_level,
            prompt,
            show_help_on_start,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: "> ".to_string(),
            show_help_on_start: true,
        }
    }
}
