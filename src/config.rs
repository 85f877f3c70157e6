//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_OVERSCAN, DEFAULT_ROW_COUNT, DEFAULT_ROW_HEIGHT,
};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Runtime configuration for the table core.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Rows to generate at startup.
    pub row_count: usize,
    /// Optional generation seed; when set, startup data is deterministic.
    pub seed: Option<u64>,
    /// Estimated row height handed to the window calculator.
    pub row_height: f64,
    /// Overscan margin handed to the window calculator.
    pub overscan: usize,
}

/// Parse a numeric environment value, ignoring surrounding whitespace.
///
/// # Returns
/// `Some(value)` when the trimmed string parses, otherwise `None`.
pub fn parse_env_number<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

fn env_number<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| parse_env_number(&value))
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are
    /// missing or unparseable.
    pub fn from_env() -> Self {
        Self {
            row_count: env_number("ROSTER_ROW_COUNT").unwrap_or(DEFAULT_ROW_COUNT),
            seed: env_number("ROSTER_SEED"),
            row_height: env_number("ROSTER_ROW_HEIGHT").unwrap_or(DEFAULT_ROW_HEIGHT),
            overscan: env_number("ROSTER_OVERSCAN").unwrap_or(DEFAULT_OVERSCAN),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            seed: None,
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}
