//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_ACM_PENALTY_MINUTES, DEFAULT_CHECKPOINT_BONUS_PERCENT,
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_POST_CHECKPOINT_PERCENT, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_TASK_POINTS, MAX_ACM_PENALTY_MINUTES,
    MAX_CHECKPOINT_BONUS_PERCENT, MAX_TASK_POINTS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub scoring: ScoringConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Constants the rule converters read when building standings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Minutes added per failed attempt before the first pass (ACM)
    pub acm_penalty_minutes: i64,
    /// Extra percent for runs submitted before the checkpoint
    pub checkpoint_bonus_percent: i64,
    /// Percent of the score credited for runs at or after the checkpoint
    pub post_checkpoint_percent: i64,
    /// Score of a passing verdict without an explicit score
    pub default_task_points: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            acm_penalty_minutes: DEFAULT_ACM_PENALTY_MINUTES,
            checkpoint_bonus_percent: DEFAULT_CHECKPOINT_BONUS_PERCENT,
            post_checkpoint_percent: DEFAULT_POST_CHECKPOINT_PERCENT,
            default_task_points: DEFAULT_TASK_POINTS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            scoring: ScoringConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            acm_penalty_minutes: parse_or("ACM_PENALTY_MINUTES", DEFAULT_ACM_PENALTY_MINUTES)?,
            checkpoint_bonus_percent: parse_or(
                "CHECKPOINT_BONUS_PERCENT",
                DEFAULT_CHECKPOINT_BONUS_PERCENT,
            )?,
            post_checkpoint_percent: parse_or(
                "POST_CHECKPOINT_PERCENT",
                DEFAULT_POST_CHECKPOINT_PERCENT,
            )?,
            default_task_points: parse_or("DEFAULT_TASK_POINTS", DEFAULT_TASK_POINTS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make rankings meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_ACM_PENALTY_MINUTES).contains(&self.acm_penalty_minutes) {
            return Err(ConfigError::InvalidValue("ACM_PENALTY_MINUTES".to_string()));
        }
        if !(0..=MAX_CHECKPOINT_BONUS_PERCENT).contains(&self.checkpoint_bonus_percent) {
            return Err(ConfigError::InvalidValue(
                "CHECKPOINT_BONUS_PERCENT".to_string(),
            ));
        }
        if !(0..=100).contains(&self.post_checkpoint_percent) {
            return Err(ConfigError::InvalidValue(
                "POST_CHECKPOINT_PERCENT".to_string(),
            ));
        }
        if !(0..=MAX_TASK_POINTS).contains(&self.default_task_points) {
            return Err(ConfigError::InvalidValue("DEFAULT_TASK_POINTS".to_string()));
        }
        Ok(())
    }
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
