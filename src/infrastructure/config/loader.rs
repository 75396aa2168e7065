//! Hierarchical configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `service.base_url` is blank.
    #[error("Service base URL cannot be empty")]
    EmptyBaseUrl,

    /// The base URL does not parse; holds the URL and the parse error.
    #[error("Invalid service base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    /// The base URL is not http or https.
    #[error("Unsupported base URL scheme: {0}. Must be http or https")]
    UnsupportedScheme(String),

    /// Unknown `logging.level`.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown `logging.format`.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown `logging.rotation`.
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];
const VALID_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Environment variable prefix; nested keys are split on `__`.
pub const ENV_PREFIX: &str = "SUBTEXT_";

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .subtext/config.yaml (project config)
    /// 3. .subtext/local.yaml (project local overrides, optional)
    /// 4. Environment variables (SUBTEXT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".subtext/config.yaml"))
            .merge(Yaml::file(".subtext/local.yaml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file; environment variables still win
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_base_url(&config.service.base_url)?;

        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if !VALID_ROTATIONS.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }

    /// Check that a base URL is an absolute http(s) URL
    pub fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(base_url.to_string(), e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}
