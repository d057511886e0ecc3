//! Configuration management for the service
//!
//! Loads settings from environment variables and carries the build metadata
//! to the commands that need it.

use crate::{
    error::{AppError, Result},
    utils::env::{BuildInfo, EnvUtils},
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_PORT: u16 = 3000;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Development,
    Production,
}

impl Environment {
    /// Map an environment name, treating anything unrecognised as local
    pub fn from_name(name: &str) -> Self {
        match name {
            "development" => Self::Development,
            "production" => Self::Production,
            _ => Self::Local,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Deployment environment name (`ENVIRONMENT`)
    pub environment: String,
    /// Port the server listens on (`PORT`)
    pub port: u16,
    /// Enable debug logging (`DEBUG`)
    pub debug: bool,
    /// Build tag and date
    pub build: BuildInfo,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env(build: BuildInfo) -> Result<Self> {
        Self::from_lookup(EnvUtils::process_lookup, build)
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F, build: BuildInfo) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            port: EnvUtils::parse_or_default(&lookup, "PORT", DEFAULT_PORT)?,
            debug: EnvUtils::flag_or_default(&lookup, "DEBUG", false)?,
            build,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::config("PORT must be between 1 and 65535"));
        }

        Ok(())
    }

    /// The environment as an [`Environment`]
    pub fn environment(&self) -> Environment {
        Environment::from_name(&self.environment)
    }

    pub fn is_local(&self) -> bool {
        self.environment() == Environment::Local
    }

    pub fn is_development(&self) -> bool {
        self.environment() == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment() == Environment::Production
    }

    /// Pretty JSON rendering of the configuration
    pub fn dump(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            build: BuildInfo::new("dev", "1970-01-01T00:00:00+00:00"),
        }
    }
}
