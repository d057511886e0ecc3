//! Environment and build metadata utilities
//!
//! Provides typed access to environment variables and the build tag/date
//! stamped into the binary.

use crate::error::{AppError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};
use tracing::debug;

/// Build identification, captured once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Git tag or version identifier for the build
    pub tag: String,
    /// RFC3339 timestamp of the build
    pub date: String,
}

impl BuildInfo {
    /// Read `BUILD_TAG`/`BUILD_DATE` from the compile-time environment.
    ///
    /// Falls back to the crate version and the current time.
    pub fn detect() -> Self {
        let tag = option_env!("BUILD_TAG")
            .map(str::to_string)
            .unwrap_or_else(|| format!("v{}", env!("CARGO_PKG_VERSION")));
        let date = option_env!("BUILD_DATE")
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        debug!("Build info: tag={}, date={}", tag, date);
        Self { tag, date }
    }

    pub fn new(tag: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            date: date.into(),
        }
    }
}

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Parse `key` from `lookup`, using `default` when unset.
    ///
    /// A value that is present but does not parse is an error.
    pub fn parse_or_default<T, F>(lookup: F, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|e| {
                AppError::config_with_source(format!("invalid value for {key}: {raw:?}"), e)
            }),
        }
    }

    /// Parse a boolean flag from `lookup`, using `default` when unset
    pub fn flag_or_default<F>(lookup: F, key: &str, default: bool) -> Result<bool>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(key) else {
            return Ok(default);
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(AppError::config(format!(
                "invalid value for {key}: {raw:?} (expected true or false)"
            ))),
        }
    }

    /// Lookup against the process environment
    pub fn process_lookup(key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
