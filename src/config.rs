//! Configuration Module
//!
//! Cache options with defaults, loadable from environment variables or JSON.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{DEFAULT_CACHE_NAME, DEFAULT_CLEANUP_INTERVAL_MS, DEFAULT_MAX_SIZE};
use crate::error::{CacheError, Result};

/// Cache construction options.
///
/// Every field is optional when deserializing; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheOptions {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Minimum milliseconds between lazy cleanup sweeps
    #[serde(rename = "cleanupInterval")]
    pub cleanup_interval_ms: u64,
    /// Name shown in cleanup log lines
    pub name: String,
}

impl CacheOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_cleanup_interval_ms(mut self, interval_ms: u64) -> Self {
        self.cleanup_interval_ms = interval_ms;
        self
    }

    /// Sets the cleanup interval, truncated to whole milliseconds and capped
    /// at `u64::MAX`.
    pub fn with_cleanup_interval(self, interval: Duration) -> Self {
        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self.with_cleanup_interval_ms(interval_ms)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the cleanup interval as a `Duration`.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_millis(self.cleanup_interval_ms)
    }

    /// Loads options from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Sweep interval in ms (default: 300000)
    /// - `CACHE_NAME` - Name used in log lines (default: BoundedTtlCache)
    ///
    /// Unset variables fall back to defaults; unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads options through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            max_size: parse_var(&lookup, "CACHE_MAX_SIZE")?.unwrap_or(defaults.max_size),
            cleanup_interval_ms: parse_var(&lookup, "CACHE_CLEANUP_INTERVAL_MS")?
                .unwrap_or(defaults.cleanup_interval_ms),
            name: lookup("CACHE_NAME").unwrap_or(defaults.name),
        })
    }

    /// Parses options from a JSON object such as
    /// `{"maxSize": 500, "cleanupInterval": 60000}`.
    ///
    /// Any other JSON value, arrays included, is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(CacheError::MalformedOptions(serde::de::Error::custom(
                "cache options must be a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            cleanup_interval_ms: DEFAULT_CLEANUP_INTERVAL_MS,
            name: DEFAULT_CACHE_NAME.to_string(),
        }
    }
}

fn parse_var<F, V>(lookup: &F, name: &str) -> Result<Option<V>>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CacheError::InvalidOption {
                name: name.to_string(),
                value: raw,
            }),
    }
}
