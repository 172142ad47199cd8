//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! The provider registry and classification tables are compiled in and have no
//! configuration knobs.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export CACHE_CAPACITY="50000"
//! export LOG_FORMAT="json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_CAPACITY` - Memoized results kept in memory (default: 10000, `0` disables)
//! - `MAX_BATCH_SIZE` - URLs accepted per batch request (default: 100, max: 1000)
//! - `BEHIND_PROXY` - Rate limit on forwarded client IP (`true`/`1`, default: false)

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;
pub const MAX_CACHE_CAPACITY: usize = 1_000_000;
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;
pub const BATCH_SIZE_LIMIT: usize = 1_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum memoized deductions; 0 turns memoization off.
    pub cache_capacity: usize,
    pub max_batch_size: usize,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_capacity = parse_usize("CACHE_CAPACITY")?.unwrap_or(DEFAULT_CACHE_CAPACITY);
        let max_batch_size = parse_usize("MAX_BATCH_SIZE")?.unwrap_or(DEFAULT_MAX_BATCH_SIZE);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            cache_capacity,
            max_batch_size,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `cache_capacity` exceeds 1000000
    /// - `max_batch_size` is outside 1..=1000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.cache_capacity > MAX_CACHE_CAPACITY {
            anyhow::bail!(
                "CACHE_CAPACITY is too large (max: {MAX_CACHE_CAPACITY}), got {}",
                self.cache_capacity
            );
        }

        if self.max_batch_size == 0 || self.max_batch_size > BATCH_SIZE_LIMIT {
            anyhow::bail!(
                "MAX_BATCH_SIZE must be between 1 and {BATCH_SIZE_LIMIT}, got {}",
                self.max_batch_size
            );
        }

        Ok(())
    }

    /// Returns whether deduction results are memoized.
    pub fn is_cache_enabled(&self) -> bool {
        self.cache_capacity > 0
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if self.is_cache_enabled() {
            tracing::info!("  Cache: {} entries (enabled)", self.cache_capacity);
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Max batch size: {}", self.max_batch_size);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_usize(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
