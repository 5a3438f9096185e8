//! Quill Logging
//!
//! Installs a `tracing` subscriber configured from the environment, so the
//! events emitted by the rendering engine reach stderr.
//!
//! # Usage
//!
//! ```rust,no_run
//! use quill_log::{debug, info};
//!
//! quill_log::init();
//!
//! info!("catalog loaded");
//! let key = "greeting";
//! debug!(key, "rendering");
//! ```
//!
//! # Environment Variables
//!
//! - `QUILL_DEBUG=1` - Enable debug logging
//! - `QUILL_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `QUILL_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `QUILL_LOG_COLOR=1|0` - Enable/disable colors
//! - `QUILL_LOG_TIMESTAMPS=1|0` - Include timestamps
//! - `QUILL_LOG_MODULE=1|0` - Include the event target
//!
//! `RUST_LOG`, when set and valid, replaces the level-derived filter.

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub use tracing::{debug, error, info, trace, warn};

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    #[error("Invalid filter directive: {0}")]
    InvalidFilter(String),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level of events that are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Get level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::TRACE,
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error => LevelFilter::ERROR,
            Level::Off => LevelFilter::OFF,
        }
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human-readable format
    Pretty,
    /// Compact single-line format
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(LogError::InvalidFormat(s.to_string())),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether colors are enabled
    pub color: bool,
    /// Whether to include timestamps
    pub timestamps: bool,
    /// Whether to include the event target
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Compact,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

fn flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    ///
    /// Unparseable values fall back to the defaults.
    ///
    /// ```
    /// use quill_log::{Format, Level, LogConfig};
    ///
    /// let config = LogConfig::from_lookup(|key| match key {
    ///     "QUILL_DEBUG" => Some("1".to_string()),
    ///     "QUILL_LOG_FORMAT" => Some("json".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level, Level::Debug);
    /// assert_eq!(config.format, Format::Json);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup("QUILL_DEBUG").map(|v| flag(&v)).unwrap_or(false);

        let level = lookup("QUILL_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("QUILL_LOG_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Compact);

        let color = match lookup("QUILL_LOG_COLOR") {
            Some(v) => flag(&v),
            None => lookup("NO_COLOR").is_none() && lookup("TERM").is_some(),
        };

        let timestamps = lookup("QUILL_LOG_TIMESTAMPS")
            .map(|v| flag(&v))
            .unwrap_or(true);

        let module_path = lookup("QUILL_LOG_MODULE")
            .map(|v| flag(&v))
            .unwrap_or(true);

        Self {
            debug,
            level,
            format,
            color,
            timestamps,
            module_path,
        }
    }

    /// Effective minimum level. Debug mode lowers anything above `Debug`.
    pub fn effective_level(&self) -> Level {
        if self.debug && self.level > Level::Debug {
            Level::Debug
        } else {
            self.level
        }
    }

    /// `EnvFilter` directive used when `RUST_LOG` is absent.
    pub fn filter_directive(&self) -> String {
        self.effective_level().as_str().to_lowercase()
    }

    /// Build the filter, preferring `RUST_LOG`.
    pub fn env_filter(&self) -> Result<EnvFilter, LogError> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.filter_directive()))
            .map_err(|e| LogError::InvalidFilter(e.to_string()))
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Install the global subscriber from the environment, ignoring failure.
///
/// Calling it more than once is harmless.
pub fn init() {
    let _ = try_init();
}

/// Install the global subscriber from the environment.
pub fn try_init() -> Result<(), LogError> {
    try_init_with(&LogConfig::from_env())
}

/// Install the global subscriber described by `config`.
pub fn try_init_with(config: &LogConfig) -> Result<(), LogError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_ansi(config.color)
        .with_target(config.module_path)
        .with_writer(std::io::stderr);

    macro_rules! install {
        ($builder:expr) => {
            match config.format {
                Format::Pretty => $builder.pretty().try_init(),
                Format::Compact => $builder.compact().try_init(),
                Format::Json => $builder.json().try_init(),
            }
        };
    }

    let result = if config.timestamps {
        install!(builder)
    } else {
        install!(builder.without_time())
    };
    result.map_err(|e| LogError::AlreadyInitialized(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
