//! Logging setup for Pulse binaries.
//!
//! Thin wrapper over `tracing-subscriber`: console output always, an
//! optional daily-rotated log file on top, text or JSON formatting.
//! Components log through the `tracing` macros (`info!`, `warn!`,
//! `error!`); `println!` is reserved for user-facing command output.
//!
//! # Environment variables
//!
//! - `PULSE_LOG_LEVEL`: trace, debug, info, warn, error
//! - `PULSE_LOG_FORMAT`: text or json
//! - `PULSE_LOG_DIR`: when set, also write daily-rotated files here
//! - `PULSE_LOG_PREFIX`: log file name prefix (default "pulse")

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Minimum level a message needs to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(anyhow::anyhow!("Invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON lines for log aggregation
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum log level to emit.
    pub level: LogLevel,

    /// Line format (text or JSON).
    pub format: LogFormat,

    /// When set, logs are also written to daily-rotated files in this
    /// directory (in addition to the console).
    pub log_dir: Option<PathBuf>,

    /// Log file name prefix, e.g. "pulse" -> "pulse.2024-01-18.log".
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            log_dir: None,
            file_prefix: "pulse".to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from `PULSE_LOG_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("PULSE_LOG_LEVEL") {
            config.level = level.parse()?;
        }

        if let Ok(format) = std::env::var("PULSE_LOG_FORMAT") {
            config.format = format.parse()?;
        }

        if let Ok(dir) = std::env::var("PULSE_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }

        if let Ok(prefix) = std::env::var("PULSE_LOG_PREFIX") {
            config.file_prefix = prefix;
        }

        Ok(config)
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup; a second call returns an error from
/// `try_init`.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive(config.level.to_tracing_level().into());

    match &config.log_dir {
        None => init_console_only(config, filter),
        Some(dir) => init_console_and_file(config, dir.clone(), filter),
    }
}

fn init_console_only(config: &LogConfig, filter: EnvFilter) -> Result<()> {
    let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .try_init()?;
        },
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer.json())
                .try_init()?;
        },
    }

    Ok(())
}

fn init_console_and_file(config: &LogConfig, dir: PathBuf, filter: EnvFilter) -> Result<()> {
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard must outlive the program for buffered lines to flush;
    // leak it so it lives until process exit.
    std::mem::forget(guard);

    match config.format {
        LogFormat::Text => {
            let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .try_init()?;
        },
        LogFormat::Json => {
            let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer.json())
                .with(file_layer.json())
                .try_init()?;
        },
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Text);
        assert!(config.log_dir.is_none());
        assert_eq!(config.file_prefix, "pulse");
    }
}
