//! Logging setup shared by the Salone binaries
//!
//! Built on tracing with env-filter support. Output goes to stderr so
//! catalog listings on stdout stay pipeable.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one object per line)
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: '{}'. Valid options: text, json", s)),
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

/// Initialize the tracing subscriber.
///
/// `level` is the default filter when `RUST_LOG` is unset.
///
/// # Panics
///
/// Panics if a subscriber has already been installed.
pub fn init(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
}

/// Initialize logging from `SALONE_LOG_FORMAT` and `SALONE_LOG_LEVEL`.
///
/// Falls back to text format at info level.
pub fn init_default() {
    let format = std::env::var("SALONE_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("SALONE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    init(format, &level);
}
