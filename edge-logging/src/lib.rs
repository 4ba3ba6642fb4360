//! Tracing initialization for the edge toolkit
//!
//! Uses standard RUST_LOG environment variable for filtering:
//! - `RUST_LOG=debug` - Set global level
//! - `RUST_LOG=edge=info,edge_package=debug` - Set per-module levels
//!
//! Uses RUST_LOG_FORMAT for output format (optional):
//! - `json` - JSON formatted output
//! - `pretty` - Pretty formatted output (default)
//! - `compact` - Compact single-line output
//!
//! All output goes to stderr; stdout is reserved for command results.

use edge_core::error::{CoreError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format selected through `RUST_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl LogFormat {
    /// Unknown values fall back to `Pretty`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }

    pub fn from_env() -> Self {
        std::env::var("RUST_LOG_FORMAT")
            .map(|value| Self::parse(&value))
            .unwrap_or(LogFormat::Pretty)
    }
}

/// Initialize with a default filter if RUST_LOG is not set
///
/// # Arguments
/// * `default_filter` - The filter string to use if RUST_LOG is not set (e.g., "info", "debug")
///
/// # Returns
/// Ok(()) on success, or an error if a global subscriber is already installed
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).json())
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
    };

    result.map_err(|e| CoreError::Internal(format!("Failed to initialize tracing: {}", e)))
}
