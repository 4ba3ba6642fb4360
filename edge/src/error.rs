//! Error types for the edge CLI application.
//!
//! Package failures keep their classification from `edge-package`; the
//! config variant covers loading a layout file.

use std::error::Error;
use std::fmt;

use edge_messages::{msg, MESSAGES};
use edge_package::{ErrorKind, PackageError};

/// Primary error type for the edge CLI application.
#[derive(Debug)]
pub enum AppError {
    /// Validation or hashing of a package failed
    Package {
        /// The classified package error
        source: PackageError,
    },

    /// Configuration-related errors
    Config {
        /// The specific configuration error
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Additional context about what was being configured
        context: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Package { source } => write!(f, "{source}"),
            AppError::Config { context, .. } => {
                write!(f, "Configuration error: {}: {}", context, self.source_message())
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Package { source } => Some(source),
            AppError::Config { source, .. } => Some(source.as_ref()),
        }
    }
}

impl AppError {
    fn source_message(&self) -> String {
        match self.source() {
            Some(source) => source.to_string(),
            None => "Unknown error".to_string(),
        }
    }

    /// Create a package error
    pub fn package(source: PackageError) -> Self {
        Self::Package { source }
    }

    /// Create a configuration error
    pub fn config<E: std::error::Error + Send + Sync + 'static>(
        source: E,
        context: impl Into<String>,
    ) -> Self {
        Self::Config {
            source: Box::new(source),
            context: context.into(),
        }
    }

    /// A follow-up suggestion for the user, when one applies.
    pub fn hint(&self) -> Option<String> {
        match self {
            AppError::Package { source } => match source.kind() {
                ErrorKind::MissingRequiredFile => Some(msg!(
                    MESSAGES.error_missing_file_hint,
                    files = source.missing_files().join(" and ")
                )),
                ErrorKind::ArchiveFormat => Some(msg!(MESSAGES.error_not_gzip_hint)),
                _ => None,
            },
            AppError::Config { .. } => Some(msg!(MESSAGES.error_layout_hint)),
        }
    }
}

impl From<PackageError> for AppError {
    fn from(err: PackageError) -> Self {
        AppError::package(err)
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
