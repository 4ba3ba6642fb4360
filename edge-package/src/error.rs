//! Error classification for package validation.
//!
//! Every failure of a validation pass maps to exactly one [`ErrorKind`]. The
//! variants carry the resolved package path and, where the failure came from
//! I/O, the underlying [`std::io::Error`] as their source.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The stage of a validation pass that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PathResolution,
    ArchiveOpen,
    ArchiveFormat,
    EntryRead,
    EntryClose,
    MissingRequiredFile,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PathResolution => "path_resolution",
            ErrorKind::ArchiveOpen => "archive_open",
            ErrorKind::ArchiveFormat => "archive_format",
            ErrorKind::EntryRead => "entry_read",
            ErrorKind::EntryClose => "entry_close",
            ErrorKind::MissingRequiredFile => "missing_required_file",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("error reading file path '{}': {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading package '{}': {source}", .path.display())]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error unarchiving package '{}': {source}", .path.display())]
    ArchiveFormat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", describe_read(.path, .entry))]
    EntryRead {
        path: PathBuf,
        entry: Option<String>,
        #[source]
        source: io::Error,
    },

    #[error("error closing file '{entry}' in package '{}': {source}", .path.display())]
    EntryClose {
        path: PathBuf,
        entry: String,
        #[source]
        source: io::Error,
    },

    #[error("error validating package: package must contain {}", describe_missing(.missing))]
    MissingRequiredFile { path: PathBuf, missing: Vec<String> },
}

// A named entry only fails mid-read while it is being hashed.
fn describe_read(path: &Path, entry: &Option<String>) -> String {
    match entry {
        Some(name) => format!(
            "error computing hashsum of '{name}' in package '{}'",
            path.display()
        ),
        None => format!("error reading package '{}'", path.display()),
    }
}

fn describe_missing(missing: &[String]) -> String {
    missing
        .iter()
        .map(|name| format!("a {name} file"))
        .collect::<Vec<_>>()
        .join(" and ")
}

impl PackageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackageError::PathResolution { .. } => ErrorKind::PathResolution,
            PackageError::ArchiveOpen { .. } => ErrorKind::ArchiveOpen,
            PackageError::ArchiveFormat { .. } => ErrorKind::ArchiveFormat,
            PackageError::EntryRead { .. } => ErrorKind::EntryRead,
            PackageError::EntryClose { .. } => ErrorKind::EntryClose,
            PackageError::MissingRequiredFile { .. } => ErrorKind::MissingRequiredFile,
        }
    }

    /// The package path this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            PackageError::PathResolution { path, .. }
            | PackageError::ArchiveOpen { path, .. }
            | PackageError::ArchiveFormat { path, .. }
            | PackageError::EntryRead { path, .. }
            | PackageError::EntryClose { path, .. }
            | PackageError::MissingRequiredFile { path, .. } => path,
        }
    }

    /// Required names that were never seen; empty for every other kind.
    pub fn missing_files(&self) -> &[String] {
        match self {
            PackageError::MissingRequiredFile { missing, .. } => missing,
            _ => &[],
        }
    }

    pub(crate) fn entry_read(path: &Path, entry: Option<&str>, source: io::Error) -> Self {
        PackageError::EntryRead {
            path: path.to_path_buf(),
            entry: entry.map(str::to_string),
            source,
        }
    }
}

/// Convenience type alias for Results using PackageError
pub type PackageResult<T> = Result<T, PackageError>;
