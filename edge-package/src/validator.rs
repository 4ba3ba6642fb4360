//! Single-pass package validation and hashing.
//!
//! The archive is streamed exactly once: gzip decompression under tar
//! demultiplexing, one entry at a time. Presence of every required file is
//! checked and the binary entry is hashed from the same bytes, so nothing is
//! ever extracted to disk. The file, the decoder and each entry are owned
//! values: every return path, including `?` early returns, releases them.
//!
//! A package may be stored as several concatenated gzip members; they are
//! decoded as one stream.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use flate2::bufread::MultiGzDecoder;
use tracing::{debug, info, info_span};

use crate::digest::ContentDigest;
use crate::entry::ArchiveEntry;
use crate::error::{PackageError, PackageResult};
use crate::layout::PackageLayout;

type PackageArchive = tar::Archive<MultiGzDecoder<BufReader<File>>>;

/// A package that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPackage {
    /// The absolute path the package was read from.
    pub path: PathBuf,
    /// SHA-512 of the binary entry.
    pub digest: ContentDigest,
}

/// Validates packages against a fixed [`PackageLayout`].
///
/// Holds no per-call state; concurrent calls each open their own file,
/// decoder and hash accumulator.
#[derive(Debug, Clone, Default)]
pub struct PackageValidator {
    layout: PackageLayout,
}

impl PackageValidator {
    pub fn new(layout: PackageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    /// Check that the package at `path` contains every required file and
    /// return the SHA-512 digest of its binary.
    ///
    /// The whole archive is always scanned, even once every required file
    /// has been seen. If the binary name occurs more than once, the digest
    /// is that of the last occurrence in stream order.
    pub fn validate_and_hash(&self, path: impl AsRef<Path>) -> PackageResult<ContentDigest> {
        self.validate(path).map(|package| package.digest)
    }

    /// Like [`validate_and_hash`](Self::validate_and_hash), also returning
    /// the absolute path that was read.
    pub fn validate(&self, path: impl AsRef<Path>) -> PackageResult<ValidatedPackage> {
        let requested = path.as_ref();
        let span = info_span!("validate_package", path = %requested.display());
        let _enter = span.enter();

        let path = resolve_path(requested)?;
        let file = open_package(&path)?;
        let mut archive = open_archive(&path, file)?;
        let entries = archive
            .entries()
            .map_err(|source| PackageError::ArchiveFormat {
                path: path.clone(),
                source,
            })?;

        let mut required = self.layout.required_files();
        let mut digest: Option<ContentDigest> = None;
        let mut scanned = 0usize;

        for entry in entries {
            let entry = entry.map_err(|source| PackageError::entry_read(&path, None, source))?;
            let mut entry = ArchiveEntry::new(entry);
            scanned += 1;
            debug!(
                entry = entry.name(),
                size = entry.size(),
                is_dir = entry.is_dir(),
                "Scanning package entry"
            );

            if !entry.is_dir() {
                required.mark_found(entry.name());

                if entry.name() == self.layout.binary() {
                    let hashed = ContentDigest::from_reader(&mut entry).map_err(|source| {
                        PackageError::entry_read(&path, Some(entry.name()), source)
                    })?;
                    if digest.is_some() {
                        debug!(entry = entry.name(), "Binary appears again, replacing digest");
                    }
                    digest = Some(hashed);
                }
            }

            if let Err(source) = entry.skip_rest() {
                debug!(entry = entry.name(), error = %source, "Failed to skip entry content");
                return Err(PackageError::entry_read(&path, None, source));
            }
            entry.close().map_err(|source| PackageError::EntryClose {
                path: path.clone(),
                entry: entry.name().to_string(),
                source,
            })?;
        }

        let missing = required.missing();
        if !missing.is_empty() {
            debug!(missing = ?missing, scanned, "Package is missing required files");
            return Err(PackageError::MissingRequiredFile { path, missing });
        }

        // The binary is always part of the required set, so a found binary
        // means it was hashed.
        let digest = digest.ok_or_else(|| PackageError::MissingRequiredFile {
            path: path.clone(),
            missing: vec![self.layout.binary().to_string()],
        })?;

        info!(scanned, digest = %digest, "Package validated");
        Ok(ValidatedPackage { path, digest })
    }
}

fn resolve_path(requested: &Path) -> PackageResult<PathBuf> {
    std::path::absolute(requested).map_err(|source| PackageError::PathResolution {
        path: requested.to_path_buf(),
        source,
    })
}

fn open_package(path: &Path) -> PackageResult<File> {
    let open_error = |source| PackageError::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    let metadata = file.metadata().map_err(open_error)?;
    if !metadata.is_file() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(file)
}

// The gzip header is parsed as soon as the decoder is built, so a file that
// is not gzip at all fails here, before any entry is requested.
fn open_archive(path: &Path, file: File) -> PackageResult<PackageArchive> {
    let decoder = MultiGzDecoder::new(BufReader::new(file));
    if decoder.header().is_none() {
        return Err(PackageError::ArchiveFormat {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                "not a gzip stream: missing or corrupt gzip header",
            ),
        });
    }
    Ok(tar::Archive::new(decoder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn write_package(dir: &Path, files: &[(&str, &str)]) -> PathBuf {
        let path = dir.join("package.tar.gz");
        let encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            builder.append_data(&mut header, name, data.as_bytes()).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap();
        path
    }

    #[test]
    fn test_abc_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_package(
            dir.path(),
            &[("fastly.toml", "name = \"svc\""), ("main.wasm", "abc")],
        );

        let digest = PackageValidator::default().validate_and_hash(&path).unwrap();
        assert_eq!(
            digest.as_str(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_custom_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_package(
            dir.path(),
            &[("edge.toml", ""), ("app.wasm", "abc"), ("main.wasm", "other")],
        );

        let layout = PackageLayout::new("edge.toml", "app.wasm").unwrap();
        let digest = PackageValidator::new(layout).validate_and_hash(&path).unwrap();
        assert_eq!(digest, ContentDigest::of_bytes(b"abc"));

        // The same archive lacks the default manifest.
        let err = PackageValidator::default().validate_and_hash(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredFile);
        assert_eq!(err.missing_files(), ["fastly.toml".to_string()]);
    }

    #[test]
    fn test_error_path_is_absolute() {
        let err = PackageValidator::default()
            .validate_and_hash("does-not-exist.tar.gz")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveOpen);
        assert!(err.path().is_absolute());
    }

    #[test]
    fn test_directory_is_not_a_package() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackageValidator::default()
            .validate_and_hash(dir.path())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveOpen);
    }
}
