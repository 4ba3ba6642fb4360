//! Edge-compute package validation
//!
//! A package is a gzip-compressed tar archive that must carry a manifest
//! (`fastly.toml`) and a compiled binary (`main.wasm`). [`validate_and_hash`]
//! checks both are present in a single streaming pass and returns the
//! SHA-512 digest of the binary, computed from the same bytes.
//!
//! ```no_run
//! let digest = edge_package::validate_and_hash("pkg/my-service.tar.gz")?;
//! println!("{digest}");
//! # Ok::<(), edge_package::PackageError>(())
//! ```

pub mod digest;
pub mod entry;
pub mod error;
pub mod layout;
pub mod required;
pub mod validator;

use std::path::Path;

// Re-export key types
pub use digest::{ContentDigest, DigestParseError, DIGEST_HEX_LEN};
pub use error::{ErrorKind, PackageError, PackageResult};
pub use layout::{PackageLayout, DEFAULT_BINARY, DEFAULT_MANIFEST};
pub use required::RequiredFiles;
pub use validator::{PackageValidator, ValidatedPackage};

/// Validate the package at `path` with the default layout and return the
/// digest of its binary.
pub fn validate_and_hash(path: impl AsRef<Path>) -> PackageResult<ContentDigest> {
    PackageValidator::default().validate_and_hash(path)
}
