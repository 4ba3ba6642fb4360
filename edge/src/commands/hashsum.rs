//! `edge hashsum`: print the digest a deploy step compares against the
//! previously recorded one.

use std::path::Path;

use edge_core::edge_println;
use edge_package::PackageValidator;
use tracing::{debug, info_span};

use crate::error::{AppError, AppResult};

/// Validate the package and print only the binary's SHA-512 on stdout.
pub fn handle_hashsum(validator: &PackageValidator, package: &Path) -> AppResult<()> {
    let _span = info_span!("hashsum", package = %package.display()).entered();

    let digest = validator.validate_and_hash(package).map_err(|e| {
        debug!(path = %package.display(), kind = %e.kind(), "{}", e);
        AppError::package(e)
    })?;

    edge_println!("{}", digest);
    Ok(())
}
