//! `edge validate`: check a package and report pass/fail.

use std::path::Path;

use edge_core::edge_success;
use edge_messages::{msg, MESSAGES};
use edge_package::PackageValidator;
use tracing::{debug, info_span};

use crate::error::{AppError, AppResult};

/// Validate the package and print a confirmation; the digest is discarded.
pub fn handle_validate(validator: &PackageValidator, package: &Path) -> AppResult<()> {
    let _span = info_span!("validate", package = %package.display()).entered();

    let validated = validator.validate(package).map_err(|e| {
        debug!(path = %package.display(), kind = %e.kind(), "{}", e);
        AppError::package(e)
    })?;

    edge_success!(
        "{}",
        msg!(
            MESSAGES.validate_success,
            path = validated.path.display().to_string()
        )
    );
    Ok(())
}
