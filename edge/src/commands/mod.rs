// Command handlers for package operations

use crate::cli::{Args, Command};
use crate::error::{AppError, AppResult};
use edge_package::{PackageLayout, PackageValidator};
use std::path::Path;
use tracing::debug;

// Individual command modules
pub mod hashsum;
pub mod validate;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> AppResult<()> {
    let validator = PackageValidator::new(load_layout(args.layout.as_deref())?);

    match &args.command {
        Command::Validate { package } => {
            debug!("Handling validate command");
            validate::handle_validate(&validator, package)
        }
        Command::Hashsum { package } => {
            debug!("Handling hashsum command");
            hashsum::handle_hashsum(&validator, package)
        }
    }
}

fn load_layout(path: Option<&Path>) -> AppResult<PackageLayout> {
    match path {
        Some(path) => PackageLayout::load(path).map_err(|e| {
            AppError::config(
                e,
                format!("Failed to load package layout from {}", path.display()),
            )
        }),
        None => Ok(PackageLayout::default()),
    }
}
