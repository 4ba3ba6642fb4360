// CLI argument parsing and definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "edge")]
#[command(about = "Validate and hash edge-compute packages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a YAML package layout (manifest and binary file names)
    #[arg(short, long, global = true)]
    pub layout: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a package archive
    Validate {
        /// Path to a package tar.gz
        #[arg(short, long)]
        package: PathBuf,
    },
    /// Validate a package and print the SHA-512 hashsum of its binary
    Hashsum {
        /// Path to a package tar.gz
        #[arg(short, long)]
        package: PathBuf,
    },
}
