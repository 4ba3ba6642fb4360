//! Foundation crate for the edge toolkit.
//!
//! Holds the error type shared by the non-core crates and the console output
//! macros used by the CLI for user-facing lines.

pub mod error;
pub mod output_macros;
