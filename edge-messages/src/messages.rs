//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `error_*` - Top-level error output
//! - `{command}_*` - Command-specific messages (e.g., validate_success)
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub struct Messages {
    // ============================================================================
    // Error Messages
    // ============================================================================
    pub error_generic: &'static str,
    pub error_layout_hint: &'static str,
    pub error_missing_file_hint: &'static str,
    pub error_not_gzip_hint: &'static str,

    // ============================================================================
    // Validate Command
    // ============================================================================
    pub validate_success: &'static str,
}

pub const MESSAGES: Messages = Messages {
    error_generic: "❌ Error: {error}",
    error_layout_hint: "Check the layout file: it needs `manifest` and `binary` keys with distinct file names",
    error_missing_file_hint: "Build the package so that it contains {files}",
    error_not_gzip_hint: "Packages must be gzip-compressed tar archives (.tar.gz)",

    validate_success: "Validated package {path}",
};
