//! Output macros for the edge CLI.
//!
//! User-facing console lines go through these macros so every command uses
//! the same symbols. Diagnostic output belongs to `tracing`, not here.

#[macro_export]
macro_rules! edge_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! edge_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! edge_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}

// Success goes to stdout: it is the result of `validate`.
#[macro_export]
macro_rules! edge_success {
    ($($arg:tt)*) => {
        println!("✓ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! edge_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}
