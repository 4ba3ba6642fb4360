//! edge-messages
//!
//! Centralized user-facing message templates for the edge CLI, plus the
//! `MessageBuilder` and `msg!` macro that fill their `{variable}` slots.

pub mod builder;
pub mod messages;

pub use builder::MessageBuilder;
pub use messages::{Messages, MESSAGES};

/// Fill a template from [`MESSAGES`].
///
/// ```
/// use edge_messages::{msg, MESSAGES};
///
/// let line = msg!(MESSAGES.validate_success, path = "/tmp/pkg.tar.gz");
/// assert_eq!(line, "Validated package /tmp/pkg.tar.gz");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::MessageBuilder::new($template)
            $(.var(stringify!($key), $value))*
            .build()
    };
}
