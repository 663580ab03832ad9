//! Shared building blocks of `shout`.
//!
//! * **[`file`]**: the data model, [`file::Filename`] and [`file::Content`].
//! * **[`error`]**: the read/write error taxonomy.
//! * **[`report`]**: the [`report::Reporter`] port through which the core talks to the user.
//! * **[`config`]**: runtime options shared by every layer.

pub mod config;
pub mod error;
pub mod file;
pub mod report;

#[doc(hidden)]
pub use tracing;

/// Target of every user-facing notice. Subscribers must never filter it out.
pub const NOTICE_TARGET: &str = "shout::notice";

/// Logs a success line on [`NOTICE_TARGET`]. Rendered with the success symbol by the terminal formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::NOTICE_TARGET, $($arg)+)
    };
}
