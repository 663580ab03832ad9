//! # Reporting Port
//!
//! The core never prints. Everything the user should see is emitted as a
//! [`Notice`] through a [`Reporter`], which the CLI renders on the terminal and
//! tests record.

use std::fmt;

use crate::file::{Content, Filename};

/// A user-visible event of the read/transform/write pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    ReadingStarted { filename: Filename },
    /// The content that was read, echoed back for confirmation.
    ContentEcho { content: Content },
    NotFound { filename: Filename },
    PermissionDenied { filename: Filename },
    /// Policy failure: the file holds nothing but whitespace.
    EmptyContent { filename: Filename },
    ReadingCompleted,
    WritingStarted { target: Filename },
    Written { target: Filename, bytes: usize },
    WritePermissionDenied { target: Filename },
    WritingCompleted,
    ExitWithoutWriting,
}

/// How a notice should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Progress markers and echoed content.
    Status,
    Success,
    Warning,
    Error,
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::NotFound { .. }
            | Notice::PermissionDenied { .. }
            | Notice::WritePermissionDenied { .. } => Severity::Error,
            Notice::EmptyContent { .. } | Notice::ExitWithoutWriting => Severity::Warning,
            Notice::Written { .. } => Severity::Success,
            _ => Severity::Status,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ReadingStarted { filename } => write!(f, "-- Reading from '{filename}' --"),
            Notice::ContentEcho { content } => write!(f, "{content}"),
            Notice::NotFound { filename } => write!(
                f,
                "❌ Error: File '{filename}' not found. Please check the name and try again."
            ),
            Notice::PermissionDenied { filename } => {
                write!(f, "❌ Error: Permission denied. Cannot access '{filename}'.")
            }
            Notice::EmptyContent { .. } => {
                write!(f, "⚠️ The file is empty or contains only whitespace.")
            }
            Notice::ReadingCompleted => write!(f, "-- Reading process completed. --"),
            Notice::WritingStarted { target } => write!(f, "-- Writing to '{target}' --"),
            Notice::Written { target, .. } => {
                write!(f, "✅ Successfully created '{target}' with modified content.")
            }
            Notice::WritePermissionDenied { target } => {
                write!(f, "❌ Error: Permission denied when writing '{target}'.")
            }
            Notice::WritingCompleted => write!(f, "-- Writing process completed. --"),
            Notice::ExitWithoutWriting => write!(
                f,
                "🚫 File was not read successfully or is empty. Exiting without writing."
            ),
        }
    }
}

/// Receives every [`Notice`] the pipeline emits.
pub trait Reporter {
    fn report(&self, notice: Notice);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
