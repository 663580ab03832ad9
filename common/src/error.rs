//! Error taxonomy for the read and write steps.
//!
//! Handled variants are reported to the user and end their branch of the
//! pipeline gracefully. `Io` variants are never handled locally: they bubble up
//! to `main` and terminate the process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::file::Filename;

#[derive(Debug, Error)]
pub enum ReadError {
    /// The file does not exist.
    #[error("file '{filename}' not found")]
    NotFound { filename: Filename },
    /// The file exists but may not be opened for reading.
    #[error("permission denied reading '{filename}'")]
    PermissionDenied { filename: Filename },
    /// The file was read but holds nothing but whitespace.
    #[error("file '{filename}' is empty or contains only whitespace")]
    Empty { filename: Filename },
    #[error("failed to read '{filename}'")]
    Io {
        filename: Filename,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn from_io(filename: &Filename, source: io::Error) -> Self {
        let filename = filename.clone();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { filename },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { filename },
            _ => Self::Io { filename, source },
        }
    }

    /// Whether the failure is one the pipeline recovers from by exiting early.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("permission denied writing '{}'", target.display())]
    PermissionDenied { target: PathBuf },
    #[error("failed to write '{}'", target.display())]
    Io {
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    pub fn from_io(target: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { target },
            _ => Self::Io { target, source },
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
