//! Loads the input file into memory.
//!
//! The file handle lives only inside [`read_content`]. Whatever happens, the
//! handle is closed before the "reading process completed" notice goes out.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use shout_common::error::ReadError;
use shout_common::file::{Content, Filename};
use shout_common::report::{Notice, Reporter};
use tracing::debug;

use crate::guard::Completion;

/// Reads `filename` (resolved in `directory`) as a whole.
///
/// Not-found, permission and blank-content failures are reported through
/// `reporter` and returned as handled [`ReadError`]s. Any other I/O failure is
/// returned as [`ReadError::Io`] without a report.
pub fn read_content(
    filename: &Filename,
    directory: &Path,
    reporter: &dyn Reporter,
) -> Result<Content, ReadError> {
    let _completed = Completion::new(reporter, Notice::ReadingCompleted);

    let result = open_and_read(filename, directory, reporter);
    if let Err(err) = &result {
        report_failure(err, reporter);
    }
    result
}

fn open_and_read(
    filename: &Filename,
    directory: &Path,
    reporter: &dyn Reporter,
) -> Result<Content, ReadError> {
    if filename.is_empty() {
        // joined onto `directory` it would name the directory itself
        return Err(ReadError::NotFound {
            filename: filename.clone(),
        });
    }

    let path = filename.resolve(directory);
    let mut file = File::open(&path).map_err(|e| ReadError::from_io(filename, e))?;

    // opening a directory succeeds on unix, reading it does not
    let metadata = file.metadata().map_err(|e| ReadError::from_io(filename, e))?;
    if metadata.is_dir() {
        return Err(ReadError::Io {
            filename: filename.clone(),
            source: io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
        });
    }

    reporter.report(Notice::ReadingStarted {
        filename: filename.clone(),
    });

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| ReadError::from_io(filename, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");

    let content = Content::new(text);
    if content.is_blank() {
        return Err(ReadError::Empty {
            filename: filename.clone(),
        });
    }

    reporter.report(Notice::ContentEcho {
        content: content.clone(),
    });
    Ok(content)
}

fn report_failure(err: &ReadError, reporter: &dyn Reporter) {
    let notice = match err {
        ReadError::NotFound { filename } => Notice::NotFound {
            filename: filename.clone(),
        },
        ReadError::PermissionDenied { filename } => Notice::PermissionDenied {
            filename: filename.clone(),
        },
        ReadError::Empty { filename } => Notice::EmptyContent {
            filename: filename.clone(),
        },
        ReadError::Io { .. } => return,
    };
    reporter.report(notice);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
