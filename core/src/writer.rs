//! Writes the uppercase content next to the input as `modified_<name>`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use shout_common::error::WriteError;
use shout_common::file::{Content, Filename};
use shout_common::report::{Notice, Reporter};
use tracing::debug;

use crate::guard::Completion;

/// Where the modified content ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub target: PathBuf,
    pub bytes: usize,
}

/// Uppercases `content` and writes it to the modified name of `filename`,
/// creating or truncating the file.
///
/// A permission failure is reported and returned as
/// [`WriteError::PermissionDenied`]. Other failures are returned unreported.
pub fn write_modified(
    filename: &Filename,
    content: Content,
    directory: &Path,
    reporter: &dyn Reporter,
) -> Result<Written, WriteError> {
    let _completed = Completion::new(reporter, Notice::WritingCompleted);

    let target = filename.modified();
    let path = target.resolve(directory);

    match create_and_write(&target, &path, content, reporter) {
        Ok(bytes) => {
            reporter.report(Notice::Written {
                target: target.clone(),
                bytes,
            });
            Ok(Written {
                target: path,
                bytes,
            })
        }
        Err(err) => {
            report_failure(&err, target, reporter);
            Err(err)
        }
    }
}

fn report_failure(err: &WriteError, target: Filename, reporter: &dyn Reporter) {
    if let WriteError::PermissionDenied { .. } = err {
        reporter.report(Notice::WritePermissionDenied { target });
    }
}

fn create_and_write(
    target: &Filename,
    path: &Path,
    content: Content,
    reporter: &dyn Reporter,
) -> Result<usize, WriteError> {
    let file = File::create(path).map_err(|e| WriteError::from_io(path.to_path_buf(), e))?;

    reporter.report(Notice::WritingStarted {
        target: target.clone(),
    });

    let to_write_error = |e| WriteError::from_io(path.to_path_buf(), e);
    let modified = content.into_uppercase();
    let mut writer = BufWriter::new(file);
    writer
        .write_all(modified.as_str().as_bytes())
        .map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    let bytes = modified.as_str().len();
    debug!(path = %path.display(), bytes, "wrote modified file");
    Ok(bytes)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
