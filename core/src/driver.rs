//! # Pipeline Driver
//!
//! Sequences one run of the tool:
//!
//! ```text
//! Start → Reading → Writing → End
//!                 ↘ ExitEarly ↗
//! ```
//!
//! There are no retries. A handled read failure ends the run early, a handled
//! write failure ends the write step only. Unhandled I/O errors propagate to
//! the caller.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use shout_common::config::Config;
use shout_common::error::ReadError;
use shout_common::file::Filename;
use shout_common::report::{Notice, Reporter};
use tracing::{debug, trace};

use crate::reader;
use crate::writer::{self, Written};

pub const PROMPT: &str = "📄 Enter the name of the file to read (e.g., my_file.txt): ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Start,
    Reading,
    Writing,
    ExitEarly,
    End,
}

impl Stage {
    /// Whether `next` directly follows `self`.
    pub fn can_advance_to(self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Start, Stage::Reading)
                | (Stage::Reading, Stage::Writing)
                | (Stage::Reading, Stage::ExitEarly)
                | (Stage::Writing, Stage::End)
                | (Stage::ExitEarly, Stage::End)
        )
    }
}

/// Which branch a finished run took.
#[derive(Debug)]
pub enum Outcome {
    Written { target: PathBuf, bytes: usize },
    WriteDenied { target: PathBuf },
    ExitedEarly { reason: ReadError },
}

struct Pipeline {
    stage: Stage,
}

impl Pipeline {
    fn new() -> Self {
        Self { stage: Stage::Start }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "illegal transition {:?} -> {:?}",
            self.stage,
            next
        );
        trace!(from = ?self.stage, to = ?next, "pipeline stage");
        self.stage = next;
    }
}

/// Writes [`PROMPT`] to `output` and reads one line from `input`.
///
/// End of input yields an empty filename.
pub fn prompt_filename(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Filename> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(Filename::new(&line))
}

/// Reads `filename`, then writes its uppercase form when the read succeeded.
pub fn run(filename: &Filename, cfg: &Config, reporter: &dyn Reporter) -> anyhow::Result<Outcome> {
    let mut pipeline = Pipeline::new();
    pipeline.advance(Stage::Reading);

    let content = match reader::read_content(filename, &cfg.directory, reporter) {
        Ok(content) => content,
        Err(reason) if reason.is_handled() => {
            pipeline.advance(Stage::ExitEarly);
            debug!(%reason, "read failed, nothing will be written");
            reporter.report(Notice::ExitWithoutWriting);
            pipeline.advance(Stage::End);
            return Ok(Outcome::ExitedEarly { reason });
        }
        Err(err) => return Err(err).context("reading stopped on an unexpected error"),
    };

    pipeline.advance(Stage::Writing);
    let outcome = match writer::write_modified(filename, content, &cfg.directory, reporter) {
        Ok(Written { target, bytes }) => Outcome::Written { target, bytes },
        Err(err) if err.is_handled() => Outcome::WriteDenied {
            target: filename.modified().resolve(&cfg.directory),
        },
        Err(err) => return Err(err).context("writing stopped on an unexpected error"),
    };
    pipeline.advance(Stage::End);

    Ok(outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
