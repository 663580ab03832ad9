//! Terminal rendering of pipeline notices.

use colored::*;
use shout_common::report::{Notice, Reporter, Severity};
use shout_common::{NOTICE_TARGET, success};
use tracing::{error, warn};

use crate::mprint;
use crate::terminal::{colors, print};

/// Renders notices on stdout. Nothing here goes through `RUST_LOG`: status
/// lines use the raw print target and the rest use [`NOTICE_TARGET`].
pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, notice: Notice) {
        if self.quiet && matches!(notice, Notice::ContentEcho { .. }) {
            return;
        }

        let (gap_before, gap_after) = spacing(&notice);
        if gap_before {
            mprint!();
        }

        let text: String = notice.to_string();
        match (&notice, notice.severity()) {
            (Notice::ContentEcho { .. }, _) => print::print(&text),
            (_, Severity::Status) => print::print(&text.color(colors::STATUS).to_string()),
            (_, Severity::Success) => success!("{text}"),
            (_, Severity::Warning) => warn!(target: NOTICE_TARGET, "{text}"),
            (_, Severity::Error) => error!(target: NOTICE_TARGET, "{text}"),
        }

        if gap_after {
            mprint!();
        }
    }
}

/// Blank lines around a notice, as `(before, after)`.
fn spacing(notice: &Notice) -> (bool, bool) {
    match notice {
        Notice::ReadingStarted { .. } => (true, true),
        Notice::NotFound { .. }
        | Notice::PermissionDenied { .. }
        | Notice::ReadingCompleted
        | Notice::WritingStarted { .. }
        | Notice::WritePermissionDenied { .. }
        | Notice::ExitWithoutWriting => (true, false),
        _ => (false, false),
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
