use shout_common::report::{Notice, Reporter};

/// Emits a notice when dropped.
///
/// Bound to a local at the top of a step, it reports completion on every exit
/// path, including early returns through `?`.
pub(crate) struct Completion<'a> {
    reporter: &'a dyn Reporter,
    notice: Option<Notice>,
}

impl<'a> Completion<'a> {
    pub(crate) fn new(reporter: &'a dyn Reporter, notice: Notice) -> Self {
        Self {
            reporter,
            notice: Some(notice),
        }
    }
}

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        if let Some(notice) = self.notice.take() {
            self.reporter.report(notice);
        }
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
