use std::path::PathBuf;

/// Runtime options. The default reproduces the plain interactive program:
/// no banner, no summary, content echoed, current directory.
pub struct Config {
    /// Prints a banner before the prompt.
    pub banner: bool,
    /// Prints a summary block after a successful write.
    pub summary: bool,
    /// Hides the content echo. Errors, warnings and completion notices are always shown.
    pub quiet: bool,
    /// Directory the filename is resolved in and the modified file is written to.
    pub directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: false,
            summary: false,
            quiet: false,
            directory: PathBuf::from("."),
        }
    }
}
