//! # File Data Model
//!
//! * [`Filename`]: what the user typed at the prompt, trimmed.
//! * [`Content`]: the whole text of a file, held in memory as one string.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix prepended to the original filename to name the output file.
pub const MODIFIED_PREFIX: &str = "modified_";

/// A user supplied file name, trimmed of surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Filename(String);

impl Filename {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The name of the output file: [`MODIFIED_PREFIX`] followed by the name verbatim.
    ///
    /// The whole string is prefixed, so `notes/a.txt` becomes `modified_notes/a.txt`.
    pub fn modified(&self) -> Filename {
        Filename(format!("{MODIFIED_PREFIX}{}", self.0))
    }

    /// Resolves the name against `directory`.
    pub fn resolve(&self, directory: &Path) -> PathBuf {
        directory.join(&self.0)
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Filename {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// The full text of a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for zero-length text and text made only of whitespace.
    ///
    /// The information separators U+001C..=U+001F count as whitespace too.
    pub fn is_blank(&self) -> bool {
        self.0.chars().all(is_blank_char)
    }

    /// Consumes the content and returns its uppercase form.
    ///
    /// Uses Unicode full case mapping, so a single character may expand (`ß` → `SS`).
    pub fn into_uppercase(self) -> Content {
        Content(self.0.to_uppercase())
    }
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
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
