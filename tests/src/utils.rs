#![cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use shout_common::config::Config;
use shout_common::report::{Notice, Reporter};
use tempfile::TempDir;

/// Collects every notice in emission order.
#[derive(Default)]
pub struct Recorder {
    notices: RefCell<Vec<Notice>>,
}

impl Recorder {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn saw(&self, notice: &Notice) -> bool {
        self.notices.borrow().contains(notice)
    }
}

impl Reporter for Recorder {
    fn report(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// A scratch directory that the pipeline treats as its working directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp workspace"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write workspace file");
        path
    }

    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.dir.path().join(name)).ok()
    }

    /// Names of every `modified_*` entry in the workspace.
    pub fn modified_files(&self) -> Vec<String> {
        fs::read_dir(self.dir.path())
            .expect("list workspace")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("modified_"))
            .collect()
    }

    pub fn config(&self) -> Config {
        Config {
            directory: self.dir.path().to_path_buf(),
            ..Config::default()
        }
    }
}
