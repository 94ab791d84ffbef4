use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::FileStore;

/// Filesystem-backed file store rooted at a directory.
///
/// Relative paths resolve against the root; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Create a file store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a file store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() { candidate.to_path_buf() } else { self.root.join(candidate) }
    }
}

impl FileStore for LocalFileStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }
}
