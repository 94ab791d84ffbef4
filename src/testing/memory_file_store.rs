use std::collections::HashMap;
use std::io;

use crate::domain::AppError;
use crate::ports::FileStore;

/// In-memory file store keyed by path string.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileStore {
    files: HashMap<String, String>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

impl FileStore for MemoryFileStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)))
        })
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}
