//! Read-only access to user-provided files (configuration, custom templates).

use crate::domain::AppError;

/// Port for reading small UTF-8 files relative to the working directory.
pub trait FileStore {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;
}
