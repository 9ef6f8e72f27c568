pub mod csv;
pub mod pages;

use std::path::Path;

use crate::errors::GenerationError;

/// Fail unless `dir` is an existing directory. Creating it is the caller's job.
pub(crate) fn require_dir(dir: &Path) -> Result<(), GenerationError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(GenerationError::MissingDirectory(dir.to_path_buf()))
    }
}
