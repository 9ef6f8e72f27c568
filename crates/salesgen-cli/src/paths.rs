use std::path::{Path, PathBuf};

use crate::{CliError, CliResult};

/// Output layout under a base directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub base_dir: PathBuf,
    pub structured_dir: PathBuf,
    pub unstructured_dir: PathBuf,
}

impl DataPaths {
    pub fn new(base_dir: PathBuf) -> Self {
        let structured_dir = base_dir.join("structured");
        let unstructured_dir = base_dir.join("unstructured");
        Self {
            base_dir,
            structured_dir,
            unstructured_dir,
        }
    }

    pub fn sales_csv_path(&self) -> PathBuf {
        self.structured_dir.join("daily_sales.csv")
    }
}

/// Create the directories that will receive the CSV and the product pages.
pub fn ensure_output_dirs(csv_path: &Path, pages_dir: &Path) -> CliResult<()> {
    if let Some(parent) = csv_path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_if_missing(parent)?;
    }
    create_if_missing(pages_dir)
}

fn create_if_missing(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
