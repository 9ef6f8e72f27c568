use std::path::{Path, PathBuf};

use tracing::info;

use salesgen_core::ProductPage;

use crate::errors::GenerationError;
use crate::output::require_dir;

/// Write each page's trimmed body to `<product_id>_product_page.txt` in `dir`.
///
/// Existing files with the same name are overwritten. The directory must
/// already exist.
pub fn emit_product_pages(
    dir: &Path,
    pages: &[ProductPage],
) -> Result<Vec<PathBuf>, GenerationError> {
    require_dir(dir)?;

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let path = dir.join(page.file_name());
        std::fs::write(&path, page.contents()).map_err(|err| GenerationError::io(&path, err))?;
        info!(product_id = %page.product_id, path = %path.display(), "product page written");
        written.push(path);
    }

    Ok(written)
}
