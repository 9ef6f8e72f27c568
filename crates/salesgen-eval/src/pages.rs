use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use salesgen_core::ProductPage;

use crate::errors::EvalError;
use crate::model::{PagesVerification, Violation};

/// Check that `dir` holds exactly the trimmed `pages` and nothing else.
pub fn verify_product_pages(
    dir: &Path,
    pages: &[ProductPage],
) -> Result<PagesVerification, EvalError> {
    if !dir.is_dir() {
        return Err(EvalError::InvalidDataset(format!(
            "page directory not found: {}",
            dir.display()
        )));
    }

    let expected: BTreeMap<String, &ProductPage> = pages
        .iter()
        .map(|page| (page.file_name(), page))
        .collect();

    let mut violations = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !expected.contains_key(&name) {
            violations.push(Violation::new(
                "unexpected_file",
                name.clone(),
                "file is not an authored product page",
            ));
        }
    }

    let mut pages_checked = 0_u64;
    for (name, page) in &expected {
        let path = dir.join(name);
        if !path.is_file() {
            violations.push(Violation::new("missing_page", name.clone(), "page not emitted"));
            continue;
        }
        pages_checked += 1;
        let contents = fs::read_to_string(&path)?;
        if contents != page.contents() {
            violations.push(Violation::new(
                "page_mismatch",
                name.clone(),
                format!(
                    "expected {} bytes of authored content, found {}",
                    page.contents().len(),
                    contents.len()
                ),
            ));
        }
    }

    for violation in &violations {
        warn!(
            code = %violation.code,
            path = %violation.path,
            message = %violation.message,
            "product page violation"
        );
    }
    info!(
        dir = %dir.display(),
        pages = pages_checked,
        violations = violations.len(),
        "product pages verified"
    );

    Ok(PagesVerification {
        dir: dir.to_path_buf(),
        pages_checked,
        violations,
    })
}
