use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Structured violation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Violation {
    pub fn new(code: &str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            path: path.into(),
            message: message.into(),
            row_index: None,
            example: None,
        }
    }

    pub fn at_row(mut self, row_index: u64) -> Self {
        self.row_index = Some(row_index);
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Outcome of checking a sales CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesVerification {
    pub path: PathBuf,
    pub rows_checked: u64,
    pub violations: Vec<Violation>,
}

impl SalesVerification {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.violations.iter().any(|violation| violation.code == code)
    }
}

/// Outcome of checking an emitted product page directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesVerification {
    pub dir: PathBuf,
    pub pages_checked: u64,
    pub violations: Vec<Violation>,
}

impl PagesVerification {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.violations.iter().any(|violation| violation.code == code)
    }
}
