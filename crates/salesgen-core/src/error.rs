use thiserror::Error;

/// Core error type shared across salesgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    /// The catalog file could not be decoded.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),
    /// A category label is not one of the known categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// A region label is not one of the known regions.
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    /// A money literal could not be parsed.
    #[error("invalid money value: {0}")]
    InvalidMoney(String),
    /// The sales window is empty or out of calendar range.
    #[error("invalid window: {0}")]
    InvalidWindow(String),
}

/// Convenience alias for results returned by salesgen crates.
pub type Result<T> = std::result::Result<T, Error>;
