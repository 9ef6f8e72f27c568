//! Seeded sales data generation for salesgen.
//!
//! Samples sales records from a catalog, writes them as a date-sorted CSV and
//! emits the bundled product pages as plain-text files.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod pages;
pub mod records;

pub use engine::{GenerationEngine, GenerationResult, write_report};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use pages::bundled_pages;
pub use records::RecordGenerator;
