//! Core contracts for salesgen.
//!
//! Defines the catalog, sales record and product page types shared by the
//! generator, the verifier and the CLI.

pub mod catalog;
pub mod error;
pub mod money;
pub mod page;
pub mod record;
pub mod window;

pub use catalog::{Catalog, CatalogFile, Category, CategoryGroup, Product, ProductEntry};
pub use error::{Error, Result};
pub use money::Money;
pub use page::ProductPage;
pub use record::{Region, SALES_COLUMNS, SalesRecord};
pub use window::SalesWindow;
