//! Verification of generated sales artifacts.

pub mod errors;
pub mod model;
pub mod pages;
pub mod sales;

pub use errors::EvalError;
pub use model::{PagesVerification, SalesVerification, Violation};
pub use pages::verify_product_pages;
pub use sales::verify_sales_csv;
