/// Authored product page keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub product_id: String,
    pub body: String,
}

impl ProductPage {
    pub fn new(product_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            body: body.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_product_page.txt", self.product_id)
    }

    /// Body with surrounding whitespace removed, as written to disk.
    pub fn contents(&self) -> &str {
        self.body.trim()
    }
}
