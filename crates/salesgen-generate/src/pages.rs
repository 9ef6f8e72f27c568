use salesgen_core::{Catalog, ProductPage};

use crate::errors::GenerationError;

const BUNDLED_PAGES: [(&str, &str); 10] = [
    ("ELEC001", include_str!("../assets/pages/ELEC001.txt")),
    ("HOME003", include_str!("../assets/pages/HOME003.txt")),
    ("SPRT001", include_str!("../assets/pages/SPRT001.txt")),
    ("BEAU001", include_str!("../assets/pages/BEAU001.txt")),
    ("CLTH001", include_str!("../assets/pages/CLTH001.txt")),
    ("BOOK001", include_str!("../assets/pages/BOOK001.txt")),
    ("TOYS001", include_str!("../assets/pages/TOYS001.txt")),
    ("OFFC001", include_str!("../assets/pages/OFFC001.txt")),
    ("PETS001", include_str!("../assets/pages/PETS001.txt")),
    ("FOOD001", include_str!("../assets/pages/FOOD001.txt")),
];

/// Product pages shipped with the crate, in emission order.
pub fn bundled_pages() -> Vec<ProductPage> {
    BUNDLED_PAGES
        .iter()
        .map(|(product_id, body)| ProductPage::new(*product_id, *body))
        .collect()
}

/// Ensure every page belongs to a catalog product and ids are not repeated.
pub fn validate_pages(pages: &[ProductPage], catalog: &Catalog) -> Result<(), GenerationError> {
    let mut seen = std::collections::BTreeSet::new();
    for page in pages {
        if catalog.get(&page.product_id).is_none() {
            return Err(GenerationError::InvalidPage(format!(
                "page references unknown product: {}",
                page.product_id
            )));
        }
        if !seen.insert(page.product_id.as_str()) {
            return Err(GenerationError::InvalidPage(format!(
                "duplicate page for product: {}",
                page.product_id
            )));
        }
    }
    Ok(())
}
