use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::money::Money;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.toml");

/// Product category. Labels match the catalog file and CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    #[serde(rename = "Sports & Outdoors")]
    SportsOutdoors,
    #[serde(rename = "Beauty & Personal Care")]
    BeautyPersonalCare,
    #[serde(rename = "Clothing")]
    Clothing,
    #[serde(rename = "Books")]
    Books,
    #[serde(rename = "Toys & Games")]
    ToysGames,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "Pet Supplies")]
    PetSupplies,
    #[serde(rename = "Food & Grocery")]
    FoodGrocery,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::HomeKitchen,
        Category::SportsOutdoors,
        Category::BeautyPersonalCare,
        Category::Clothing,
        Category::Books,
        Category::ToysGames,
        Category::OfficeSupplies,
        Category::PetSupplies,
        Category::FoodGrocery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::HomeKitchen => "Home & Kitchen",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::BeautyPersonalCare => "Beauty & Personal Care",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::ToysGames => "Toys & Games",
            Category::OfficeSupplies => "Office Supplies",
            Category::PetSupplies => "Pet Supplies",
            Category::FoodGrocery => "Food & Grocery",
        }
    }

    /// Categories whose sampled unit counts are boosted by half.
    pub fn is_high_volume(self) -> bool {
        matches!(self, Category::Electronics | Category::Clothing)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == raw)
            .ok_or_else(|| Error::UnknownCategory(raw.to_string()))
    }
}

/// Catalog file layout: ordered category groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryGroup>,
}

/// A category and the products listed under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: Category,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

/// One `(id, name, price)` tuple inside a category group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: String,
    pub name: String,
    pub price: Money,
}

/// A flattened catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub base_price: Money,
}

/// Flattened, validated product catalog.
///
/// Products keep the order of their groups in the source file.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Flatten category groups and check catalog invariants.
    ///
    /// This checks:
    /// - at least one product exists
    /// - product ids and names are non-empty
    /// - product ids are unique
    /// - base prices are strictly positive
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        let mut products = Vec::new();
        let mut by_id = HashMap::new();

        for group in file.categories {
            for entry in group.products {
                let id = entry.id.trim().to_string();
                let name = entry.name.trim().to_string();
                if id.is_empty() {
                    return Err(Error::InvalidCatalog(format!(
                        "empty product id in category {}",
                        group.name
                    )));
                }
                if name.is_empty() {
                    return Err(Error::InvalidCatalog(format!(
                        "empty product name for {id}"
                    )));
                }
                if !entry.price.is_positive() {
                    return Err(Error::InvalidCatalog(format!(
                        "non-positive base price for {id}: {}",
                        entry.price
                    )));
                }
                if by_id.contains_key(&id) {
                    return Err(Error::InvalidCatalog(format!("duplicate product id: {id}")));
                }

                by_id.insert(id.clone(), products.len());
                products.push(Product {
                    id,
                    name,
                    category: group.name,
                    base_price: entry.price,
                });
            }
        }

        if products.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no products".to_string()));
        }

        Ok(Self { products, by_id })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_file(file)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    pub fn product_at(&self, idx: usize) -> Option<&Product> {
        self.products.get(idx)
    }

    pub fn categories(&self) -> BTreeSet<Category> {
        self.products.iter().map(|product| product.category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_flattens_in_file_order() {
        let catalog = Catalog::bundled().expect("bundled catalog");
        assert_eq!(catalog.len(), 34);
        assert_eq!(catalog.categories().len(), 10);

        let first = catalog.product_at(0).expect("first product");
        assert_eq!(first.id, "ELEC001");
        assert_eq!(first.category, Category::Electronics);
        assert_eq!(first.base_price, Money::from_cents(7999));

        let last = catalog.product_at(catalog.len() - 1).expect("last product");
        assert_eq!(last.id, "FOOD003");
        assert_eq!(last.category, Category::FoodGrocery);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::bundled().expect("bundled catalog");
        let chair = catalog.get("OFFC001").expect("office chair");
        assert_eq!(chair.name, "Ergonomic Office Chair");
        assert_eq!(chair.base_price.to_string(), "249.99");
        assert!(catalog.get("NOPE001").is_none());
    }

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().ok(), Some(category));
        }
        assert!("Garden".parse::<Category>().is_err());
    }

    #[test]
    fn only_electronics_and_clothing_are_high_volume() {
        let boosted: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|category| category.is_high_volume())
            .collect();
        assert_eq!(boosted, vec![Category::Electronics, Category::Clothing]);
    }
}
