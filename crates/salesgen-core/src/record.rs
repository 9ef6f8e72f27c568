use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::error::{Error, Result};
use crate::money::Money;

/// Fixed column order of the sales CSV.
pub const SALES_COLUMNS: [&str; 8] = [
    "date",
    "product_id",
    "product_name",
    "category",
    "units_sold",
    "unit_price",
    "total_revenue",
    "region",
];

/// Sales region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.label() == raw)
            .ok_or_else(|| Error::UnknownRegion(raw.to_string()))
    }
}

/// One synthetic sales event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product_id: String,
    pub product_name: String,
    pub category: Category,
    pub units_sold: u32,
    pub unit_price: Money,
    pub total_revenue: Money,
    pub region: Region,
}

impl SalesRecord {
    /// Build a record for `product`; revenue is always derived from units and price.
    pub fn new(
        date: NaiveDate,
        product: &Product,
        units_sold: u32,
        unit_price: Money,
        region: Region,
    ) -> Self {
        Self {
            date,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            category: product.category,
            units_sold,
            unit_price,
            total_revenue: unit_price.times(units_sold),
            region,
        }
    }

    pub fn is_discounted(&self, product: &Product) -> bool {
        self.unit_price != product.base_price
    }

    /// Field values in `SALES_COLUMNS` order.
    pub fn csv_fields(&self) -> [String; 8] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.product_id.clone(),
            self.product_name.clone(),
            self.category.label().to_string(),
            self.units_sold.to_string(),
            self.unit_price.to_string(),
            self.total_revenue.to_string(),
            self.region.label().to_string(),
        ]
    }
}
