use rand::Rng;
use tracing::debug;

use salesgen_core::{Catalog, Money, Product, Region, SalesRecord, SalesWindow};

/// Inclusive range of base units drawn per record.
pub const UNITS_RANGE: (u32, u32) = (1, 50);
/// Probability that a record carries a discounted price.
pub const DISCOUNT_PROBABILITY: f64 = 0.2;
/// Inclusive range of the price factor applied to discounted records.
pub const DISCOUNT_FACTOR_RANGE: (f64, f64) = (0.80, 0.95);

/// Samples sales records from a catalog within a date window.
#[derive(Debug, Clone, Copy)]
pub struct RecordGenerator<'a> {
    catalog: &'a Catalog,
    window: SalesWindow,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(catalog: &'a Catalog, window: SalesWindow) -> Self {
        Self { catalog, window }
    }

    pub fn window(&self) -> SalesWindow {
        self.window
    }

    /// Generate `rows` records in sampling order.
    pub fn generate<R: Rng + ?Sized>(&self, rows: usize, rng: &mut R) -> Vec<SalesRecord> {
        let mut records = Vec::with_capacity(rows);
        for _ in 0..rows {
            records.push(self.sample(rng));
        }
        debug!(rows = records.len(), "records sampled");
        records
    }

    /// Draw a single record.
    ///
    /// Draw order is product, day, units, discount, region.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SalesRecord {
        let product = self.pick_product(rng);

        let offset = rng.random_range(0..self.window.days());
        let date = self.window.day(offset).unwrap_or_else(|| self.window.end());

        let units = sample_units(product, rng);
        let unit_price = sample_unit_price(product, rng);
        let region = Region::ALL[rng.random_range(0..Region::ALL.len())];

        SalesRecord::new(date, product, units, unit_price, region)
    }

    fn pick_product<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a Product {
        let products = self.catalog.products();
        &products[rng.random_range(0..products.len())]
    }
}

fn sample_units<R: Rng + ?Sized>(product: &Product, rng: &mut R) -> u32 {
    let base = rng.random_range(UNITS_RANGE.0..=UNITS_RANGE.1);
    if product.category.is_high_volume() {
        // x1.5, truncated
        base * 3 / 2
    } else {
        base
    }
}

fn sample_unit_price<R: Rng + ?Sized>(product: &Product, rng: &mut R) -> Money {
    if rng.random_bool(DISCOUNT_PROBABILITY) {
        let factor = rng.random_range(DISCOUNT_FACTOR_RANGE.0..=DISCOUNT_FACTOR_RANGE.1);
        let discounted = product.base_price.scale(factor);
        if discounted.is_positive() {
            return discounted;
        }
    }
    product.base_price
}
