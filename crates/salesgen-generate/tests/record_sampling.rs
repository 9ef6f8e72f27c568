use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use salesgen_core::{Catalog, Region, SalesWindow};
use salesgen_generate::RecordGenerator;

fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog")
}

#[test]
fn zero_rows_yield_no_records() {
    let catalog = catalog();
    let generator = RecordGenerator::new(&catalog, SalesWindow::default());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    assert!(generator.generate(0, &mut rng).is_empty());
}

#[test]
fn single_record_is_consistent() {
    let catalog = catalog();
    let generator = RecordGenerator::new(&catalog, SalesWindow::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let records = generator.generate(1, &mut rng);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert!(Region::ALL.contains(&record.region));
    assert_eq!(
        record.total_revenue.cents(),
        u64::from(record.units_sold) * record.unit_price.cents()
    );
}

#[test]
fn records_respect_catalog_window_and_revenue() {
    let catalog = catalog();
    let window = SalesWindow::default();
    let generator = RecordGenerator::new(&catalog, window);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for record in generator.generate(2000, &mut rng) {
        let product = catalog
            .get(&record.product_id)
            .unwrap_or_else(|| panic!("unknown product {}", record.product_id));
        assert_eq!(record.product_name, product.name);
        assert_eq!(record.category, product.category);
        assert!(window.contains(record.date), "date {} outside window", record.date);
        assert!(record.units_sold >= 1);
        assert!(record.unit_price.is_positive());
        assert_eq!(
            record.total_revenue.cents(),
            u64::from(record.units_sold) * record.unit_price.cents()
        );
    }
}

#[test]
fn high_volume_categories_get_boosted_units() {
    let catalog = catalog();
    let generator = RecordGenerator::new(&catalog, SalesWindow::default());
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let records = generator.generate(5000, &mut rng);
    let mut boosted_max = 0;
    for record in &records {
        if record.category.is_high_volume() {
            assert!(record.units_sold <= 75);
            boosted_max = boosted_max.max(record.units_sold);
        } else {
            assert!(record.units_sold <= 50);
        }
    }
    assert!(boosted_max > 50, "expected some boosted counts above 50");
}

#[test]
fn discounts_stay_in_range_and_occur_about_one_in_five() {
    let catalog = catalog();
    let generator = RecordGenerator::new(&catalog, SalesWindow::default());
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let records = generator.generate(5000, &mut rng);
    let mut discounted = 0_usize;
    for record in &records {
        let product = catalog.get(&record.product_id).expect("catalog product");
        if record.is_discounted(product) {
            discounted += 1;
            assert!(record.unit_price >= product.base_price.scale(0.80));
            assert!(record.unit_price <= product.base_price.scale(0.95));
        }
    }

    let rate = discounted as f64 / records.len() as f64;
    assert!((0.17..=0.23).contains(&rate), "discount rate {rate}");
}

#[test]
fn same_seed_gives_same_records() {
    let catalog = catalog();
    let generator = RecordGenerator::new(&catalog, SalesWindow::default());

    let first = generator.generate(500, &mut ChaCha8Rng::seed_from_u64(99));
    let second = generator.generate(500, &mut ChaCha8Rng::seed_from_u64(99));
    let other = generator.generate(500, &mut ChaCha8Rng::seed_from_u64(100));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn every_region_and_window_day_is_reachable() {
    let catalog = catalog();
    let window = SalesWindow::default();
    let generator = RecordGenerator::new(&catalog, window);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let records = generator.generate(5000, &mut rng);
    for region in Region::ALL {
        assert!(records.iter().any(|record| record.region == region));
    }
    assert!(records.iter().any(|record| record.date == window.start()));
    assert!(records.iter().any(|record| record.date == window.end()));
}
