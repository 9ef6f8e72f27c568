use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use salesgen_core::{Money, SalesRecord, SalesWindow};

/// Default number of sales records per run.
pub const DEFAULT_ROWS: usize = 1000;

/// Options for the generation engine.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of sales records to generate.
    pub rows: usize,
    /// Seed for the record sampler.
    pub seed: u64,
    /// Calendar window that sale dates are drawn from.
    pub window: SalesWindow,
    /// Destination of the sales CSV.
    pub csv_path: PathBuf,
    /// Directory receiving the product pages.
    pub pages_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: 0,
            window: SalesWindow::default(),
            csv_path: PathBuf::from("data/structured/daily_sales.csv"),
            pages_dir: PathBuf::from("data/unstructured"),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub csv_path: PathBuf,
    pub csv_bytes: u64,
    pub discounted_rows: u64,
    pub total_revenue: Money,
    pub rows_by_category: BTreeMap<String, u64>,
    pub rows_by_region: BTreeMap<String, u64>,
    pub pages_written: Vec<PathBuf>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, options: &GenerateOptions) -> Self {
        Self {
            run_id,
            seed: options.seed,
            rows_requested: options.rows as u64,
            rows_generated: 0,
            window_start: options.window.start(),
            window_end: options.window.end(),
            csv_path: options.csv_path.clone(),
            csv_bytes: 0,
            discounted_rows: 0,
            total_revenue: Money::ZERO,
            rows_by_category: BTreeMap::new(),
            rows_by_region: BTreeMap::new(),
            pages_written: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_row(&mut self, record: &SalesRecord, discounted: bool) {
        self.rows_generated += 1;
        if discounted {
            self.discounted_rows += 1;
        }
        self.total_revenue = self.total_revenue + record.total_revenue;
        *self
            .rows_by_category
            .entry(record.category.label().to_string())
            .or_insert(0) += 1;
        *self
            .rows_by_region
            .entry(record.region.label().to_string())
            .or_insert(0) += 1;
    }
}
