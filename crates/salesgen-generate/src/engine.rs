use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use salesgen_core::{Catalog, ProductPage, SalesRecord};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::write_sales_csv;
use crate::output::pages::emit_product_pages;
use crate::pages::validate_pages;
use crate::records::RecordGenerator;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub report: GenerationReport,
    pub records: Vec<SalesRecord>,
}

/// Entry point for generating the sales CSV and product pages.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Sample records without touching the filesystem.
    pub fn sample_records(&self, catalog: &Catalog) -> Vec<SalesRecord> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        RecordGenerator::new(catalog, self.options.window).generate(self.options.rows, &mut rng)
    }

    /// Generate records, write the CSV, then emit `pages`.
    ///
    /// Pages are validated against the catalog before anything is written.
    pub fn run(
        &self,
        catalog: &Catalog,
        pages: &[ProductPage],
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        validate_pages(pages, catalog)?;

        info!(
            run_id = %run_id,
            rows = self.options.rows,
            seed = self.options.seed,
            products = catalog.len(),
            window_start = %self.options.window.start(),
            window_end = %self.options.window.end(),
            "generation started"
        );

        let mut report = GenerationReport::new(run_id.clone(), &self.options);
        let records = self.sample_records(catalog);
        for record in &records {
            let discounted = catalog
                .get(&record.product_id)
                .is_some_and(|product| record.is_discounted(product));
            report.record_row(record, discounted);
        }

        report.csv_bytes = write_sales_csv(&self.options.csv_path, &records)?;
        info!(
            path = %self.options.csv_path.display(),
            rows = records.len(),
            bytes = report.csv_bytes,
            "sales csv written"
        );

        report.pages_written = emit_product_pages(&self.options.pages_dir, pages)?;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            rows = report.rows_generated,
            pages = report.pages_written.len(),
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(GenerationResult { report, records })
    }
}

/// Write a report as pretty JSON.
pub fn write_report(path: &Path, report: &GenerationReport) -> Result<(), GenerationError> {
    let data = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, data).map_err(|err| GenerationError::io(path, err))
}
