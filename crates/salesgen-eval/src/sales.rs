use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{info, warn};

use salesgen_core::{Catalog, Category, Money, Region, SALES_COLUMNS, SalesWindow};

use crate::errors::EvalError;
use crate::model::{SalesVerification, Violation};

/// Check a sales CSV against the catalog and record invariants.
///
/// This checks:
/// - the header matches the fixed column order
/// - every field parses (ISO date, integer units, two-decimal money, region)
/// - dates fall inside `window` and never decrease
/// - product ids exist and carry the catalog name and category
/// - units and prices are positive and revenue equals units times price
/// - the data row count equals `expected_rows` when given
pub fn verify_sales_csv(
    path: &Path,
    catalog: &Catalog,
    window: SalesWindow,
    expected_rows: Option<u64>,
) -> Result<SalesVerification, EvalError> {
    if !path.exists() {
        return Err(EvalError::InvalidDataset(format!(
            "sales csv not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut violations = Vec::new();
    let header: Vec<&str> = headers.iter().collect();
    if header != SALES_COLUMNS {
        violations.push(
            Violation::new(
                "header_mismatch",
                "header",
                format!("expected columns {}", SALES_COLUMNS.join(",")),
            )
            .with_example(header.join(",")),
        );
    }

    let mut rows_checked = 0_u64;
    let mut previous_date: Option<NaiveDate> = None;
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let row_index = idx as u64;
        rows_checked += 1;

        if let Some(date) = check_row(&row, row_index, catalog, window, &mut violations) {
            if let Some(previous) = previous_date
                && date < previous
            {
                violations.push(
                    Violation::new(
                        "unsorted",
                        "date",
                        format!("{date} appears after {previous}"),
                    )
                    .at_row(row_index),
                );
            }
            previous_date = Some(date);
        }
    }

    if let Some(expected) = expected_rows
        && expected != rows_checked
    {
        violations.push(Violation::new(
            "row_count",
            "rows",
            format!("expected {expected} data rows, found {rows_checked}"),
        ));
    }

    for violation in &violations {
        warn!(
            code = %violation.code,
            path = %violation.path,
            row = violation.row_index,
            message = %violation.message,
            "sales csv violation"
        );
    }
    info!(
        path = %path.display(),
        rows = rows_checked,
        violations = violations.len(),
        "sales csv verified"
    );

    Ok(SalesVerification {
        path: path.to_path_buf(),
        rows_checked,
        violations,
    })
}

/// Check one data row, returning its date when it parsed.
fn check_row(
    row: &StringRecord,
    row_index: u64,
    catalog: &Catalog,
    window: SalesWindow,
    violations: &mut Vec<Violation>,
) -> Option<NaiveDate> {
    if row.len() != SALES_COLUMNS.len() {
        violations.push(
            Violation::new(
                "invalid_row",
                "row",
                format!("expected {} fields, found {}", SALES_COLUMNS.len(), row.len()),
            )
            .at_row(row_index),
        );
        return None;
    }

    let field = |idx: usize| row.get(idx).unwrap_or_default();
    let mut invalid = |column: &str, value: &str| {
        violations.push(
            Violation::new("invalid_field", column, format!("cannot parse {column}"))
                .at_row(row_index)
                .with_example(value),
        );
    };

    let date = NaiveDate::parse_from_str(field(0), "%Y-%m-%d").ok();
    if date.is_none() {
        invalid("date", field(0));
    }
    let category = field(3).parse::<Category>().ok();
    if category.is_none() {
        invalid("category", field(3));
    }
    let units = field(4).parse::<u32>().ok();
    if units.is_none() {
        invalid("units_sold", field(4));
    }
    let unit_price = parse_money(field(5));
    if unit_price.is_none() {
        invalid("unit_price", field(5));
    }
    let revenue = parse_money(field(6));
    if revenue.is_none() {
        invalid("total_revenue", field(6));
    }
    if field(7).parse::<Region>().is_err() {
        invalid("region", field(7));
    }

    if let Some(date) = date
        && !window.contains(date)
    {
        violations.push(
            Violation::new(
                "date_out_of_window",
                "date",
                format!("{date} outside {} ..= {}", window.start(), window.end()),
            )
            .at_row(row_index),
        );
    }

    match catalog.get(field(1)) {
        Some(product) => {
            if product.name != field(2) || Some(product.category) != category {
                violations.push(
                    Violation::new(
                        "catalog_mismatch",
                        "product_id",
                        format!(
                            "{} is '{}' in {}",
                            product.id, product.name, product.category
                        ),
                    )
                    .at_row(row_index)
                    .with_example(format!("{} / {}", field(2), field(3))),
                );
            }
        }
        None => violations.push(
            Violation::new("unknown_product", "product_id", "product not in catalog")
                .at_row(row_index)
                .with_example(field(1)),
        ),
    }

    if units == Some(0) || unit_price.is_some_and(|price| !price.is_positive()) {
        violations.push(
            Violation::new(
                "non_positive",
                "units_sold",
                "units and unit price must be positive",
            )
            .at_row(row_index),
        );
    }

    if let (Some(units), Some(unit_price), Some(revenue)) = (units, unit_price, revenue) {
        let expected = unit_price.times(units);
        if expected != revenue {
            violations.push(
                Violation::new(
                    "revenue_mismatch",
                    "total_revenue",
                    format!("{units} x {unit_price} = {expected}"),
                )
                .at_row(row_index)
                .with_example(revenue.to_string()),
            );
        }
    }

    date
}

/// Money fields must carry exactly two fractional digits.
fn parse_money(raw: &str) -> Option<Money> {
    let (_, fraction) = raw.split_once('.')?;
    if fraction.len() != 2 {
        return None;
    }
    raw.parse().ok()
}
