use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use salesgen_core::{SALES_COLUMNS, SalesRecord};

use crate::errors::GenerationError;
use crate::output::require_dir;

/// Write records as CSV, sorted by date, returning the bytes written.
///
/// The sort is stable, so records sharing a date keep their generation order.
/// The parent directory must already exist.
pub fn write_sales_csv(path: &Path, records: &[SalesRecord]) -> Result<u64, GenerationError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        require_dir(parent)?;
    }

    let mut sorted: Vec<&SalesRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let file = File::create(path).map_err(|err| GenerationError::io(path, err))?;
    let counting = CountingWriter::new(BufWriter::new(file));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer
        .write_record(SALES_COLUMNS)
        .map_err(|err| GenerationError::csv(path, err))?;
    for record in sorted {
        writer
            .write_record(record.csv_fields())
            .map_err(|err| GenerationError::csv(path, err))?;
    }

    writer.flush().map_err(|err| GenerationError::io(path, err))?;
    let counting = writer
        .into_inner()
        .map_err(|err| GenerationError::io(path, err.into_error()))?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
