use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rxseed_core::TableRow;

use crate::errors::GenerationError;

/// Write one table as CSV: header first, then one record per row.
///
/// Creates the parent directory hierarchy when missing and truncates any
/// pre-existing file at `path`. Every record is checked against the header
/// arity before it is written. Returns the number of bytes written.
pub fn write_table<T: TableRow>(path: &Path, rows: &[T]) -> Result<u64, GenerationError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(T::HEADER)?;

    for row in rows {
        let record = row.fields();
        if record.len() != T::HEADER.len() {
            return Err(GenerationError::RecordArity {
                table: T::TABLE,
                expected: T::HEADER.len(),
                actual: record.len(),
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
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
