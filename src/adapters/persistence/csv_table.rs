//! CSV Table File - Whole-table CSV Persistence
//!
//! One `CsvTableFile` per roster table. `load` reads and decodes the
//! entire file; a missing file is an empty table, not an error. `save`
//! encodes the entire table (header always first) to a temp file and
//! renames it over the table file, so readers see the old table or the
//! new one, never a half-written file.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::domain::{Record, Table};

/// Decode a full CSV document into a table.
///
/// The header row must hold exactly the columns of `R::HEADER`, in any
/// order. A missing column and an unknown column are both errors, as
/// is a malformed data row: the next whole-table save would otherwise
/// drop that data silently. A zero-length or whitespace-only document
/// is an empty table.
pub fn decode_table<R: Record>(bytes: &[u8]) -> Result<Table<R>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Table::empty());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    for column in R::HEADER {
        anyhow::ensure!(
            headers.iter().any(|h| h == *column),
            "{} table is missing column {column:?}",
            R::TABLE_NAME
        );
    }
    for header in &headers {
        anyhow::ensure!(
            R::HEADER.contains(&header),
            "{} table has unexpected column {header:?}",
            R::TABLE_NAME
        );
    }

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<R>().enumerate() {
        let row = result.with_context(|| {
            format!("Malformed row {} in {} table", index + 1, R::TABLE_NAME)
        })?;
        rows.push(row);
    }

    Ok(Table::from_rows(rows))
}

/// Encode a table as a full CSV document: header row, then one line
/// per row, `\n` terminated.
pub fn encode_table<R: Record>(table: &Table<R>) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(R::HEADER)
        .context("Failed to write CSV header")?;
    for row in table.rows() {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to serialize {} row", R::TABLE_NAME))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))
}

/// A single CSV-backed table on disk.
pub struct CsvTableFile<R> {
    /// Path to the table file.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> CsvTableFile<R> {
    /// Bind a table to `path`. Nothing is read or created yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");

        Self {
            path,
            tmp_path: PathBuf::from(tmp),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole table. Missing file → empty table.
    #[instrument(skip(self), fields(table = R::TABLE_NAME, path = %self.path.display()))]
    pub async fn load(&self) -> Result<Table<R>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No table file found, starting empty");
                return Ok(Table::empty());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        let table = decode_table(&bytes)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        debug!(rows = table.len(), "Table loaded");
        Ok(table)
    }

    /// Replace the whole table atomically (tmp → rename).
    #[instrument(skip(self, table), fields(table = R::TABLE_NAME, rows = table.len()))]
    pub async fn save(&self, table: &Table<R>) -> Result<()> {
        let bytes = encode_table(table)?;

        fs::write(&self.tmp_path, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", self.tmp_path.display()))?;

        fs::rename(&self.tmp_path, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        info!(path = %self.path.display(), "Table saved");
        Ok(())
    }
}
