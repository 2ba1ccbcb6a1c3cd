//! In-memory table shared by all three roster tables.
//!
//! A `Table` is an ordered list of rows of one record kind. Order is
//! file order: rows are only ever appended, never sorted or removed.
//! Updates are keyed predicates that touch every matching row.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A row type that can live in a `Table` and its backing file.
///
/// `HEADER` is the fixed column list written as the first line of the
/// file; serde field names must match it exactly.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Column names, in file order.
    const HEADER: &'static [&'static str];

    /// Human-readable table name used in logs and messages.
    const TABLE_NAME: &'static str;

    /// Display cells for this row, one per header column.
    fn cells(&self) -> Vec<String>;
}

/// Ordered rows of a single record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> Table<R> {
    /// An empty table (header only).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from rows already in file order.
    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Fixed header for this table kind.
    pub fn header(&self) -> &'static [&'static str] {
        R::HEADER
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one row at the end. Existing rows are untouched.
    pub fn append(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Apply `update` to every row matching `pred`.
    ///
    /// Returns the number of rows touched; zero means the table is
    /// unchanged.
    pub fn update_where<P, F>(&mut self, mut pred: P, mut update: F) -> usize
    where
        P: FnMut(&R) -> bool,
        F: FnMut(&mut R),
    {
        let mut touched = 0;
        for row in self.rows.iter_mut().filter(|row| pred(row)) {
            update(row);
            touched += 1;
        }
        touched
    }

    /// Apply `update` to every row.
    pub fn update_all<F>(&mut self, update: F) -> usize
    where
        F: FnMut(&mut R),
    {
        self.update_where(|_| true, update)
    }

    /// Rows matching `pred`, cloned, in table order.
    pub fn select<P>(&self, mut pred: P) -> Vec<R>
    where
        P: FnMut(&R) -> bool,
    {
        self.rows.iter().filter(|row| pred(row)).cloned().collect()
    }
}
