//! Persistence Adapters - CSV-based File Storage
//!
//! Implements the Repository port with one CSV file per roster table.
//! Each load reads the whole file; each save rewrites it via a temp
//! file and rename. No database dependency.

pub mod csv_table;
pub mod repository_impl;

pub use csv_table::{CsvTableFile, decode_table, encode_table};
pub use repository_impl::CsvRepository;
