//! Output generation for normalized supplement ranges.
//!
//! Writes three CSV files into an output directory:
//!
//! - **`normalized.csv`**: one row per normalized record
//! - **`references_vitamins.csv`**: vitamin footnotes
//! - **`references_minerals.csv`**: mineral footnotes

pub mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    OutputPaths, RECORD_COLUMNS, RECORDS_FILE_NAME, REFERENCE_COLUMNS, references_file_name,
    write_outputs, write_records, write_references,
};
