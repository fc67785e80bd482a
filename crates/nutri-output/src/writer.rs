//! CSV writers for normalized records and reference tables.
//!
//! Missing bounds are written as empty fields; `established` as
//! `true`/`false`; references as the comma-joined marker list.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use nutri_model::{IngredientKind, NormalizedRecord, ReferenceEntry};
use nutri_normalization::ReferenceCatalog;
use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, Result};

/// File name of the normalized records table.
pub const RECORDS_FILE_NAME: &str = "normalized.csv";

/// Column order of the normalized records table.
pub const RECORD_COLUMNS: [&str; 10] = [
    "country",
    "ingredient",
    "kind",
    "unit",
    "minimum",
    "maximum",
    "established",
    "category",
    "references",
    "original_value",
];

/// Column order of the reference tables.
pub const REFERENCE_COLUMNS: [&str; 3] = ["marker_id", "description", "kind"];

/// File name of the reference table for one kind.
pub fn references_file_name(kind: IngredientKind) -> String {
    format!("references_{}.csv", kind.table_name())
}

#[derive(Serialize)]
struct RecordRow<'a> {
    country: &'a str,
    ingredient: &'a str,
    kind: &'static str,
    unit: &'a str,
    minimum: Option<f64>,
    maximum: Option<f64>,
    established: bool,
    category: &'a str,
    references: Option<String>,
    original_value: &'a str,
}

impl<'a> From<&'a NormalizedRecord> for RecordRow<'a> {
    fn from(record: &'a NormalizedRecord) -> Self {
        Self {
            country: &record.country,
            ingredient: &record.ingredient,
            kind: record.kind.as_str(),
            unit: &record.unit,
            minimum: record.minimum,
            maximum: record.maximum,
            established: record.established,
            category: record.category.as_str(),
            references: record.references_joined(),
            original_value: &record.original_value,
        }
    }
}

#[derive(Serialize)]
struct ReferenceRow<'a> {
    marker_id: &'a str,
    description: &'a str,
    kind: &'static str,
}

/// Writes records with a header row, in the given order.
pub fn write_records<W: Write>(writer: W, records: &[NormalizedRecord]) -> csv::Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(RECORD_COLUMNS)?;
    for record in records {
        csv.serialize(RecordRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes reference entries with a header row.
pub fn write_references<'a, W: Write>(
    writer: W,
    entries: impl IntoIterator<Item = &'a ReferenceEntry>,
) -> csv::Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(REFERENCE_COLUMNS)?;
    for entry in entries {
        csv.serialize(ReferenceRow {
            marker_id: &entry.marker_id,
            description: &entry.description,
            kind: entry.kind.as_str(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Locations of the three output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub records: PathBuf,
    pub vitamin_references: PathBuf,
    pub mineral_references: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            records: dir.join(RECORDS_FILE_NAME),
            vitamin_references: dir.join(references_file_name(IngredientKind::Vitamin)),
            mineral_references: dir.join(references_file_name(IngredientKind::Mineral)),
        }
    }

    pub fn references(&self, kind: IngredientKind) -> &Path {
        match kind {
            IngredientKind::Vitamin => &self.vitamin_references,
            IngredientKind::Mineral => &self.mineral_references,
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [
            &self.records,
            &self.vitamin_references,
            &self.mineral_references,
        ]
    }
}

/// Writes the records table and both reference tables into `dir`,
/// creating it if needed.
pub fn write_outputs(
    dir: &Path,
    records: &[NormalizedRecord],
    catalog: &ReferenceCatalog,
) -> Result<OutputPaths> {
    fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let paths = OutputPaths::in_dir(dir);

    write_file(&paths.records, |file| write_records(file, records))?;
    info!(path = %paths.records.display(), rows = records.len(), "records written");

    for kind in IngredientKind::ALL {
        let path = paths.references(kind);
        write_file(path, |file| write_references(file, catalog.entries_for(kind)))?;
        info!(
            path = %path.display(),
            rows = catalog.entries_for(kind).count(),
            "references written"
        );
    }
    Ok(paths)
}

fn write_file(path: &Path, write: impl FnOnce(File) -> csv::Result<()>) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write(file).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
