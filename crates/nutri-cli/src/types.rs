use std::path::PathBuf;

use nutri_model::{IngredientKind, NormalizedRecord};
use nutri_normalization::{NormalizationReport, UnresolvedReference};
use nutri_output::OutputPaths;

#[derive(Debug)]
pub struct RunResult {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    /// `None` on a dry run.
    pub outputs: Option<OutputPaths>,
    pub report: NormalizationReport,
    pub kind_reports: Vec<(IngredientKind, NormalizationReport)>,
    pub unresolved: Vec<UnresolvedReference>,
}

/// One ingredient compared across countries.
#[derive(Debug)]
pub struct IngredientView {
    pub query: String,
    pub rows: Vec<IngredientRow>,
}

#[derive(Debug)]
pub struct IngredientRow {
    pub record: NormalizedRecord,
    /// Resolved footnote lines, `"[id] description"`.
    pub references: Vec<String>,
}
