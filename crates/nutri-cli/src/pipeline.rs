//! Normalization pipeline with explicit stages.
//!
//! 1. **Load**: read and parse the TOML data file
//! 2. **Normalize**: turn every cell into records and build the reference catalog
//! 3. **Output**: write the CSV files
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use nutri_model::{NormalizedRecord, SourceDataset};
use nutri_normalization::{
    Normalization, NormalizationContext, ParseOptions, ReferenceCatalog, UnresolvedReference,
    build_reference_catalog, normalize_dataset,
};
use nutri_output::{OutputPaths, write_outputs};
use nutri_standards::{default_data_path, load_dataset};

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Result of the load stage.
#[derive(Debug)]
pub struct LoadResult {
    pub data_path: PathBuf,
    pub dataset: SourceDataset,
}

/// Resolves `--data`, falling back to `NUTRI_DATA_FILE` and the bundled file.
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_data_path, Path::to_path_buf)
}

/// Read the data file.
pub fn load(data_path: &Path) -> Result<LoadResult> {
    let dataset = load_dataset(data_path)
        .with_context(|| format!("load data file {}", data_path.display()))?;
    Ok(LoadResult {
        data_path: data_path.to_path_buf(),
        dataset,
    })
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage.
#[derive(Debug)]
pub struct NormalizeResult {
    pub normalization: Normalization,
    pub catalog: ReferenceCatalog,
    /// Markers cited by records but missing from the catalog.
    pub unresolved: Vec<UnresolvedReference>,
}

/// Normalize both tables and resolve their markers.
///
/// Strategies come from the data file when it declares any.
pub fn normalize(dataset: &SourceDataset, options: ParseOptions) -> NormalizeResult {
    let context = NormalizationContext::for_dataset(dataset).with_options(options);
    let normalization = normalize_dataset(dataset, &context);

    let catalog =
        build_reference_catalog(&dataset.vitamin_references, &dataset.mineral_references);
    let unresolved = catalog.unresolved(&normalization.records);
    for missing in &unresolved {
        warn!(
            country = %missing.country,
            ingredient = %missing.ingredient,
            kind = %missing.kind,
            marker = %missing.marker,
            "reference marker not found in catalog"
        );
    }

    NormalizeResult {
        normalization,
        catalog,
        unresolved,
    }
}

/// Records for one ingredient, matched case-insensitively against the full
/// name or any `/`-separated alias ("Retinol" finds "Vitamina A / Retinol").
pub fn find_ingredient<'a>(
    records: &'a [NormalizedRecord],
    name: &str,
) -> Vec<&'a NormalizedRecord> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| ingredient_matches(&record.ingredient, &wanted))
        .collect()
}

fn ingredient_matches(ingredient: &str, wanted: &str) -> bool {
    let ingredient = ingredient.to_lowercase();
    ingredient == wanted || ingredient.split('/').any(|alias| alias.trim() == wanted)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Output configuration.
#[derive(Clone, Copy)]
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    pub records: &'a [NormalizedRecord],
    pub catalog: &'a ReferenceCatalog,
    pub dry_run: bool,
}

/// Write the CSV files. Returns `None` on a dry run.
pub fn output(config: OutputConfig<'_>) -> Result<Option<OutputPaths>> {
    let output_span = info_span!("output", dir = %config.output_dir.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();

    if config.dry_run {
        info!(
            records = config.records.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    let paths = write_outputs(config.output_dir, config.records, config.catalog)
        .with_context(|| format!("write outputs to {}", config.output_dir.display()))?;
    info!(
        records = config.records.len(),
        references = config.catalog.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(paths))
}
