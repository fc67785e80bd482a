use anyhow::{Result, bail};
use tracing::{info, info_span};

use nutri_model::IngredientKind;
use nutri_normalization::{NormalizationReport, ParseOptions, SingleBoundPolicy};

use nutri_cli::pipeline::{
    OutputConfig, find_ingredient, load, normalize, output, resolve_data_path,
};

use crate::cli::{IngredientArgs, NormalizeArgs};
use crate::types::{IngredientRow, IngredientView, RunResult};

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunResult> {
    let run_span = info_span!("run", command = "normalize");
    let _run_guard = run_span.enter();

    // Stage 1: Load
    let loaded = load(&resolve_data_path(args.data.as_deref()))?;

    // Stage 2: Normalize
    let normalized = normalize(&loaded.dataset, parse_options(args.keep_open_bounds));
    let records = &normalized.normalization.records;
    let kind_reports = IngredientKind::ALL
        .into_iter()
        .map(|kind| {
            let report =
                NormalizationReport::from_record_iter(records.iter().filter(|r| r.kind == kind));
            (kind, report)
        })
        .collect();

    // Stage 3: Output
    let outputs = output(OutputConfig {
        output_dir: &args.output_dir,
        records,
        catalog: &normalized.catalog,
        dry_run: args.dry_run,
    })?;

    info!(
        records = normalized.normalization.report.total_records,
        unresolved_markers = normalized.unresolved.len(),
        "run complete"
    );
    Ok(RunResult {
        data_path: loaded.data_path,
        output_dir: args.output_dir.clone(),
        outputs,
        report: normalized.normalization.report,
        kind_reports,
        unresolved: normalized.unresolved,
    })
}

pub fn run_ingredient(args: &IngredientArgs) -> Result<IngredientView> {
    let run_span = info_span!("run", command = "ingredient", name = %args.name);
    let _run_guard = run_span.enter();

    let loaded = load(&resolve_data_path(args.data.as_deref()))?;
    let normalized = normalize(&loaded.dataset, ParseOptions::default());
    let matches = find_ingredient(&normalized.normalization.records, &args.name);
    if matches.is_empty() {
        bail!("no ingredient named {:?} in {}", args.name, loaded.data_path.display());
    }

    let rows = matches
        .into_iter()
        .map(|record| IngredientRow {
            references: normalized.catalog.describe_record(record),
            record: record.clone(),
        })
        .collect();
    Ok(IngredientView {
        query: args.name.clone(),
        rows,
    })
}

fn parse_options(keep_open_bounds: bool) -> ParseOptions {
    let policy = if keep_open_bounds {
        SingleBoundPolicy::KeepOpen
    } else {
        SingleBoundPolicy::FillBoth
    };
    ParseOptions::new().with_single_bound_fallback(policy)
}
