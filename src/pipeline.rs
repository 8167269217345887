// src/pipeline.rs

use arrow::record_batch::RecordBatch;
use tracing::info;

use crate::{
    config::PipelineConfig,
    error::Result,
    reference::{CAND_PARTY, CMTE_NM},
    table,
};

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    /// Rows whose `cand_party` is null.
    pub unmapped_party: usize,
    /// Rows whose `cmte_nm` is null.
    pub unmapped_committee: usize,
}

fn null_count(table: &RecordBatch, column: &str) -> usize {
    table
        .column_by_name(column)
        .map(|c| c.null_count())
        .unwrap_or(0)
}

/// Enrich the fixed input file into the fixed output file.
pub fn run() -> Result<RunSummary> {
    run_with(&PipelineConfig::default())
}

/// load → drop artifact column → add `cand_party` → add `cmte_nm` → save
#[tracing::instrument(
    level = "info",
    skip(config),
    fields(input = %config.input_path.display(), output = %config.output_path.display())
)]
pub fn run_with(config: &PipelineConfig) -> Result<RunSummary> {
    let loaded = table::load(&config.input_path)?;
    let trimmed = table::drop_column(&loaded, &config.dropped_column)?;
    let with_party = table::map_column(&trimmed, "cand_id", &*CAND_PARTY, "cand_party")?;
    let enriched = table::map_column(&with_party, "cmte_id", &*CMTE_NM, "cmte_nm")?;

    table::save(&enriched, &config.output_path)?;

    let summary = RunSummary {
        rows: enriched.num_rows(),
        columns: enriched.num_columns(),
        unmapped_party: null_count(&enriched, "cand_party"),
        unmapped_committee: null_count(&enriched, "cmte_nm"),
    };
    info!(
        rows = summary.rows,
        columns = summary.columns,
        unmapped_party = summary.unmapped_party,
        unmapped_committee = summary.unmapped_committee,
        "enrichment complete"
    );
    Ok(summary)
}
