// src/config.rs

use std::path::PathBuf;

/// Source dataset, relative to the working directory.
pub const INPUT_PATH: &str = "virginia_contributions.csv";
/// Enriched dataset, relative to the working directory.
pub const OUTPUT_PATH: &str = "virginia_contributions_mod.csv";
/// Trailing unlabeled column of the source export.
pub const DROPPED_COLUMN: &str = "Unnamed: 18";

/// Fixed settings for one enrichment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub dropped_column: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            dropped_column: DROPPED_COLUMN.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Same column handling, different files.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_paths() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.input_path, PathBuf::from("virginia_contributions.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("virginia_contributions_mod.csv"));
        assert_eq!(cfg.dropped_column, "Unnamed: 18");
    }

    #[test]
    fn with_paths_keeps_dropped_column() {
        let cfg = PipelineConfig::with_paths("a.csv", "b.csv");
        assert_eq!(cfg.input_path, PathBuf::from("a.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("b.csv"));
        assert_eq!(cfg.dropped_column, DROPPED_COLUMN);
    }
}
