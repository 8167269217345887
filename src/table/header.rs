// src/table/header.rs

use arrow::error::ArrowError;
use csv::ReaderBuilder;
use std::{collections::HashSet, fs::File, path::Path};
use tracing::debug;

use crate::error::{EnrichError, Result};

/// Read the first record of `path` and return its normalised column names.
pub fn read_headers(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| EnrichError::io(path, e))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let record = match rdr.records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => {
            return Err(EnrichError::Parse {
                path: path.to_path_buf(),
                source: ArrowError::CsvError(e.to_string()),
            })
        }
        None => {
            return Err(EnrichError::MissingHeader {
                path: path.to_path_buf(),
            })
        }
    };

    let raw: Vec<String> = record.iter().map(str::to_string).collect();
    Ok(normalize_headers(raw))
}

/// Give every column a unique, non-empty name.
///
/// - empty cell at position `i` → `Unnamed: i`
/// - repeated name → `name.1`, `name.2`, ... (first free suffix)
pub fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for (i, name) in raw.into_iter().enumerate() {
        let name = if i == 0 {
            name.trim_start_matches('\u{feff}').to_string()
        } else {
            name
        };
        let base = if name.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            name
        };

        let mut candidate = base.clone();
        let mut k = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", base, k);
            k += 1;
        }
        if candidate != base {
            debug!(original = %base, renamed = %candidate, "duplicate header renamed");
        }

        seen.insert(candidate.clone());
        out.push(candidate);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_cells_get_positional_names() {
        let got = normalize_headers(names(&["cmte_id", "", "cand_id", ""]));
        assert_eq!(got, names(&["cmte_id", "Unnamed: 1", "cand_id", "Unnamed: 3"]));
    }

    #[test]
    fn duplicates_get_numeric_suffix() {
        let got = normalize_headers(names(&["a", "a", "a.1", "a"]));
        assert_eq!(got, names(&["a", "a.1", "a.1.1", "a.2"]));
    }

    #[test]
    fn leading_bom_is_stripped() {
        let got = normalize_headers(names(&["\u{feff}cmte_id", "cand_id"]));
        assert_eq!(got, names(&["cmte_id", "cand_id"]));
    }

    #[test]
    fn trailing_comma_yields_unnamed_column() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "cmte_id,cand_id,contb_receipt_amt,")?;
        writeln!(tmp, "C00575795,P00003392,25,")?;

        let headers = read_headers(tmp.path())?;
        assert_eq!(
            headers,
            names(&["cmte_id", "cand_id", "contb_receipt_amt", "Unnamed: 3"])
        );
        Ok(())
    }

    #[test]
    fn empty_file_has_no_header() -> Result<()> {
        let tmp = NamedTempFile::new()?;
        let err = read_headers(tmp.path()).unwrap_err();
        assert!(matches!(err, EnrichError::MissingHeader { .. }));
        Ok(())
    }
}
