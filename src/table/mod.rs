// src/table/mod.rs
use arrow::{
    compute::concat_batches,
    csv::{ReaderBuilder, WriterBuilder},
    datatypes::{DataType, Field, Schema},
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{info, warn};

use crate::error::{EnrichError, Result};

pub mod columns;
pub mod header;

pub use columns::{drop_column, map_column};

/// Rows per Arrow batch while reading; batches are concatenated afterwards.
const READ_BATCH_ROWS: usize = 8192;

/// Load a headed CSV file into a single batch of nullable Utf8 columns.
///
/// Values are kept verbatim; empty fields become null.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<RecordBatch> {
    let path = path.as_ref();
    let headers = header::read_headers(path)?;

    let fields: Vec<Field> = headers
        .iter()
        .map(|n| Field::new(n, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let parse_err = |source: ArrowError| EnrichError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| EnrichError::io(path, e))?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(READ_BATCH_ROWS)
        .with_delimiter(b',')
        .with_quote(b'"')
        .build(file)
        .map_err(parse_err)?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(parse_err)?;
    let table = concat_batches(&schema, &batches).map_err(parse_err)?;

    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "loaded table"
    );
    Ok(table)
}

/// `dir/file.csv` → `dir/.file.csv.tmp`
fn tmp_path_for(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        EnrichError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;
    let tmp_name = format!(".{}.tmp", name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn write_csv(table: &RecordBatch, tmp_path: &Path) -> Result<()> {
    let file = File::create(tmp_path).map_err(|e| EnrichError::io(tmp_path, e))?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));

    writer
        .write(table)
        .map_err(|e| EnrichError::io(tmp_path, io::Error::new(io::ErrorKind::Other, e)))?;

    let mut buf = writer.into_inner();
    buf.flush().map_err(|e| EnrichError::io(tmp_path, e))?;
    Ok(())
}

/// Best-effort removal of a leftover temp file; one that was never created is fine.
fn discard_tmp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(tmp = %tmp_path.display(), error = %e, "failed to remove temp file"),
    }
}

/// Write `table` as CSV with a header row, replacing `path` atomically.
#[tracing::instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display()))]
pub fn save<P: AsRef<Path>>(table: &RecordBatch, path: P) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = tmp_path_for(path)?;

    if let Err(e) = write_csv(table, &tmp_path) {
        discard_tmp(&tmp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        discard_tmp(&tmp_path);
        return Err(EnrichError::io(path, e));
    }

    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "saved table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use anyhow::Result;
    use arrow::array::{Array, StringArray};
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,contribmap::table=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn load_keeps_values_verbatim() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        fs::write(
            &input,
            "cmte_id,contbr_zip,contb_receipt_amt,memo\n\
             C00575795,022011234,25.00,\"GEN, PRIMARY\"\n\
             C00577130,00501,-10,\n",
        )?;

        let table = load(&input)?;
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 4);

        let zip = table
            .column_by_name("contbr_zip")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(zip.value(0), "022011234");
        assert_eq!(zip.value(1), "00501");

        let memo = table
            .column_by_name("memo")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(memo.value(0), "GEN, PRIMARY");
        assert!(memo.is_null(1));
        Ok(())
    }

    #[test]
    fn load_header_only_gives_empty_table() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        fs::write(&input, "cmte_id,cand_id\n")?;

        let table = load(&input)?;
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_columns(), 2);
        Ok(())
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load("definitely/not/here.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn load_ragged_row_is_parse_error() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        fs::write(&input, "a,b,c\n1,2,3\n4,5\n")?;

        let err = load(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        Ok(())
    }

    #[test]
    fn save_quotes_only_when_needed_and_leaves_no_temp() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        let body = "cmte_nm,amt\n\"JEB 2016, INC.\",5\nCARSON AMERICA,\n";
        fs::write(&input, body)?;
        fs::write(&output, "old contents\n")?;

        let table = load(&input)?;
        save(&table, &output)?;

        assert_eq!(fs::read_to_string(&output)?, body);
        assert!(!dir.path().join(".out.csv.tmp").exists());
        Ok(())
    }

    #[test]
    fn save_into_missing_dir_is_io_error() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        fs::write(&input, "a\n1\n")?;
        let table = load(&input)?;

        let err = save(&table, dir.path().join("nope").join("out.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!dir.path().join("nope").exists());
        Ok(())
    }

    #[test]
    fn failed_rename_removes_temp_file() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        fs::write(&input, "a\n1\n")?;
        let table = load(&input)?;

        // a non-empty directory in place of the output makes the rename fail
        let output = dir.path().join("out.csv");
        fs::create_dir(&output)?;
        fs::write(output.join("keep"), "x")?;

        let err = save(&table, &output).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!dir.path().join(".out.csv.tmp").exists());
        assert!(output.join("keep").exists());
        Ok(())
    }

    #[test]
    fn discard_tmp_ignores_missing_file() -> Result<()> {
        let dir = tempdir()?;
        let tmp = dir.path().join(".never.csv.tmp");
        discard_tmp(&tmp);
        assert!(!tmp.exists());

        fs::write(&tmp, "partial")?;
        discard_tmp(&tmp);
        assert!(!tmp.exists());
        Ok(())
    }
}
