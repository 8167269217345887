// src/table/columns.rs

use arrow::{
    array::{Array, ArrayRef, StringArray},
    datatypes::{DataType, Field, FieldRef, Schema},
    error::ArrowError,
    record_batch::{RecordBatch, RecordBatchOptions},
};
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

use crate::error::{EnrichError, Result};

fn missing_column(schema: &Schema, name: &str) -> EnrichError {
    EnrichError::Schema {
        column: name.to_string(),
        available: schema.fields().iter().map(|f| f.name().clone()).collect(),
    }
}

/// Rebuild a batch, keeping the row count even when no columns remain.
fn rebuild(fields: Vec<FieldRef>, columns: Vec<ArrayRef>, num_rows: usize) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(fields));
    let options = RecordBatchOptions::new().with_row_count(Some(num_rows));
    RecordBatch::try_new_with_options(schema, columns, &options).map_err(Into::into)
}

/// Remove column `name` from the schema and from every row.
pub fn drop_column(table: &RecordBatch, name: &str) -> Result<RecordBatch> {
    let schema = table.schema();
    let (idx, _) = schema
        .column_with_name(name)
        .ok_or_else(|| missing_column(&schema, name))?;

    let mut fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
    let mut columns: Vec<ArrayRef> = table.columns().to_vec();
    fields.remove(idx);
    columns.remove(idx);

    debug!(column = name, index = idx, "dropped column");
    rebuild(fields, columns, table.num_rows())
}

/// Derive `target` from `source` by key lookup in `mapping`.
///
/// Keys missing from `mapping` (and null keys) produce null. An existing
/// `target` column is replaced in place, otherwise the new column is appended.
pub fn map_column<V: AsRef<str>>(
    table: &RecordBatch,
    source: &str,
    mapping: &HashMap<&'static str, V>,
    target: &str,
) -> Result<RecordBatch> {
    let schema = table.schema();
    let (src_idx, _) = schema
        .column_with_name(source)
        .ok_or_else(|| missing_column(&schema, source))?;

    let keys = table
        .column(src_idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            ArrowError::SchemaError(format!(
                "column {:?} is {}, expected Utf8",
                source,
                table.column(src_idx).data_type()
            ))
        })?;

    let mapped: StringArray = keys
        .iter()
        .map(|opt| opt.and_then(|k| mapping.get(k).map(|v| v.as_ref())))
        .collect();
    debug!(
        source,
        target,
        unmapped = mapped.null_count(),
        "mapped column"
    );

    let field: FieldRef = Arc::new(Field::new(target, DataType::Utf8, true));
    let array: ArrayRef = Arc::new(mapped);

    let mut fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
    let mut columns: Vec<ArrayRef> = table.columns().to_vec();
    match schema.column_with_name(target) {
        Some((idx, _)) => {
            fields[idx] = field;
            columns[idx] = array;
        }
        None => {
            fields.push(field);
            columns.push(array);
        }
    }

    rebuild(fields, columns, table.num_rows())
}
