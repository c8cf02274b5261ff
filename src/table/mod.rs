// src/table/mod.rs
pub mod convert;
pub mod utils;

pub use convert::build_table;

use crate::error::IndexError;
use crate::Result;
use arrow::{datatypes::Schema, record_batch::RecordBatch};

/// Split a schema's column names into (non-numeric, numeric), each in schema order.
pub fn partition_columns(schema: &Schema) -> (Vec<String>, Vec<String>) {
    let mut region = Vec::new();
    let mut numeric = Vec::new();
    for field in schema.fields() {
        if field.data_type().is_numeric() {
            numeric.push(field.name().clone());
        } else {
            region.push(field.name().clone());
        }
    }
    (region, numeric)
}

/// Look up a column's position, reporting absence as `MissingColumn`.
pub fn column_index(batch: &RecordBatch, name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(name)
        .map_err(|_| IndexError::MissingColumn(name.to_string()))
}

/// Sub-table holding only `names`, in the given order.
pub fn project(batch: &RecordBatch, names: &[String]) -> Result<RecordBatch> {
    let indices = names
        .iter()
        .map(|n| column_index(batch, n))
        .collect::<Result<Vec<_>>>()?;
    batch.project(&indices).map_err(Into::into)
}
