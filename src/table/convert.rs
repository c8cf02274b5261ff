use crate::error::IndexError;
use crate::table::utils::{clean_str, infer_column_dtype};
use crate::Result;
use arrow::{
    array::{ArrayRef, Float64Builder, StringBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::debug;

/// Build a table from header names and rows of raw string cells.
///
/// - Cells are cleaned (trimmed, outer quotes stripped) before typing.
/// - Each column is typed on its own: `Float64` if every non-empty cell is a
///   number, else `Utf8`.
/// - Empty cells become nulls in numeric columns; text columns keep them as-is.
/// - Rows shorter than the header are padded with nulls.
pub fn build_table(headers: &[String], rows: &[Vec<String>]) -> Result<RecordBatch> {
    if let Some(idx) = headers.iter().position(|h| h.trim().is_empty()) {
        return Err(IndexError::InvalidTable(format!(
            "header at index {} is empty",
            idx
        )));
    }
    if let Some(row) = rows.iter().position(|r| r.len() > headers.len()) {
        return Err(IndexError::InvalidTable(format!(
            "row {} has {} cells but only {} headers",
            row,
            rows[row].len(),
            headers.len()
        )));
    }

    let mut fields = Vec::with_capacity(headers.len());
    let mut out = Vec::with_capacity(headers.len());

    for (idx, name) in headers.iter().enumerate() {
        let cells: Vec<Option<String>> = rows
            .iter()
            .map(|r| r.get(idx).map(|c| clean_str(c)))
            .collect();
        let dtype = infer_column_dtype(cells.iter().flatten().map(String::as_str));
        debug!(column = %name, ?dtype, "inferred column type");

        let col: ArrayRef = match dtype {
            DataType::Float64 => {
                let mut b = Float64Builder::with_capacity(cells.len());
                for cell in &cells {
                    let v = cell
                        .as_deref()
                        .filter(|c| !c.is_empty())
                        .and_then(|c| c.parse().ok());
                    b.append_option(v);
                }
                Arc::new(b.finish())
            }
            _ => {
                let mut b = StringBuilder::new();
                for cell in &cells {
                    b.append_option(cell.as_deref());
                }
                Arc::new(b.finish())
            }
        };

        fields.push(Field::new(name.trim(), dtype, true));
        out.push(col);
    }

    let schema = Arc::new(Schema::new(fields));
    RecordBatch::try_new(schema, out).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Float64Array, StringArray};

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_table_infers_types() -> anyhow::Result<()> {
        let headers = strings(&["Region", "Score", "Note"]);
        let rows = vec![
            strings(&["\"North\"", " 10 ", "a"]),
            strings(&["South", "", "b"]),
            strings(&["East", "30.5"]),
        ];
        let batch = build_table(&headers, &rows)?;

        assert_eq!(batch.num_rows(), 3);
        let schema = batch.schema();
        assert_eq!(schema.field(0).data_type(), &DataType::Utf8);
        assert_eq!(schema.field(1).data_type(), &DataType::Float64);
        assert_eq!(schema.field(2).data_type(), &DataType::Utf8);

        let region = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(region.value(0), "North");

        let score = batch
            .column(1)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(score.value(0), 10.0);
        assert!(score.is_null(1));
        assert_eq!(score.value(2), 30.5);

        // short row padded with a null
        assert!(batch.column(2).is_null(2));
        Ok(())
    }

    #[test]
    fn test_build_table_rejects_bad_shapes() {
        let err = build_table(&strings(&["a", " "]), &[]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidTable(_)));

        let err = build_table(&strings(&["a"]), &[strings(&["1", "2"])]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidTable(_)));
    }
}
