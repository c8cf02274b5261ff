use crate::error::IndexError;
use crate::table::{column_index, project};
use crate::Result;
use arrow::{
    array::{ArrayRef, AsArray, Float64Array},
    compute::cast,
    datatypes::{DataType, Field, FieldRef, Float64Type, Schema},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use std::sync::Arc;
use tracing::debug;

use super::polarity::Polarity;

/// Scaled indicators keyed by region.
///
/// `index` holds the region columns, `values` every other source column in
/// source order. Both have the same rows in the same order.
#[derive(Debug, Clone)]
pub struct ScaledTable {
    index: RecordBatch,
    values: RecordBatch,
}

impl ScaledTable {
    pub fn index(&self) -> &RecordBatch {
        &self.index
    }

    pub fn values(&self) -> &RecordBatch {
        &self.values
    }

    pub fn num_rows(&self) -> usize {
        self.values.num_rows()
    }

    /// Value column by name.
    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.values.column_by_name(name)
    }

    /// Index columns followed by value columns, as one table.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = self
            .index
            .schema()
            .fields()
            .iter()
            .chain(self.values.schema().fields().iter())
            .cloned()
            .collect();
        let columns: Vec<ArrayRef> = self
            .index
            .columns()
            .iter()
            .chain(self.values.columns())
            .cloned()
            .collect();
        let opts = RecordBatchOptions::new().with_row_count(Some(self.num_rows()));
        RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), columns, &opts)
            .map_err(Into::into)
    }
}

/// Min and max over non-null, non-NaN values.
/// An empty column yields `(inf, -inf)`.
pub fn min_max(arr: &Float64Array) -> (f64, f64) {
    arr.iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        })
}

/// Fail unless `col` holds numbers.
pub fn ensure_numeric(name: &str, col: &ArrayRef) -> Result<()> {
    if col.data_type().is_numeric() {
        Ok(())
    } else {
        Err(IndexError::NonNumericIndicator {
            column: name.to_string(),
            data_type: col.data_type().clone(),
        })
    }
}

/// Min-max rescale one numeric column.
///
/// Positive: `(x - lo) / span`. Negative: `(hi - x) / span`.
/// A zero span is not special-cased; every value becomes NaN.
pub fn min_max_scale(name: &str, col: &ArrayRef, polarity: Polarity) -> Result<ArrayRef> {
    ensure_numeric(name, col)?;
    let floats = cast(col, &DataType::Float64)?;
    let floats = floats.as_primitive::<Float64Type>();
    let (lo, hi) = min_max(floats);
    let span = hi - lo;

    let scaled: Float64Array = match polarity {
        Polarity::Positive => floats.unary(|x| (x - lo) / span),
        Polarity::Negative => floats.unary(|x| (hi - x) / span),
    };
    Ok(Arc::new(scaled))
}

/// Build the scaled copy of `source`.
///
/// Every indicator column must be numeric, polarised or not. `polarity_of`
/// decides how each is scaled; columns with no polarity are passed through
/// untouched.
pub(crate) fn scale_table<F>(
    source: &RecordBatch,
    region_columns: &[String],
    indicator_columns: &[String],
    polarity_of: F,
) -> Result<ScaledTable>
where
    F: Fn(&str) -> Option<Polarity>,
{
    let index = project(source, region_columns)?;

    let schema = source.schema();
    let mut fields: Vec<FieldRef> = Vec::with_capacity(schema.fields().len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
    for (field, col) in schema.fields().iter().zip(source.columns()) {
        if region_columns.contains(field.name()) {
            continue;
        }
        fields.push(field.clone());
        columns.push(col.clone());
    }
    let opts = RecordBatchOptions::new().with_row_count(Some(source.num_rows()));
    let mut values =
        RecordBatch::try_new_with_options(Arc::new(Schema::new(fields.clone())), columns, &opts)?;

    for name in indicator_columns {
        let idx = column_index(&values, name)?;
        ensure_numeric(name, values.column(idx))?;
        let Some(polarity) = polarity_of(name) else {
            debug!(column = %name, "no polarity, left unscaled");
            continue;
        };

        let scaled = min_max_scale(name, values.column(idx), polarity)?;
        debug!(column = %name, ?polarity, "scaled indicator");

        let mut columns = values.columns().to_vec();
        columns[idx] = scaled;
        fields[idx] = Arc::new(Field::new(name, DataType::Float64, true));
        values = RecordBatch::try_new_with_options(
            Arc::new(Schema::new(fields.clone())),
            columns,
            &opts,
        )?;
    }

    Ok(ScaledTable { index, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Int64Array, StringArray};

    #[test]
    fn test_min_max_skips_null_and_nan() {
        let arr = Float64Array::from(vec![Some(3.0), None, Some(f64::NAN), Some(-1.0)]);
        assert_eq!(min_max(&arr), (-1.0, 3.0));
    }

    #[test]
    fn test_min_max_scale_casts_integers() -> anyhow::Result<()> {
        let col: ArrayRef = Arc::new(Int64Array::from(vec![Some(-10), None, Some(0), Some(10)]));

        let pos = min_max_scale("pop", &col, Polarity::Positive)?;
        let pos = pos.as_primitive::<Float64Type>();
        assert!((pos.value(0) - 0.0).abs() < 1e-10);
        assert!(pos.is_null(1));
        assert!((pos.value(2) - 0.5).abs() < 1e-10);
        assert!((pos.value(3) - 1.0).abs() < 1e-10);

        let neg = min_max_scale("pop", &col, Polarity::Negative)?;
        let neg = neg.as_primitive::<Float64Type>();
        assert!((neg.value(0) - 1.0).abs() < 1e-10);
        assert!((neg.value(3) - 0.0).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_min_max_scale_constant_column_is_nan() -> anyhow::Result<()> {
        let col: ArrayRef = Arc::new(Float64Array::from(vec![5.0, 5.0, 5.0]));
        for polarity in [Polarity::Positive, Polarity::Negative] {
            let out = min_max_scale("flat", &col, polarity)?;
            let out = out.as_primitive::<Float64Type>();
            assert!(out.iter().all(|v| v.is_some_and(f64::is_nan)));
        }
        Ok(())
    }

    #[test]
    fn test_min_max_scale_rejects_text() {
        let col: ArrayRef = Arc::new(StringArray::from(vec!["s1", "s2"]));
        let err = min_max_scale("State", &col, Polarity::Positive).unwrap_err();
        assert!(matches!(
            err,
            IndexError::NonNumericIndicator { ref column, .. } if column == "State"
        ));
    }
}
