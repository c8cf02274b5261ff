// src/error.rs

use arrow::{datatypes::DataType, error::ArrowError};

/// Errors raised while editing or scaling an indicator table.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A polarity sequence did not line up with the indicator columns.
    /// Recoverable: the table is left untouched.
    #[error("length mismatch: {expected} indicator columns but {got} relations passed")]
    PolarityLength { expected: usize, got: usize },

    /// Tried to remove a name that is not in the targeted column list.
    #[error("`{value}` is not in the {list} columns")]
    NotFound { list: &'static str, value: String },

    /// A declared region/indicator column is absent from the source table.
    #[error("column `{0}` not found in source table")]
    MissingColumn(String),

    /// An indicator column does not hold numbers, so it cannot be scaled.
    #[error("indicator column `{column}` is {data_type}, not numeric")]
    NonNumericIndicator { column: String, data_type: DataType },

    /// Raw rows could not be turned into a table.
    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
