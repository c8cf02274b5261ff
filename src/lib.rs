//! Scale regional performance indicators onto a vulnerability index.
//!
//! Wrap a table with [`IndicatorTable`], tag each indicator as positively or
//! negatively related to vulnerability, then call
//! [`IndicatorTable::compute_scaled`] to get the min-max scaled copy keyed by
//! its region columns.

pub mod config;
pub mod error;
pub mod indicator;
pub mod table;

pub use config::IndicatorConfig;
pub use error::IndexError;
pub use indicator::{
    ColumnAction, ColumnSet, IndicatorTable, Polarity, PolarityGroups, RelationMap, Relations,
    ScaledTable,
};
pub use table::build_table;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, IndexError>;
