// src/indicator/mod.rs
pub mod columns;
pub mod polarity;
pub mod scale;

pub use columns::{ColumnAction, ColumnSet};
pub use polarity::{Polarity, PolarityGroups, RelationMap, Relations};
pub use scale::ScaledTable;

use crate::error::IndexError;
use crate::table::{partition_columns, project};
use crate::Result;
use arrow::record_batch::RecordBatch;
use tracing::{debug, warn};

/// A table of regional indicators plus the bookkeeping needed to scale it.
///
/// Columns are split on construction into region (non-numeric) and indicator
/// (numeric) columns. Both lists can be edited afterwards without being checked
/// against the source; bad names only surface in [`IndicatorTable::compute_scaled`].
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    source: RecordBatch,
    region_columns: Vec<String>,
    indicator_columns: Vec<String>,
    positive_indicators: Vec<String>,
    negative_indicators: Vec<String>,
}

impl IndicatorTable {
    pub fn new(source: RecordBatch) -> Self {
        let (region_columns, indicator_columns) = partition_columns(&source.schema());
        debug!(
            regions = region_columns.len(),
            indicators = indicator_columns.len(),
            "classified columns"
        );
        Self {
            source,
            region_columns,
            indicator_columns,
            positive_indicators: Vec::new(),
            negative_indicators: Vec::new(),
        }
    }

    pub fn source(&self) -> &RecordBatch {
        &self.source
    }

    pub fn region_columns(&self) -> &[String] {
        &self.region_columns
    }

    pub fn indicator_columns(&self) -> &[String] {
        &self.indicator_columns
    }

    pub fn positive_indicators(&self) -> &[String] {
        &self.positive_indicators
    }

    pub fn negative_indicators(&self) -> &[String] {
        &self.negative_indicators
    }

    /// Source columns currently declared as regions.
    pub fn region_frame(&self) -> Result<RecordBatch> {
        project(&self.source, &self.region_columns)
    }

    /// Source columns currently declared as indicators.
    pub fn indicator_frame(&self) -> Result<RecordBatch> {
        project(&self.source, &self.indicator_columns)
    }

    /// Recorded polarity of `column`. Positive wins if it is in both lists.
    pub fn polarity_of(&self, column: &str) -> Option<Polarity> {
        if self.positive_indicators.iter().any(|c| c == column) {
            Some(Polarity::Positive)
        } else if self.negative_indicators.iter().any(|c| c == column) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Edit one of the column lists.
    pub fn edit_columns(
        &mut self,
        set: ColumnSet,
        action: ColumnAction,
        value: impl Into<String>,
    ) -> Result<()> {
        let cols = match set {
            ColumnSet::Region => &mut self.region_columns,
            ColumnSet::Indicator => &mut self.indicator_columns,
        };
        columns::apply(cols, set, action, value.into())
    }

    /// Overwrite a whole column list.
    pub(crate) fn set_columns(&mut self, set: ColumnSet, cols: &[String]) {
        match set {
            ColumnSet::Region => self.region_columns = cols.to_vec(),
            ColumnSet::Indicator => self.indicator_columns = cols.to_vec(),
        }
    }

    /// `"replace"`, `"append"` or `"remove"` `value` in the region columns.
    /// Unknown actions are ignored.
    pub fn edit_region_columns(&mut self, action: &str, value: impl Into<String>) -> Result<()> {
        self.edit_by_name(ColumnSet::Region, action, value.into())
    }

    /// Same as [`IndicatorTable::edit_region_columns`], on the indicator columns.
    pub fn edit_indicator_columns(
        &mut self,
        action: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        self.edit_by_name(ColumnSet::Indicator, action, value.into())
    }

    fn edit_by_name(&mut self, set: ColumnSet, action: &str, value: String) -> Result<()> {
        match ColumnAction::parse(action) {
            Some(action) => self.edit_columns(set, action, value),
            None => {
                debug!(action, list = set.as_str(), "unknown column action ignored");
                Ok(())
            }
        }
    }

    /// Record indicator polarity.
    ///
    /// - `Sequence`: one sign per indicator column; names are appended to the
    ///   positive/negative lists. A length mismatch is logged and returned as
    ///   `PolarityLength` without touching any state.
    /// - `Mapping(Grouped)`: replaces both lists outright.
    /// - `Mapping(ByColumn)`: with more than two entries, resolved against the
    ///   indicator columns and applied as a sequence. Smaller maps are ignored.
    pub fn set_polarity(&mut self, relations: &Relations) -> Result<()> {
        match relations {
            Relations::Sequence(signs) => self.append_polarity(signs),
            Relations::Mapping(RelationMap::Grouped(groups)) => {
                self.positive_indicators = groups.positive.clone();
                self.negative_indicators = groups.negative.clone();
                Ok(())
            }
            Relations::Mapping(RelationMap::ByColumn(map)) if map.len() <= 2 => {
                debug!(
                    entries = map.len(),
                    "by-column relations need more than two entries; ignored"
                );
                Ok(())
            }
            Relations::Mapping(RelationMap::ByColumn(map)) => {
                let signs = polarity::resolve_by_column(map, &self.indicator_columns);
                self.append_polarity(&signs)
            }
        }
    }

    fn append_polarity(&mut self, signs: &[i64]) -> Result<()> {
        if signs.len() != self.indicator_columns.len() {
            warn!(
                expected = self.indicator_columns.len(),
                got = signs.len(),
                "length mismatch; number of indicators doesn't match number of relations passed"
            );
            return Err(IndexError::PolarityLength {
                expected: self.indicator_columns.len(),
                got: signs.len(),
            });
        }

        for (col, &sign) in self.indicator_columns.iter().zip(signs) {
            match Polarity::from_sign(sign) {
                Some(Polarity::Positive) => self.positive_indicators.push(col.clone()),
                Some(Polarity::Negative) => self.negative_indicators.push(col.clone()),
                None => {}
            }
        }
        Ok(())
    }

    /// Copy of the source keyed by the region columns, with every polarised
    /// indicator min-max scaled into `[0, 1]` (inverted for negative ones).
    #[tracing::instrument(level = "info", skip(self), fields(rows = self.source.num_rows()))]
    pub fn compute_scaled(&self) -> Result<ScaledTable> {
        scale::scale_table(
            &self.source,
            &self.region_columns,
            &self.indicator_columns,
            |c| self.polarity_of(c),
        )
    }
}
