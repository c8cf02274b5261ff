// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

use crate::indicator::{ColumnSet, IndicatorTable, Relations};

/// Column overrides and polarity for an [`IndicatorTable`], usually kept as JSON
/// next to the data:
///
/// ```json
/// {
///   "region_columns": ["District"],
///   "relations": {"1": ["literacy_gap"], "-1": ["hospital_beds"]}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Replaces the inferred region columns when present.
    pub region_columns: Option<Vec<String>>,
    /// Replaces the inferred indicator columns when present.
    pub indicator_columns: Option<Vec<String>>,
    pub relations: Option<Relations>,
}

impl IndicatorConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing indicator config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
        let cfg = Self::from_json_str(&text).with_context(|| format!("parsing {:?}", path))?;
        info!(path = %path.display(), "loaded indicator config");
        Ok(cfg)
    }
}

impl IndicatorTable {
    /// Apply column overrides first, then relations, so sequence relations line
    /// up with the overridden indicator columns.
    pub fn apply_config(&mut self, config: &IndicatorConfig) -> crate::Result<()> {
        if let Some(cols) = &config.region_columns {
            self.set_columns(ColumnSet::Region, cols);
        }
        if let Some(cols) = &config.indicator_columns {
            self.set_columns(ColumnSet::Indicator, cols);
        }
        if let Some(relations) = &config.relations {
            self.set_polarity(relations)?;
        }
        Ok(())
    }
}
