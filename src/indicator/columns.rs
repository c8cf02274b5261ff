use crate::error::IndexError;
use crate::Result;

/// How a column list should be changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnAction {
    Replace,
    Append,
    Remove,
}

impl ColumnAction {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnAction::Replace => "replace",
            ColumnAction::Append => "append",
            ColumnAction::Remove => "remove",
        }
    }

    /// Exact, lowercase action names only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "replace" => Some(ColumnAction::Replace),
            "append" => Some(ColumnAction::Append),
            "remove" => Some(ColumnAction::Remove),
            _ => None,
        }
    }
}

/// Which of the two column lists an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnSet {
    Region,
    Indicator,
}

impl ColumnSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnSet::Region => "region",
            ColumnSet::Indicator => "indicator",
        }
    }
}

/// Apply one edit to `cols`.
/// `Remove` drops the first occurrence and fails if `value` is absent.
pub(crate) fn apply(
    cols: &mut Vec<String>,
    set: ColumnSet,
    action: ColumnAction,
    value: String,
) -> Result<()> {
    match action {
        ColumnAction::Replace => *cols = vec![value],
        ColumnAction::Append => cols.push(value),
        ColumnAction::Remove => {
            let pos = cols
                .iter()
                .position(|c| *c == value)
                .ok_or(IndexError::NotFound {
                    list: set.as_str(),
                    value,
                })?;
            cols.remove(pos);
        }
    }
    Ok(())
}
