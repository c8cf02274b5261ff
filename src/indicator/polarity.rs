use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction in which an indicator drives vulnerability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Higher raw values mean higher vulnerability.
    Positive,
    /// Higher raw values mean lower vulnerability.
    Negative,
}

impl Polarity {
    /// `1` → Positive, `-1` → Negative, anything else carries no polarity.
    pub fn from_sign(sign: i64) -> Option<Self> {
        match sign {
            1 => Some(Polarity::Positive),
            -1 => Some(Polarity::Negative),
            _ => None,
        }
    }

    pub fn sign(&self) -> i64 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

/// Polarity assignment for a set of indicators.
///
/// In JSON an array is a `Sequence`, an object with exactly the keys `"1"` and
/// `"-1"` is a grouped `Mapping`, and any other object maps column names to signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relations {
    /// One sign per indicator column, aligned by position.
    Sequence(Vec<i64>),
    Mapping(RelationMap),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationMap {
    /// Complete positive/negative lists; replaces whatever was recorded before.
    Grouped(PolarityGroups),
    /// Column name → sign. Columns left out get no polarity.
    ByColumn(BTreeMap<String, i64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolarityGroups {
    #[serde(rename = "1")]
    pub positive: Vec<String>,
    #[serde(rename = "-1")]
    pub negative: Vec<String>,
}

impl Relations {
    pub fn sequence<I: IntoIterator<Item = i64>>(signs: I) -> Self {
        Relations::Sequence(signs.into_iter().collect())
    }

    pub fn grouped<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Relations::Mapping(RelationMap::Grouped(PolarityGroups {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }))
    }

    pub fn by_column<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Relations::Mapping(RelationMap::ByColumn(
            pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

/// Resolve a name → sign map against `columns`, in column order.
/// Missing names resolve to `0`.
pub(crate) fn resolve_by_column(map: &BTreeMap<String, i64>, columns: &[String]) -> Vec<i64> {
    columns
        .iter()
        .map(|c| map.get(c).copied().unwrap_or(0))
        .collect()
}
