use serde::Serialize;

use crate::metadata::ColumnRole;

/// 25th, 50th and 75th percentiles (linear interpolation between closest ranks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub missing: usize,
    /// Arithmetic mean; 0 when `count` is 0.
    pub mean: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Population standard deviation; 0 when `count` is 0.
    pub std: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quartiles: Option<Quartiles>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub missing: usize,
    pub unique: usize,
    /// Most frequent value; ties go to the value seen first.
    pub top: Option<String>,
    pub freq: usize,
    /// Most frequent values, highest frequency first, same tie-break as `top`.
    pub value_counts: Vec<ValueCount>,
}

/// The statistics of one column within one partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    pub fn role(&self) -> ColumnRole {
        match self {
            Self::Numeric(_) => ColumnRole::Numeric,
            Self::Categorical(_) => ColumnRole::Categorical,
        }
    }

    /// Number of non-missing values.
    pub fn count(&self) -> usize {
        match self {
            Self::Numeric(summary) => summary.count,
            Self::Categorical(summary) => summary.count,
        }
    }

    pub fn missing(&self) -> usize {
        match self {
            Self::Numeric(summary) => summary.missing,
            Self::Categorical(summary) => summary.missing,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match self {
            Self::Numeric(summary) => Some(summary),
            Self::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalSummary> {
        match self {
            Self::Categorical(summary) => Some(summary),
            Self::Numeric(_) => None,
        }
    }
}
