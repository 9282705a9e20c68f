//! Error types for the statistics engine.

use std::fmt;

use thiserror::Error;

/// Where a column name was declared in the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Numeric,
    Categorical,
    GroupKey,
    /// Column passed to a row ranking.
    RankBy,
    /// Label column of a row ranking.
    RankLabel,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric column",
            Self::Categorical => "categorical column",
            Self::GroupKey => "group key",
            Self::RankBy => "ranking column",
            Self::RankLabel => "label column",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A declared column does not exist in the dataset header.
    #[error("{declared_as} '{column}' not found in dataset header")]
    SchemaMismatch {
        column: String,
        declared_as: Declaration,
    },

    /// A column is declared both numeric and categorical.
    #[error("column '{column}' is declared both numeric and categorical")]
    RoleConflict { column: String },

    /// A group-by entry lists no columns.
    #[error("group-by entry {index} has no key columns")]
    EmptyGroupSpec { index: usize },

    /// A declared numeric column holds a value that is not a number.
    #[error("numeric column '{column}' has non-numeric value '{value}' at row {row}")]
    TypeCoercion {
        column: String,
        row: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
