use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("row {row} has {actual} values but the header has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column '{column}' in header")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
