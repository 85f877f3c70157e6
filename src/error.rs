//! Application error types for the mutation path.
use crate::models::Column;
use thiserror::Error;

/// Errors raised synchronously by the mutation engine.
///
/// Every variant leaves the store unmodified; the query engine and the
/// window calculator are total functions and never raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row index {index} out of range for {len} rows")]
    OutOfRange { index: usize, len: usize },

    #[error("'{0}' is not an updatable column")]
    InvalidColumn(String),

    #[error("column '{column}' expects {expected}")]
    TypeMismatch {
        column: Column,
        expected: &'static str,
    },

    #[error("row id {id} is no longer present")]
    StaleRow { id: u32 },
}
