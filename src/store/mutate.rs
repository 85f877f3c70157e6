//! Validated single-cell rewrites, copy-on-write at row and sequence level.

use crate::error::TableError;
use crate::models::{CellValue, Column, Employee, UpdateRequest};

/// Apply one cell edit to a snapshot without touching the original.
///
/// Validation (index bounds, per-column value type) runs before any write,
/// so an error means the returned snapshot was never built and the input is
/// untouched.
///
/// # Returns
/// A new sequence identical to `snapshot` except for the addressed cell.
///
/// # Errors
/// - [`TableError::OutOfRange`] when `row_index` does not address a row.
/// - [`TableError::TypeMismatch`] when the value type does not fit the
///   column.
pub(crate) fn apply_update(
    snapshot: &[Employee],
    req: &UpdateRequest,
) -> Result<Vec<Employee>, TableError> {
    let row = snapshot
        .get(req.row_index)
        .ok_or(TableError::OutOfRange {
            index: req.row_index,
            len: snapshot.len(),
        })?;

    let updated = rewrite_field(row, req.column, &req.value)?;

    let mut rows = snapshot.to_vec();
    rows[req.row_index] = updated;
    Ok(rows)
}

/// Per-column validation and assignment, dispatched on the closed column
/// enum. `name` takes any string (emptiness is not checked; the contract is
/// a type check only), `age` takes any number without re-checking the
/// generation-time range.
fn rewrite_field(
    row: &Employee,
    column: Column,
    value: &CellValue,
) -> Result<Employee, TableError> {
    let mut row = row.clone();
    match column {
        Column::Name => match value {
            CellValue::Text(text) => row.name = text.clone(),
            _ => return Err(type_mismatch(column, "a string")),
        },
        Column::JobTitle => row.job_title = optional_text(column, value)?,
        Column::Nickname => row.nickname = optional_text(column, value)?,
        Column::Age => match value {
            CellValue::Number(age) => row.age = *age,
            _ => return Err(type_mismatch(column, "a number")),
        },
    }
    Ok(row)
}

fn optional_text(column: Column, value: &CellValue) -> Result<Option<String>, TableError> {
    match value {
        CellValue::Text(text) => Ok(Some(text.clone())),
        CellValue::Absent => Ok(None),
        CellValue::Number(_) => Err(type_mismatch(column, "a string or absent")),
    }
}

fn type_mismatch(column: Column, expected: &'static str) -> TableError {
    TableError::TypeMismatch { column, expected }
}
