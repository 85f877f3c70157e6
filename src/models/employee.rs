//! Employee row record and the request/response types around it.

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the table.
///
/// `id` is unique across the store, assigned sequentially at generation, and
/// never reused. Field names serialize in the camelCase shape the
/// presentation layer exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub job_title: Option<String>,
    pub age: i64,
    pub nickname: Option<String>,
    pub is_employee: bool,
}

impl Employee {
    /// Read one updatable cell as an edit payload value.
    ///
    /// # Returns
    /// The current value of `column`, with missing optionals as
    /// [`CellValue::Absent`].
    pub fn cell(&self, column: Column) -> CellValue {
        match column {
            Column::Name => CellValue::Text(self.name.clone()),
            Column::JobTitle => optional_cell(self.job_title.as_deref()),
            Column::Age => CellValue::Number(self.age),
            Column::Nickname => optional_cell(self.nickname.as_deref()),
        }
    }
}

fn optional_cell(value: Option<&str>) -> CellValue {
    value.map_or(CellValue::Absent, |text| CellValue::Text(text.to_string()))
}

/// The closed set of updatable columns.
///
/// Validation and assignment dispatch on this enum directly; there is no
/// open-ended handler table. `id` and `isEmployee` are deliberately not
/// members: the first is immutable, the second is not edited through the
/// cell path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Name,
    JobTitle,
    Age,
    Nickname,
}

impl Column {
    /// Wire name of the column as exchanged with the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::JobTitle => "jobTitle",
            Column::Age => "age",
            Column::Nickname => "nickname",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = TableError;

    /// Parse a column name from the presentation layer.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidColumn`] for anything outside the
    /// updatable set.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(Column::Name),
            "jobTitle" | "job_title" => Ok(Column::JobTitle),
            "age" => Ok(Column::Age),
            "nickname" => Ok(Column::Nickname),
            other => Err(TableError::InvalidColumn(other.to_string())),
        }
    }
}

/// Columns the query engine accepts for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Name,
    Age,
    JobTitle,
}

/// Sort order; defaults to ascending when a request omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Value carried by a single-cell edit: text, number, or explicitly absent
/// (used to clear an optional column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(i64),
    Absent,
}

/// Parameters for one page request against a store snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub search_term: Option<String>,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: SortDirection,
    pub start: usize,
    pub limit: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search_term: None,
            sort_column: None,
            sort_direction: SortDirection::Asc,
            start: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of filtered and sorted rows, plus the pre-pagination total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub rows: Vec<Employee>,
    pub total: usize,
}

/// A single-cell mutation addressed by positional index into the canonical
/// sequence. Callers viewing a sorted or filtered page must re-resolve the
/// index, or go through the identity-addressed store path instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub row_index: usize,
    pub column: Column,
    pub value: CellValue,
}
