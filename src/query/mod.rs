//! Query engine: filter, sort, and paginate a store snapshot.
//!
//! Pure functions over a borrowed snapshot; the pipeline order is fixed as
//! filter, then sort, then count, then paginate. Every input is normalized,
//! so there are no error paths.

use crate::models::{Employee, QueryParams, QueryResult, SortColumn, SortDirection};
use std::cmp::Ordering;


/// Run one page request against a snapshot.
///
/// `total` is the filtered (and sorted) row count before pagination, so a
/// `start` past the end still reports how many rows matched.
///
/// # Returns
/// The requested page slice and the pre-pagination total.
pub fn query(snapshot: &[Employee], params: &QueryParams) -> QueryResult {
    let mut rows: Vec<Employee> = match normalized_term(params.search_term.as_deref()) {
        Some(term) => snapshot
            .iter()
            .filter(|row| row_matches(row, &term))
            .cloned()
            .collect(),
        None => snapshot.to_vec(),
    };

    if let Some(column) = params.sort_column {
        sort_rows(&mut rows, column, params.sort_direction);
    }

    let total = rows.len();
    let start = params.start.min(total);
    let end = start.saturating_add(params.limit).min(total);
    rows.truncate(end);
    let page = rows.split_off(start);

    QueryResult { rows: page, total }
}

/// An empty or absent search term means "no filter".
fn normalized_term(term: Option<&str>) -> Option<String> {
    term.filter(|t| !t.is_empty()).map(fold)
}

/// Locale-neutral case folding shared by the filter and the sort keys.
fn fold(value: &str) -> String {
    value.to_lowercase()
}

fn row_matches(row: &Employee, term: &str) -> bool {
    field_contains(&row.name, term)
        || row
            .job_title
            .as_deref()
            .is_some_and(|title| field_contains(title, term))
        || row
            .nickname
            .as_deref()
            .is_some_and(|nick| field_contains(nick, term))
}

fn field_contains(field: &str, folded_term: &str) -> bool {
    fold(field).contains(folded_term)
}

/// Stable sort; `Desc` swaps the comparator arguments rather than reversing
/// the sorted output, so equal keys keep their input order either way.
fn sort_rows(rows: &mut [Employee], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| match direction {
        SortDirection::Asc => compare_rows(a, b, column),
        SortDirection::Desc => compare_rows(b, a, column),
    });
}

/// A pair with a missing optional on either side compares equal. That keeps
/// rows without a job title in place instead of sinking them to one end.
fn compare_rows(a: &Employee, b: &Employee, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => fold(&a.name).cmp(&fold(&b.name)),
        SortColumn::Age => a.age.cmp(&b.age),
        SortColumn::JobTitle => match (a.job_title.as_deref(), b.job_title.as_deref()) {
            (Some(a_title), Some(b_title)) => fold(a_title).cmp(&fold(b_title)),
            _ => Ordering::Equal,
        },
    }
}
