//! Canonical row store: snapshot ownership and the mutation commit path.

mod mutate;


use crate::error::TableError;
use crate::models::{CellValue, Column, Employee, QueryParams, QueryResult, UpdateRequest};
use crate::seed;
use arc_swap::ArcSwap;
use rand::Rng;
use std::sync::Arc;

/// Owner of the canonical ordered row sequence.
///
/// The live snapshot sits behind an atomic pointer; each successful mutation
/// publishes a whole new sequence, so a reader holding a prior [`Arc`] keeps
/// a consistent view and never observes a partial write. Rows are neither
/// inserted nor deleted after construction.
///
/// Writes are load-apply-publish without a compare-and-swap; the host is
/// expected to serialize mutations (single-threaded in practice).
pub struct EmployeeStore {
    rows: ArcSwap<Vec<Employee>>,
}

impl EmployeeStore {
    /// Build a store over an existing row sequence.
    pub fn from_rows(rows: Vec<Employee>) -> Self {
        Self {
            rows: ArcSwap::from_pointee(rows),
        }
    }

    /// Generate `count` rows with thread-local randomness.
    ///
    /// # Returns
    /// A store seeded per the generation policy, ids sequential from 1.
    pub fn generate(count: usize) -> Self {
        let store = Self::from_rows(seed::generate(count));
        tracing::debug!(count, "generated employee store");
        store
    }

    /// Generate `count` rows from the supplied randomness source, for
    /// deterministic construction in tests and seeded configs.
    pub fn generate_with_rng<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self::from_rows(seed::generate_with_rng(count, rng))
    }

    /// The live ordered snapshot.
    pub fn snapshot(&self) -> Arc<Vec<Employee>> {
        self.rows.load_full()
    }

    /// Row count; constant for the lifetime of the store.
    pub fn len(&self) -> usize {
        self.rows.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.load().is_empty()
    }

    /// Run a page request against the live snapshot.
    pub fn query(&self, params: &QueryParams) -> QueryResult {
        let rows = self.rows.load();
        crate::query::query(rows.as_slice(), params)
    }

    /// Apply one index-addressed cell edit and publish the new snapshot.
    ///
    /// # Returns
    /// The newly published sequence.
    ///
    /// # Errors
    /// Propagates validation errors from the mutation engine; on error the
    /// canonical snapshot is left untouched.
    pub fn update(&self, req: &UpdateRequest) -> Result<Arc<Vec<Employee>>, TableError> {
        let current = self.rows.load_full();
        let next = Arc::new(mutate::apply_update(&current, req)?);
        self.rows.store(Arc::clone(&next));
        tracing::debug!(
            row_index = req.row_index,
            column = %req.column,
            "cell update committed"
        );
        Ok(next)
    }

    /// Apply one identity-addressed cell edit.
    ///
    /// Positional indices go stale the moment the viewed snapshot is sorted
    /// or filtered, so the edit path captures the row `id` when editing
    /// starts and resolves it against the canonical sequence at commit time.
    ///
    /// # Returns
    /// The newly published sequence.
    ///
    /// # Errors
    /// [`TableError::StaleRow`] when `id` no longer resolves; otherwise the
    /// same validation errors as [`EmployeeStore::update`].
    pub fn update_by_id(
        &self,
        id: u32,
        column: Column,
        value: CellValue,
    ) -> Result<Arc<Vec<Employee>>, TableError> {
        let current = self.rows.load_full();
        let row_index = current
            .iter()
            .position(|row| row.id == id)
            .ok_or(TableError::StaleRow { id })?;
        let next = Arc::new(mutate::apply_update(
            &current,
            &UpdateRequest {
                row_index,
                column,
                value,
            },
        )?);
        self.rows.store(Arc::clone(&next));
        tracing::debug!(id, column = %column, "cell update committed by id");
        Ok(next)
    }
}
