//! Per-cell view/edit state machine.
//!
//! Each rendered cell owns one [`CellEdit`]; no state is shared between
//! cells. Activation seeds an edit buffer from the cell's current value and
//! every deactivation commits the buffer through the store. There is no
//! cancel transition in this design: blur and confirm both write.

use crate::error::TableError;
use crate::models::{CellValue, Column, Employee};
use crate::store::EmployeeStore;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditState {
    Viewing,
    Editing { buffer: CellValue },
}

/// Edit machine for one cell, pinned to a row identity.
///
/// The row `id` is captured when the machine is built against a rendered
/// row, so a commit still addresses the right logical row after the viewed
/// snapshot has been re-sorted or re-filtered underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    row_id: u32,
    column: Column,
    state: EditState,
}

impl CellEdit {
    /// Build the machine for one rendered cell, starting in the viewing
    /// state.
    pub fn new(row: &Employee, column: Column) -> Self {
        Self {
            row_id: row.id,
            column,
            state: EditState::Viewing,
        }
    }

    pub fn row_id(&self) -> u32 {
        self.row_id
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Current edit buffer, when editing.
    pub fn buffer(&self) -> Option<&CellValue> {
        match &self.state {
            EditState::Editing { buffer } => Some(buffer),
            EditState::Viewing => None,
        }
    }

    /// Enter the editing state, seeding the buffer from the row's current
    /// cell value. Re-activating while already editing keeps the buffer.
    pub fn activate(&mut self, row: &Employee) {
        debug_assert_eq!(row.id, self.row_id, "activated against a different row");
        if !self.is_editing() {
            self.state = EditState::Editing {
                buffer: row.cell(self.column),
            };
        }
    }

    /// Replace the buffered value; ignored while viewing.
    pub fn set_value(&mut self, value: CellValue) {
        if let EditState::Editing { buffer } = &mut self.state {
            *buffer = value;
        }
    }

    /// Leave the editing state and hand the buffer to the store through the
    /// identity-addressed commit path.
    ///
    /// The machine returns to viewing whether or not the write succeeds,
    /// matching a blur that dismisses the input either way; a failed write
    /// leaves the store untouched and surfaces the error to the caller.
    ///
    /// # Returns
    /// The newly published snapshot, or `None` when the machine was not
    /// editing.
    ///
    /// # Errors
    /// Propagates [`TableError`] from the store's validation.
    pub fn commit(
        &mut self,
        store: &EmployeeStore,
    ) -> Result<Option<Arc<Vec<Employee>>>, TableError> {
        match std::mem::replace(&mut self.state, EditState::Viewing) {
            EditState::Viewing => Ok(None),
            EditState::Editing { buffer } => {
                store.update_by_id(self.row_id, self.column, buffer).map(Some)
            }
        }
    }
}
