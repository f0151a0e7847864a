//! The table model: column registry + row store.
//!
//! Owns all grid data. Everything else reads through accessors and mutates
//! through methods here, so each edit is all-or-nothing against its single
//! target row or column.

mod filter;

pub use filter::FilterView;

use crate::error::{GridError, Result};
use crate::types::{derive_column_id, Column, ColumnType, Row, Value};

pub struct TableModel {
    columns: Vec<Column>,
    rows: Vec<Row>,
    next_row_id: u64,
}

impl TableModel {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let next_row_id = rows.iter().map(|r| r.id + 1).max().unwrap_or(1);
        Self {
            columns,
            rows,
            next_row_id,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    pub fn column_by_id(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_by_id(&self, id: u64) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub(crate) fn row_by_id_mut(&mut self, id: u64) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Append a column derived from a user-entered display name.
    ///
    /// The machine id is the lowercased name with whitespace collapsed to
    /// underscores; if that collides with an existing id, a numeric suffix
    /// (`_2`, `_3`, ...) is appended. Existing rows are not backfilled —
    /// absent values render as the type's empty default.
    ///
    /// Returns the id of the new column.
    pub fn add_column(&mut self, name: &str, ty: ColumnType) -> Result<String> {
        if name.trim().is_empty() {
            return Err(GridError::ColumnName(name.to_string()));
        }
        let base = derive_column_id(name);
        let mut id = base.clone();
        let mut suffix = 2u32;
        while self.column_by_id(&id).is_some() {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }
        self.columns.push(Column::new(id.clone(), name.trim(), ty));
        Ok(id)
    }

    /// Append a new row with only its identifier populated.
    ///
    /// Returns the new row's id.
    pub fn add_row(&mut self) -> u64 {
        let id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(Row::new(id));
        id
    }

    /// Reorder a row from one store position to another (drag-to-reorder).
    /// Out-of-range positions are ignored.
    pub fn move_row(&mut self, from: usize, to: usize) {
        if from >= self.rows.len() || to >= self.rows.len() || from == to {
            return;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
    }

    /// Store position of a row id, if present.
    pub fn position_of(&self, row_id: u64) -> Option<usize> {
        self.rows.iter().position(|r| r.id == row_id)
    }

    /// Column resize.
    pub fn set_column_width(&mut self, idx: usize, width: f32) {
        if let Some(column) = self.columns.get_mut(idx) {
            column.width = width.max(0.0);
        }
    }

    /// Replace the options of a select/multiselect column.
    pub fn set_column_options(&mut self, idx: usize, options: Vec<String>) {
        if let Some(column) = self.columns.get_mut(idx) {
            column.options = Some(options);
        }
    }

    /// Write one field of one row, addressed by stable row id.
    pub fn set_field(&mut self, row_id: u64, column_id: &str, value: Value) -> Result<()> {
        if self.column_by_id(column_id).is_none() {
            return Err(GridError::UnknownColumn(column_id.to_string()));
        }
        let row = self
            .row_by_id_mut(row_id)
            .ok_or(GridError::UnknownRow(row_id))?;
        row.set(column_id, value);
        Ok(())
    }
}
