//! Edit interpretation: applies an edited cell value back to the row store.
//!
//! The inverse of projection for the mutable cell kinds. Target rows are
//! resolved through the filtered view to a stable row id — never by store
//! position — so edits made while a search filter is active land on the
//! correct underlying row.

use crate::error::Result;
use crate::log_warn;
use crate::model::{FilterView, TableModel};
use crate::types::{ColumnType, Value};

/// An edited cell value, tagged with the cell kind that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum EditValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Uri(String),
    /// Replacement selection from the multiselect popup. Fully replaces the
    /// prior list; there is no merge.
    Selection(Vec<String>),
}

impl EditValue {
    fn kind_name(&self) -> &'static str {
        match self {
            EditValue::Text(_) => "text",
            EditValue::Number(_) => "number",
            EditValue::Boolean(_) => "boolean",
            EditValue::Uri(_) => "uri",
            EditValue::Selection(_) => "selection",
        }
    }
}

/// Apply an edit to the cell at `(col, row)` of the filtered view.
///
/// Only edits whose kind matches the column's declared type are applied;
/// mismatches (and out-of-range coordinates) are dropped with a diagnostic —
/// never an error. The write itself is all-or-nothing against the single
/// target row.
pub fn apply_cell_edit(
    model: &mut TableModel,
    view: &FilterView,
    col: usize,
    row: usize,
    value: EditValue,
) -> Result<()> {
    let Some(column) = model.column(col) else {
        log_warn(&format!("dropped edit: column {col} out of range"));
        return Ok(());
    };
    let Some(row_id) = view.row_id_at(row) else {
        log_warn(&format!("dropped edit: row {row} out of range"));
        return Ok(());
    };
    let column_id = column.id.clone();

    let Some(stored) = interpret(column.ty, value) else {
        return Ok(());
    };
    model.set_field(row_id, &column_id, stored)
}

/// Map an edit onto the stored value for a column type, or `None` when the
/// kind does not match the declared type.
fn interpret(ty: ColumnType, value: EditValue) -> Option<Value> {
    let stored = match (ty, value) {
        // Text-shaped columns all take text edits.
        (ColumnType::Text | ColumnType::Date | ColumnType::Image, EditValue::Text(s)) => {
            Value::Text(s)
        }
        (ColumnType::Number, EditValue::Number(n)) => Value::Number(n),
        (ColumnType::Boolean, EditValue::Boolean(b)) => Value::Bool(b),
        (ColumnType::Url, EditValue::Uri(s)) => Value::Text(s),
        (ColumnType::Select | ColumnType::Multiselect, EditValue::Selection(items)) => {
            Value::List(items)
        }
        (ty, value) => {
            log_warn(&format!(
                "dropped edit: {} value for {ty:?} column",
                value.kind_name()
            ));
            return None;
        }
    };
    Some(stored)
}
