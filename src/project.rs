//! Cell projection: (row record, column definition) → typed display cell.
//!
//! The central dispatch by column type. Pure and total: any coordinate
//! produces a cell, and projecting the same coordinate twice without an
//! intervening edit yields identical output.

use crate::model::{FilterView, TableModel};
use crate::types::{Cell, ColumnType, Value};

/// Label painted on button cells.
pub const BUTTON_LABEL: &str = "View Details";

/// Project the cell at `(col, row)` of the filtered view.
///
/// Out-of-range coordinates return [`Cell::Loading`]; a missing field
/// renders the column type's empty default. Never panics.
pub fn project(model: &TableModel, view: &FilterView, col: usize, row: usize) -> Cell {
    let Some(column) = model.column(col) else {
        return Cell::Loading;
    };
    let Some(record) = view.row_id_at(row).and_then(|id| model.row_by_id(id)) else {
        return Cell::Loading;
    };

    // Button cells do not read a field; they bind the row for inspection.
    if column.ty == ColumnType::Button {
        return Cell::Button {
            label: BUTTON_LABEL.to_string(),
            row_id: record.id,
        };
    }

    let Some(value) = record.get(&column.id) else {
        // Absent fields render the column type's empty default.
        return match column.ty {
            ColumnType::Boolean => Cell::Boolean { value: false },
            ColumnType::Select | ColumnType::Multiselect => match &column.options {
                Some(options) => Cell::Tags {
                    options: options.clone(),
                    selected: Vec::new(),
                },
                None => Cell::Bubble { values: Vec::new() },
            },
            _ => Cell::Text {
                display: String::new(),
            },
        };
    };

    match column.ty {
        ColumnType::Boolean => Cell::Boolean {
            value: value.as_bool_lossy(),
        },
        ColumnType::Number => {
            let n = value.as_number_lossy();
            Cell::Number {
                value: n,
                display: Value::Number(n).to_display_string(),
            }
        }
        ColumnType::Url => Cell::Uri {
            target: value.to_display_string(),
        },
        ColumnType::Select | ColumnType::Multiselect => {
            let selected = value.as_list_lossy();
            // Declared options switch the cell to the custom tags renderer
            // (with its checklist popup); otherwise the built-in bubbles.
            match &column.options {
                Some(options) => Cell::Tags {
                    options: options.clone(),
                    selected,
                },
                None => Cell::Bubble { values: selected },
            }
        }
        // Text, date, image, and anything unrecognized string-coerce.
        _ => Cell::Text {
            display: value.to_display_string(),
        },
    }
}
