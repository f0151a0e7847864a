//! Core data model types shared across the crate.

mod cell;
mod column;
mod row;
mod selection;
mod theme;

pub use cell::Cell;
pub use column::{derive_column_id, Column, ColumnType, DEFAULT_COLUMN_WIDTH};
pub use row::{Row, Value};
pub use selection::{DragState, GridSelection};
pub use theme::GridTheme;
