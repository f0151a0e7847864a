//! gridview - editable data grid for the web
//!
//! A spreadsheet-like grid rendered in the browser via WebAssembly and
//! Canvas 2D:
//! - Typed columns (text, number, boolean, date, url, image, select,
//!   multiselect, button) projected into render-ready cells
//! - In-place editing, including a checklist popup for multiselect cells
//! - Custom renderers for action buttons and tag bubbles
//! - Live search filtering with stable-id edit addressing
//! - Add/reorder rows, add/resize columns, side-panel edit form
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(canvas, columns, rows, devicePixelRatio);
//! grid.render();
//! ```

pub mod edit;
pub mod error;
pub mod form;
pub mod grid;
pub mod layout;
pub mod model;
pub mod project;
pub mod render;
pub mod types;

use wasm_bindgen::prelude::*;

pub use edit::{apply_cell_edit, EditValue};
pub use error::{GridError, Result};
pub use form::{EditForm, FormErrors};
pub use grid::GridState;
#[cfg(target_arch = "wasm32")]
pub use grid::GridView;
pub use model::{FilterView, TableModel};
pub use project::project;
pub use types::*;

/// Diagnostic channel for dropped edits and other recoverable oddities.
pub(crate) fn log_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
