//! Structured error types for gridview.

/// All errors that can occur in gridview model updates and rendering.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A column id that does not exist in the registry.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A row id that does not exist in the store.
    #[error("Unknown row: {0}")]
    UnknownRow(u64),

    /// Rejected structural edit (e.g. empty column name).
    #[error("Invalid column name: {0:?}")]
    ColumnName(String),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
