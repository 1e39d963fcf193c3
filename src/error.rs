//! Structured error types for colresize.
//!
//! Every error here is recoverable: a rejected call leaves the table unchanged
//! and the controller usable.

/// All errors that can occur while building or resizing a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Column index outside `[0, len)`.
    #[error("Invalid column index {index} (table has {len} columns)")]
    InvalidIndex { index: usize, len: usize },

    /// Non-positive or non-finite width.
    #[error("Invalid column width: {0}")]
    InvalidWidth(f32),

    /// A drag was started while another one is still active.
    #[error("Column {active} is already being resized")]
    AlreadyDragging { active: usize },

    /// Two columns share a name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Table definition or event script could not be (de)serialized.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(target_arch = "wasm32")]
impl From<TableError> for wasm_bindgen::JsValue {
    fn from(e: TableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
