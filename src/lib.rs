//! colresize - resizable table columns
//!
//! A small engine for drag-to-resize table columns, usable natively and in
//! the browser via WebAssembly:
//! - Ordered columns with independent pixel widths, immutable row data
//! - A pointer-drag state machine with a resize floor
//! - Window-level pointer capture held only for the duration of a drag
//! - A DOM binding that renders the table and wires the handles
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { ResizableTable } from 'colresize';
//! await init();
//! const table = new ResizableTable(container, { columns, rows });
//! table.columnWidths();
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use colresize::{ColumnResizeTable, PointerEvent};
//!
//! let mut table = ColumnResizeTable::from_json(
//!     r#"{"columns": [{"name": "a", "width": 150}, {"name": "b", "width": 100}]}"#,
//! )?;
//! table.handle(PointerEvent::Down { index: 0, pointer_x: 160.0, column_left_edge_x: 10.0 });
//! table.handle(PointerEvent::Move { pointer_x: 210.0 });
//! table.handle(PointerEvent::Up);
//! assert_eq!(table.model().widths(), vec![200.0, 100.0]);
//! # Ok::<(), colresize::TableError>(())
//! ```

pub mod error;
pub mod resize;
pub mod table;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{Result, TableError};
pub use resize::{
    ColumnResizeTable, DragHost, DragState, HeadlessHost, PointerEvent, ResizeController,
    ResizeOutcome,
};
pub use table::{ColumnLayout, TableModel};
pub use types::*;
pub use viewer::ResizableTable;

/// Render a JSON table definition to a JSON snapshot (columns, header cells,
/// row texts) without touching the DOM.
///
/// # Errors
/// Returns an error if the definition is malformed or invalid.
#[wasm_bindgen(js_name = "renderTable")]
pub fn render_table(definition: &str) -> std::result::Result<String, JsValue> {
    let table =
        ColumnResizeTable::from_json(definition).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&table.snapshot())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
