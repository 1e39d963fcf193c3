//! `ResizableTable` - the WASM-exported DOM binding.
//!
//! Renders a `<table>` into a host element and wires drag handles to the
//! resize engine:
//! - One `span.draggable` per header cell except the last
//! - `mousedown` on a handle begins a resize
//! - Window-level move/up/blur listeners exist only while a drag is active
//!   (see `capture`)
//!
//! No manual JavaScript wiring is required.

mod capture;
mod events;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use crate::resize::{ColumnResizeTable, ResizeOutcome};
#[cfg(target_arch = "wasm32")]
use crate::types::{Column, TableDefinition};

#[cfg(target_arch = "wasm32")]
pub(crate) use capture::WindowHost;

/// Class of the header drag handle
#[cfg(target_arch = "wasm32")]
const HANDLE_CLASS: &str = "draggable";

/// Class of the element wrapping the table
#[cfg(target_arch = "wasm32")]
const WRAPPER_CLASS: &str = "wrapper";

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) table: ColumnResizeTable<WindowHost>,
    /// `th` elements in column order
    pub(crate) header_cells: Vec<HtmlElement>,
}

#[cfg(target_arch = "wasm32")]
impl SharedState {
    /// Mirror a committed width onto the header cell.
    pub(crate) fn apply_outcome(&self, outcome: ResizeOutcome) {
        if let ResizeOutcome::Resized { index, width } = outcome {
            // The last header keeps filling the remaining space
            if !self.table.model().is_resizable(index) {
                return;
            }
            if let Some(th) = self.header_cells.get(index) {
                set_cell_width(th, width);
            }
        }
    }
}

/// The table widget exported to JavaScript
#[wasm_bindgen]
pub struct ResizableTable {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    root: HtmlElement,
}

#[cfg(target_arch = "wasm32")]
fn create(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

#[cfg(target_arch = "wasm32")]
fn set_cell_width(th: &HtmlElement, width: f32) {
    let px = format!("{width}px");
    let style = th.style();
    let _ = style.set_property("width", &px);
    let _ = style.set_property("min-width", &px);
    let _ = style.set_property("max-width", &px);
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl ResizableTable {
    /// Render a table into `container`.
    ///
    /// `definition` is `{ columns: [{name, width}], rows: [{...}], config? }`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, definition: JsValue) -> Result<ResizableTable, JsValue> {
        console_error_panic_hook::set_once();
        let definition: TableDefinition = serde_wasm_bindgen::from_value(definition)?;
        Self::mount(&container, definition)
    }

    /// Same as the constructor, with the definition as a JSON string.
    #[wasm_bindgen(js_name = "fromJson")]
    pub fn from_json(container: HtmlElement, json: &str) -> Result<ResizableTable, JsValue> {
        console_error_panic_hook::set_once();
        let definition: TableDefinition = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {e}")))?;
        Self::mount(&container, definition)
    }

    fn mount(
        container: &HtmlElement,
        definition: TableDefinition,
    ) -> Result<ResizableTable, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let root = create(&document, "div")?;
        root.set_class_name(WRAPPER_CLASS);
        let table_el = create(&document, "table")?;
        let thead = create(&document, "thead")?;
        let header_row = create(&document, "tr")?;
        let tbody = create(&document, "tbody")?;

        let header_cells = definition
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let fill = i + 1 == definition.columns.len();
                Self::build_header_cell(&document, column, fill)
            })
            .collect::<Result<Vec<_>, JsValue>>()?;
        for th in &header_cells {
            header_row.append_child(th)?;
        }
        thead.append_child(&header_row)?;

        for row in &definition.rows {
            let tr = create(&document, "tr")?;
            for column in &definition.columns {
                let td = create(&document, "td")?;
                td.set_text_content(Some(&row.text(&column.name)));
                tr.append_child(&td)?;
            }
            tbody.append_child(&tr)?;
        }

        table_el.append_child(&thead)?;
        table_el.append_child(&tbody)?;
        root.append_child(&table_el)?;

        let table =
            ColumnResizeTable::from_definition_with_host(definition, WindowHost::default())?;
        let state = Rc::new(RefCell::new(SharedState {
            table,
            header_cells,
        }));
        state
            .borrow_mut()
            .table
            .host_mut()
            .bind(Rc::downgrade(&state));

        let closures = Self::attach_handles(&document, &state)?;
        container.append_child(&root)?;

        Ok(ResizableTable {
            state,
            closures,
            root,
        })
    }

    /// Header cell for `column`. The last header (`fill`) gets no fixed
    /// width so it takes up whatever space the resizable columns leave.
    fn build_header_cell(
        document: &Document,
        column: &Column,
        fill: bool,
    ) -> Result<HtmlElement, JsValue> {
        let th = create(document, "th")?;
        th.set_text_content(Some(&column.name));
        if !fill {
            set_cell_width(&th, column.width);
        }
        Ok(th)
    }

    /// Current widths in column order.
    #[wasm_bindgen(js_name = "columnWidths")]
    pub fn column_widths(&self) -> Vec<f32> {
        self.state.borrow().table.model().widths()
    }

    #[wasm_bindgen(js_name = "isDragging")]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().table.is_dragging()
    }

    /// Set a width directly (e.g. from a "reset" button).
    #[wasm_bindgen(js_name = "setColumnWidth")]
    pub fn set_column_width(&self, index: usize, width: f32) -> Result<(), JsValue> {
        let mut s = self.state.borrow_mut();
        s.table.set_column_width(index, width)?;
        s.apply_outcome(ResizeOutcome::Resized { index, width });
        Ok(())
    }

    /// End any drag in progress, releasing window listeners and the cursor.
    #[wasm_bindgen(js_name = "cancelResize")]
    pub fn cancel_resize(&self) {
        self.state.borrow_mut().table.cancel();
    }

    /// Columns, header cells and rendered rows as a plain JS object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.state.borrow().table.snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizableTable {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.table.cancel();
        }
        self.root.remove();
    }
}
