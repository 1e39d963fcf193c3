//! Drag-to-resize state machine.
//!
//! A gesture runs Idle -> Dragging -> Idle:
//! - pointer-down on a handle begins the drag and acquires the host capture
//! - every pointer-move recomputes the active column's width
//! - pointer-up (or losing the window) ends it, dropping the capture

mod controller;
mod event;
mod host;
mod table;

pub use controller::{DragState, ResizeController, ResizeOutcome};
pub use event::PointerEvent;
pub use host::{DragHost, HeadlessHost};
pub use table::ColumnResizeTable;
