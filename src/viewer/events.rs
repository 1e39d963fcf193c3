//! Pointer event handlers for `ResizableTable`.
//!
//! Handle `mousedown` listeners live for the widget's lifetime; the
//! window-level handlers below are only reachable through an active capture.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, MouseEvent};

#[cfg(target_arch = "wasm32")]
use super::{create, ResizableTable, SharedState, HANDLE_CLASS};
#[cfg(target_arch = "wasm32")]
use crate::resize::PointerEvent;

#[cfg(target_arch = "wasm32")]
impl ResizableTable {
    /// Append a drag handle to every resizable header and listen for
    /// `mousedown` on it.
    pub(crate) fn attach_handles(
        document: &Document,
        state: &Rc<RefCell<SharedState>>,
    ) -> Result<Vec<Closure<dyn FnMut(MouseEvent)>>, JsValue> {
        let headers = {
            let s = state.borrow();
            s.header_cells
                .iter()
                .enumerate()
                .filter(|(i, _)| s.table.model().is_resizable(*i))
                .map(|(i, th)| (i, th.clone()))
                .collect::<Vec<_>>()
        };

        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::with_capacity(headers.len());
        for (index, th) in headers {
            let handle = create(document, "span")?;
            handle.set_class_name(HANDLE_CLASS);
            th.append_child(&handle)?;

            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                // Keep the header from starting a text selection or sort
                event.stop_propagation();
                event.prevent_default();
                #[allow(clippy::cast_possible_truncation)]
                let left = th.get_bounding_client_rect().left() as f32;
                Self::internal_mouse_down(&state, index, event.client_x() as f32, left);
            }) as Box<dyn FnMut(MouseEvent)>);
            handle
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }
        Ok(closures)
    }

    pub(crate) fn internal_mouse_down(
        state: &Rc<RefCell<SharedState>>,
        index: usize,
        x: f32,
        column_left: f32,
    ) {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        s.table.handle(PointerEvent::Down {
            index,
            pointer_x: x,
            column_left_edge_x: column_left,
        });
    }

    pub(crate) fn internal_mouse_move(state: &Rc<RefCell<SharedState>>, x: f32) {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        let outcome = s.table.handle(PointerEvent::Move { pointer_x: x });
        s.apply_outcome(outcome);
    }

    pub(crate) fn internal_mouse_up(state: &Rc<RefCell<SharedState>>) {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        s.table.handle(PointerEvent::Up);
    }

    pub(crate) fn internal_blur(state: &Rc<RefCell<SharedState>>) {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        s.table.handle(PointerEvent::Blur);
    }
}
