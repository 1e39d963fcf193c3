//! Window-level pointer capture for an active drag.
//!
//! The capture attaches `mousemove`/`mouseup`/`blur` on `window` and sets the
//! body cursor to `col-resize`. Dropping it undoes all of that, so the drag
//! keeps tracking after the pointer leaves the thin handle and nothing is
//! left attached once it ends.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::{Rc, Weak};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, HtmlElement, MouseEvent, Window};

#[cfg(target_arch = "wasm32")]
use super::{ResizableTable, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::resize::DragHost;

#[cfg(target_arch = "wasm32")]
const RESIZE_CURSOR: &str = "col-resize";

/// Drag host backed by the browser window.
///
/// Holds a weak reference to the widget state so the capture's listeners can
/// reach the controller without keeping the widget alive.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub(crate) struct WindowHost {
    state: Weak<RefCell<SharedState>>,
}

#[cfg(target_arch = "wasm32")]
impl WindowHost {
    pub(crate) fn bind(&mut self, state: Weak<RefCell<SharedState>>) {
        self.state = state;
    }
}

#[cfg(target_arch = "wasm32")]
impl DragHost for WindowHost {
    // None when there is no window (e.g. a worker); the drag still runs but
    // only sees events fed in directly.
    type Capture = Option<WindowCapture>;

    fn capture(&mut self, index: usize) -> Self::Capture {
        let capture = WindowCapture::attach(&self.state);
        if capture.is_none() {
            tracing::warn!(index, "no window available for pointer capture");
        }
        capture
    }
}

/// Listeners and cursor hint held for one drag.
#[cfg(target_arch = "wasm32")]
pub(crate) struct WindowCapture {
    window: Window,
    body: Option<HtmlElement>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
    on_blur: Closure<dyn FnMut(Event)>,
}

#[cfg(target_arch = "wasm32")]
fn with_state(state: &Weak<RefCell<SharedState>>, f: impl FnOnce(&Rc<RefCell<SharedState>>)) {
    if let Some(state) = state.upgrade() {
        f(&state);
    }
}

#[cfg(target_arch = "wasm32")]
impl WindowCapture {
    fn attach(state: &Weak<RefCell<SharedState>>) -> Option<Self> {
        let window = web_sys::window()?;
        let body = window.document().and_then(|d| d.body());

        let on_move = {
            let state = Weak::clone(state);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                with_state(&state, |s| {
                    ResizableTable::internal_mouse_move(s, event.client_x() as f32);
                });
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_up = {
            let state = Weak::clone(state);
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                with_state(&state, ResizableTable::internal_mouse_up);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_blur = {
            let state = Weak::clone(state);
            Closure::wrap(Box::new(move |_event: Event| {
                with_state(&state, ResizableTable::internal_blur);
            }) as Box<dyn FnMut(Event)>)
        };

        window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .ok();
        window
            .add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
            .ok();
        window
            .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())
            .ok();
        if let Some(body) = &body {
            let _ = body.style().set_property("cursor", RESIZE_CURSOR);
        }

        Some(Self {
            window,
            body,
            on_move,
            on_up,
            on_blur,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowCapture {
    fn drop(&mut self) {
        self.window
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
            .ok();
        self.window
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref())
            .ok();
        self.window
            .remove_event_listener_with_callback("blur", self.on_blur.as_ref().unchecked_ref())
            .ok();
        if let Some(body) = &self.body {
            let _ = body.style().remove_property("cursor");
        }
    }
}
