/// The environment that routes pointer events to a [`ResizeController`].
///
/// While a drag is active the controller must see every pointer-move and
/// pointer-up, wherever the pointer is, so the host hands out a capture guard
/// when the drag starts. Dropping the guard releases whatever the host
/// acquired for it (window listeners, the `col-resize` cursor hint).
///
/// [`ResizeController`]: super::ResizeController
pub trait DragHost {
    /// Scoped window-level subscription held for the duration of one drag
    type Capture;

    /// Start routing window-level pointer events for a drag on column `index`.
    fn capture(&mut self, index: usize) -> Self::Capture;
}

/// Host for native use: events are fed in directly, so there is nothing to
/// subscribe to.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessHost;

impl DragHost for HeadlessHost {
    type Capture = ();

    fn capture(&mut self, _index: usize) -> Self::Capture {}
}
