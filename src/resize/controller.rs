use crate::error::{Result, TableError};
use crate::table::TableModel;
use crate::types::ResizeConfig;

use super::{DragHost, PointerEvent};

/// Bookkeeping for the one drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Column being resized
    pub active_index: usize,
    /// Pointer X at pointer-down
    pub origin_client_x: f32,
    /// Left edge of the active column, in the same coordinate space as the
    /// pointer positions
    pub column_left_edge_x: f32,
}

/// What a single controller call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// A drag began on `index`
    Started { index: usize },
    /// Pointer-down on the last column, which has no handle
    NotResizable { index: usize },
    /// `index` now has `width`
    Resized { index: usize, width: f32 },
    /// The drag on `index` finished (pointer-up or lost capture)
    Ended { index: usize },
    /// Nothing to do in the current state
    Noop,
    /// The event was rejected; the table is unchanged
    Rejected,
}

struct ActiveDrag<C> {
    state: DragState,
    // Released on drop
    _capture: C,
}

/// Turns pointer gestures into [`TableModel::set_column_width`] calls.
///
/// At most one drag exists at a time. The host capture lives inside the
/// active drag, so it is released on every way out of Dragging: pointer-up,
/// cancel, or dropping the controller mid-drag.
pub struct ResizeController<H: DragHost> {
    host: H,
    config: ResizeConfig,
    drag: Option<ActiveDrag<H::Capture>>,
}

impl<H: DragHost> ResizeController<H> {
    /// # Errors
    /// `InvalidWidth` if the config's floor or handle width is unusable.
    pub fn new(host: H, config: ResizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            drag: None,
        })
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref().map(|d| &d.state)
    }

    /// Enter Dragging for column `index`.
    ///
    /// The last column has no handle, so a pointer-down on it is a no-op.
    ///
    /// # Errors
    /// `AlreadyDragging` while another drag is active (that drag continues
    /// untouched), `InvalidIndex` for an index outside the table.
    pub fn begin_resize(
        &mut self,
        model: &TableModel,
        index: usize,
        pointer_x: f32,
        column_left_edge_x: f32,
    ) -> Result<ResizeOutcome> {
        if let Some(active) = &self.drag {
            return Err(TableError::AlreadyDragging {
                active: active.state.active_index,
            });
        }
        let len = model.column_count();
        if index >= len {
            return Err(TableError::InvalidIndex { index, len });
        }
        if !model.is_resizable(index) {
            return Ok(ResizeOutcome::NotResizable { index });
        }

        let capture = self.host.capture(index);
        self.drag = Some(ActiveDrag {
            state: DragState {
                active_index: index,
                origin_client_x: pointer_x,
                column_left_edge_x,
            },
            _capture: capture,
        });
        tracing::debug!(index, pointer_x, column_left_edge_x, "resize started");
        Ok(ResizeOutcome::Started { index })
    }

    /// Resize the active column so its right edge follows `pointer_x`.
    ///
    /// The width is clamped to the resize floor. Moves while Idle are ignored.
    ///
    /// # Errors
    /// Whatever [`TableModel::set_column_width`] rejects; the drag stays
    /// active.
    pub fn update_resize(
        &mut self,
        model: &mut TableModel,
        pointer_x: f32,
    ) -> Result<ResizeOutcome> {
        let Some(drag) = &self.drag else {
            return Ok(ResizeOutcome::Noop);
        };
        let index = drag.state.active_index;
        // f32::max picks the floor when the pointer position is NaN
        let width = (pointer_x - drag.state.column_left_edge_x).max(self.config.min_width);
        model.set_column_width(index, width)?;
        Ok(ResizeOutcome::Resized { index, width })
    }

    /// Leave Dragging and release the capture. Safe to call while Idle.
    pub fn end_resize(&mut self) -> ResizeOutcome {
        match self.drag.take() {
            Some(drag) => {
                let index = drag.state.active_index;
                drop(drag);
                tracing::debug!(index, "resize ended");
                ResizeOutcome::Ended { index }
            }
            None => ResizeOutcome::Noop,
        }
    }

    /// Implicit end when pointer capture is lost (window blur).
    pub fn cancel(&mut self) -> ResizeOutcome {
        if let Some(drag) = &self.drag {
            tracing::debug!(index = drag.state.active_index, "resize cancelled");
        }
        self.end_resize()
    }

    /// Route one pointer event to the matching transition.
    ///
    /// # Errors
    /// See [`Self::begin_resize`] and [`Self::update_resize`].
    pub fn dispatch(
        &mut self,
        model: &mut TableModel,
        event: PointerEvent,
    ) -> Result<ResizeOutcome> {
        match event {
            PointerEvent::Down {
                index,
                pointer_x,
                column_left_edge_x,
            } => self.begin_resize(model, index, pointer_x, column_left_edge_x),
            PointerEvent::Move { pointer_x } => self.update_resize(model, pointer_x),
            PointerEvent::Up => Ok(self.end_resize()),
            PointerEvent::Blur => Ok(self.cancel()),
        }
    }
}
