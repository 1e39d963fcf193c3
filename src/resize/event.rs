use serde::{Deserialize, Serialize};

/// Pointer inputs consumed by the resize engine.
///
/// Serialized with a `type` tag so gesture scripts read naturally:
/// `{"type": "down", "index": 0, "pointerX": 160, "columnLeftEdgeX": 10}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    /// Pointer pressed on the handle of column `index`
    Down {
        index: usize,
        #[serde(rename = "pointerX")]
        pointer_x: f32,
        #[serde(rename = "columnLeftEdgeX")]
        column_left_edge_x: f32,
    },
    /// Pointer moved anywhere in the window
    Move {
        #[serde(rename = "pointerX")]
        pointer_x: f32,
    },
    /// Pointer released
    Up,
    /// Window lost focus; pointer capture is gone
    Blur,
}
