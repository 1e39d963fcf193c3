//! Pre-computed column edges.
//!
//! Positions are computed once per width change so hosts that draw their own
//! headers can hit test handles in O(log n).

use crate::types::Column;

/// Cumulative column edges (`positions[i]` = x of column i's left edge,
/// `positions[len]` = total width), relative to the table origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    positions: Vec<f32>,
}

impl ColumnLayout {
    pub fn from_columns(columns: &[Column]) -> Self {
        let mut positions = Vec::with_capacity(columns.len() + 1);
        let mut x: f32 = 0.0;
        for column in columns {
            positions.push(x);
            x += column.width;
        }
        positions.push(x); // Final edge
        Self { positions }
    }

    pub fn column_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn left_edge(&self, index: usize) -> Option<f32> {
        if index < self.column_count() {
            self.positions.get(index).copied()
        } else {
            None
        }
    }

    pub fn right_edge(&self, index: usize) -> Option<f32> {
        if index < self.column_count() {
            self.positions.get(index + 1).copied()
        } else {
            None
        }
    }

    pub fn total_width(&self) -> f32 {
        self.positions.last().copied().unwrap_or(0.0)
    }

    /// Column containing `x` (binary search over left edges).
    pub fn column_at_x(&self, x: f32) -> Option<usize> {
        if x < 0.0 || x >= self.total_width() {
            return None;
        }
        let idx = self.positions.partition_point(|&p| p <= x);
        idx.checked_sub(1).filter(|&i| i < self.column_count())
    }

    /// Resizable column whose handle covers `x`.
    ///
    /// A handle is centered on the column's right edge and spans
    /// `handle_width`. The last column has no handle.
    pub fn handle_at(&self, x: f32, handle_width: f32) -> Option<usize> {
        let half = handle_width / 2.0;
        let resizable = self.column_count().saturating_sub(1);
        // First right edge that is not left of the hit area
        let start = self.positions.partition_point(|&p| p < x - half);
        let edge = start.max(1);
        let index = edge - 1;
        if index >= resizable {
            return None;
        }
        let right = self.positions.get(edge).copied()?;
        ((right - x).abs() <= half).then_some(index)
    }
}
