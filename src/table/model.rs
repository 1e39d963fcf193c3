use std::collections::HashSet;

use crate::error::{Result, TableError};
use crate::types::{Column, HeaderCell, Row, TableSnapshot};

/// Ordered columns plus row data.
///
/// Columns are fixed at construction; only their widths change afterwards,
/// and only through [`TableModel::set_column_width`].
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl TableModel {
    /// Build a table, rejecting duplicate names and non-positive widths.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
            check_width(column.width)?;
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Current widths in column order.
    pub fn widths(&self) -> Vec<f32> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Replace the width of one column in place.
    ///
    /// # Errors
    /// `InvalidIndex` for an out-of-range index, `InvalidWidth` for a width
    /// that is not a positive finite number. The model is unchanged on error.
    pub fn set_column_width(&mut self, index: usize, new_width: f32) -> Result<()> {
        let len = self.columns.len();
        let column = self
            .columns
            .get_mut(index)
            .ok_or(TableError::InvalidIndex { index, len })?;
        check_width(new_width)?;
        column.width = new_width;
        tracing::trace!(index, width = new_width, "column width committed");
        Ok(())
    }

    /// Whether a drag handle exists for `index`. The last column never has one.
    pub fn is_resizable(&self, index: usize) -> bool {
        index < self.columns.len().saturating_sub(1)
    }

    /// Display text for one cell, addressed by column name.
    pub fn cell_text(&self, row: &Row, column: &Column) -> String {
        row.text(&column.name)
    }

    /// Cell texts of row `row_index` in column order.
    pub fn render_row(&self, row_index: usize) -> Option<Vec<String>> {
        let row = self.rows.get(row_index)?;
        Some(
            self.columns
                .iter()
                .map(|column| self.cell_text(row, column))
                .collect(),
        )
    }

    /// Header cells at current widths, with the handle flag resolved.
    pub fn header_cells(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| HeaderCell {
                name: column.name.clone(),
                width: column.width,
                resizable: self.is_resizable(i),
            })
            .collect()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            columns: self.columns.clone(),
            header: self.header_cells(),
            rows: (0..self.rows.len())
                .filter_map(|i| self.render_row(i))
                .collect(),
        }
    }
}

fn check_width(width: f32) -> Result<()> {
    if width > 0.0 && width.is_finite() {
        Ok(())
    } else {
        Err(TableError::InvalidWidth(width))
    }
}
