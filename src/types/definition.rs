//! Serializable table input and output documents.

use serde::{Deserialize, Serialize};

use super::{Column, HeaderCell, ResizeConfig, Row};

/// Construction input: columns, rows and optional resize settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableDefinition {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub config: ResizeConfig,
}

/// Rendered state of a table at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub columns: Vec<Column>,
    pub header: Vec<HeaderCell>,
    /// Cell text per row, in column order
    pub rows: Vec<Vec<String>>,
}
