use serde::{Deserialize, Serialize};

/// A named table column with its current pixel width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique key, also used to address row values
    pub name: String,
    /// Width in logical pixels (always > 0)
    pub width: f32,
}

impl Column {
    pub fn new(name: impl Into<String>, width: f32) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// One header cell as the host should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub name: String,
    pub width: f32,
    /// False for the last column, which never gets a drag handle
    pub resizable: bool,
}
