use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Default resize floor in logical pixels
pub const DEFAULT_MIN_WIDTH: f32 = 20.0;

/// Default width of a header drag handle in logical pixels
pub const DEFAULT_HANDLE_WIDTH: f32 = 8.0;

/// Tunables for drag-to-resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeConfig {
    /// Resize floor: drag updates never produce a narrower column
    pub min_width: f32,
    /// Hit area of a header handle, centered on the column's right edge
    pub handle_width: f32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            handle_width: DEFAULT_HANDLE_WIDTH,
        }
    }
}

impl ResizeConfig {
    /// Reject floors that would allow a zero or negative width.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_width > 0.0 && self.min_width.is_finite()) {
            return Err(TableError::InvalidWidth(self.min_width));
        }
        if !(self.handle_width >= 0.0 && self.handle_width.is_finite()) {
            return Err(TableError::InvalidWidth(self.handle_width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ResizeConfig = serde_json::from_str(r#"{"minWidth": 40}"#).unwrap();
        assert_eq!(config.min_width, 40.0);
        assert_eq!(config.handle_width, DEFAULT_HANDLE_WIDTH);
    }

    #[test]
    fn test_validate() {
        assert!(ResizeConfig::default().validate().is_ok());
        let zero_floor = ResizeConfig {
            min_width: 0.0,
            ..ResizeConfig::default()
        };
        assert!(matches!(
            zero_floor.validate(),
            Err(TableError::InvalidWidth(_))
        ));
        let nan_handle = ResizeConfig {
            handle_width: f32::NAN,
            ..ResizeConfig::default()
        };
        assert!(nan_handle.validate().is_err());
    }
}
