//! Cell values and rows.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single display value inside a row.
///
/// Deserializes from any JSON scalar; objects and arrays are rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_f64() => match n.as_f64() {
                Some(v) => write_float(f, v),
                None => write!(f, "{n}"),
            },
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Print a float the way a browser shows it in a table cell: integral values
/// without ".0", `-0` as "0", exponent form outside `[1e-6, 1e21)`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == 0.0 {
        return f.write_str("0");
    }
    let magnitude = v.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{v}");
    }
    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A table row: column name -> value.
///
/// Rows are immutable inputs; resizing never touches them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(HashMap<String, CellValue>);

impl Row {
    /// Value stored under `column`, if any.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    /// Display text for `column`; missing and null values render empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(ToString::to_string).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::from(30_i64).to_string(), "30");
        assert_eq!(CellValue::from(30.0).to_string(), "30");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(-7_i64).to_string(), "-7");
    }

    #[test]
    fn test_float_edge_display() {
        assert_eq!(CellValue::from(-0.0).to_string(), "0");
        assert_eq!(CellValue::from(1e21).to_string(), "1e+21");
        assert_eq!(CellValue::from(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(CellValue::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(CellValue::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(CellValue::from(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(CellValue::from(f64::NAN), CellValue::Null);
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn test_row_from_json() {
        let row: Row =
            serde_json::from_str(r#"{"이름":"홍길동","나이":30,"직업":"개발자","비고":null}"#)
                .unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row.text("이름"), "홍길동");
        assert_eq!(row.text("나이"), "30");
        assert_eq!(row.text("비고"), "");
        assert_eq!(row.text("없음"), "");
    }

    #[test]
    fn test_nested_values_rejected() {
        let result: Result<Row, _> = serde_json::from_str(r#"{"a":[1,2]}"#);
        assert!(result.is_err());
    }
}
