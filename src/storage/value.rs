//! Eagerly materialized query results

use std::fmt;

use rusqlite::types::ValueRef;
use serde::{Deserialize, Serialize};

/// A single cell read back from the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    /// Text written to CSV files; NULL becomes an empty field
    pub fn to_csv_field(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Integer(i) => CellValue::Integer(i),
            ValueRef::Real(f) => CellValue::Real(f),
            ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => CellValue::Blob(bytes.to_vec()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{:.1}", r)
                } else {
                    write!(f, "{}", r)
                }
            }
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Blob(bytes) => {
                write!(f, "0x")?;
                for b in bytes {
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
        }
    }
}

/// Column names plus every row of a query, in engine order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::Integer(-7).to_string(), "-7");
        assert_eq!(CellValue::Real(2.0).to_string(), "2.0");
        assert_eq!(CellValue::Real(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Text("pen".to_string()).to_string(), "pen");
        assert_eq!(CellValue::Blob(vec![0x0a, 0xff]).to_string(), "0x0AFF");
    }

    #[test]
    fn test_csv_field_null_is_empty() {
        assert_eq!(CellValue::Null.to_csv_field(), "");
        assert_eq!(CellValue::Integer(3).to_csv_field(), "3");
    }

    #[test]
    fn test_from_value_ref() {
        assert_eq!(CellValue::from(ValueRef::Integer(4)), CellValue::Integer(4));
        assert_eq!(
            CellValue::from(ValueRef::Text(b"abc")),
            CellValue::Text("abc".to_string())
        );
        assert_eq!(CellValue::from(ValueRef::Null), CellValue::Null);
    }
}
