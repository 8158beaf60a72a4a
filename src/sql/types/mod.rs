use std::{cmp::Ordering, fmt::Display};

use crate::error::{Error, Result};

/// Declared column type, chosen once at schema-definition time
///
/// The declared set is open-ended: INT and TEXT get dedicated variants with
/// their own parse-and-compare behavior, any other declared name is carried
/// as `Other` and behaves like TEXT. Row comparison dispatches on this
/// closed set without re-inspecting type name strings.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Int,
    Text,
    Other(String),
}

impl DataType {
    /// Resolves a declared type name (case-insensitive)
    pub fn from_name(name: &str) -> DataType {
        match name.to_uppercase().as_ref() {
            "INT" => DataType::Int,
            "TEXT" => DataType::Text,
            _ => DataType::Other(name.to_string()),
        }
    }

    /// Parses a raw literal into a cell value of this type
    ///
    /// Called once, when the catalog accepts a row: an invalid INT literal
    /// fails the whole INSERT here instead of surfacing in a later SELECT.
    pub fn parse_value(&self, raw: &str) -> Result<Value> {
        match self {
            DataType::Int => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| Error::Query(format!("invalid INT literal '{}'", raw))),
            DataType::Text | DataType::Other(_) => Ok(Value::String(raw.to_string())),
        }
    }

    /// Compares a stored cell against a condition literal
    ///
    /// INT columns compare numerically; the literal must parse as an
    /// integer or the whole query fails. Every other declared type compares
    /// its textual form lexically and case-insensitively.
    pub fn compare(&self, cell: &Value, literal: &str) -> Result<Ordering> {
        match (self, cell) {
            (DataType::Int, Value::Integer(n)) => {
                let target = literal
                    .parse::<i64>()
                    .map_err(|_| Error::Query(format!("invalid INT literal '{}'", literal)))?;
                Ok(n.cmp(&target))
            }
            (DataType::Int, Value::String(s)) => Err(Error::Query(format!(
                "non-integer value '{}' stored in an INT column",
                s
            ))),
            (_, cell) => Ok(cell
                .to_string()
                .to_lowercase()
                .cmp(&literal.to_lowercase())),
        }
    }
}

/// Cell value stored in a row
///
/// Cells are parsed into their tagged form when the row is accepted, never
/// re-parsed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    String(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
        }
    }
}

/// A row is a vector of values
pub type Row = Vec<Value>;
