use crate::sql::schema::Column;

/// Command values produced by the parser, one per statement
///
/// A statement either parses into a complete command or fails; no partial
/// command is ever returned.
#[derive(Debug, PartialEq)]
pub enum Statement {
    /// CREATE [TABLE] statement
    CreateTable {
        name: String,
        columns: Vec<Column>,
    },
    /// INSERT INTO statement; values are the raw literal texts, coerced to
    /// typed cells when the catalog accepts the row
    Insert {
        table_name: String,
        values: Vec<String>,
    },
    /// SELECT statement
    ///
    /// `columns` and `order_by` are captured in full structured form but
    /// not applied by the executor: results always carry every column in
    /// schema order, rows in insertion order. The WHERE clause is kept as
    /// one whitespace-joined raw string and re-split by the executor.
    Select {
        table_name: String,
        columns: Vec<String>,
        where_condition: Option<String>,
        order_by: Vec<(String, OrderDirection)>,
    },
}

/// Sort direction (ascending or descending)
#[derive(Debug, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}
