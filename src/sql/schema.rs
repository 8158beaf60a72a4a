use crate::{
    error::{Error, Result},
    sql::types::{DataType, Row},
};

/// Table definition plus its rows
///
/// Columns are fixed at creation and never change afterwards; rows are
/// append-only and each row's length always equals the column count.
#[derive(Debug, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Creates a new table with no rows
    pub fn new(name: String, columns: Vec<Column>) -> Self {
        Self {
            name,
            columns,
            rows: Vec::new(),
        }
    }

    /// Validates table schema
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::Query(format!("table {} has no columns", self.name)));
        }

        // Column names must be unique within a table
        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(Error::Query(format!(
                    "duplicate column {} in table {}",
                    col.name, self.name
                )));
            }
        }

        Ok(())
    }

    /// Returns the column index for a given column name (exact match)
    pub fn get_col_index(&self, col_name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == col_name)
            .ok_or(Error::Query(format!("column {} not found", col_name)))
    }
}

/// Column definition
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub datatype: DataType,
    /// Recorded from the INDEXED flag at creation; no index structure is
    /// built or consulted
    pub indexed: bool,
}

#[cfg(test)]
mod tests {
    use super::{Column, Table};
    use crate::sql::types::DataType;

    fn col(name: &str, datatype: DataType) -> Column {
        Column {
            name: name.to_string(),
            datatype,
            indexed: false,
        }
    }

    #[test]
    fn test_validate_rejects_empty_schema() {
        let table = Table::new("empty".to_string(), vec![]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_columns() {
        let table = Table::new(
            "t".to_string(),
            vec![col("id", DataType::Int), col("id", DataType::Text)],
        );
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_get_col_index_is_case_sensitive() {
        let table = Table::new("t".to_string(), vec![col("Name", DataType::Text)]);
        assert_eq!(table.get_col_index("Name").unwrap(), 0);
        assert!(table.get_col_index("name").is_err());
    }
}
