use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    error::{Error, Result},
    sql::{schema::Table, types::Row},
};

/// The table catalog: the process-lifetime mapping from table name to
/// table definition and rows
///
/// Entries are created by CREATE, appended to by INSERT and read by
/// SELECT; there is no deletion. Every mutation is all-or-nothing.
pub struct Catalog {
    tables: BTreeMap<String, Table>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Creates a table; fails if the name is already taken
    pub fn create_table(&mut self, table: Table) -> Result<()> {
        table.validate()?;
        if self.tables.contains_key(&table.name) {
            return Err(Error::Query(format!(
                "table {} already exists",
                table.name
            )));
        }
        debug!(table = %table.name, columns = table.columns.len(), "created table");
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// Appends one row built from the supplied raw literal texts
    ///
    /// Existence, arity (no defaults, no padding, no truncation) and every
    /// cell literal are checked before anything is stored: either a full
    /// typed row is appended, or the table is left untouched.
    pub fn insert_into(&mut self, table_name: &str, values: &[String]) -> Result<()> {
        let table = self
            .tables
            .get_mut(table_name)
            .ok_or(Error::Query(format!("table {} does not exist", table_name)))?;

        if values.len() != table.columns.len() {
            return Err(Error::Query(format!(
                "table {} has {} columns, got {} values",
                table_name,
                table.columns.len(),
                values.len()
            )));
        }

        let mut row = Row::with_capacity(values.len());
        for (column, value) in table.columns.iter().zip(values) {
            let cell = column.datatype.parse_value(value).map_err(|err| match err {
                Error::Query(msg) => {
                    Error::Query(format!("column {}: {}", column.name, msg))
                }
                err => err,
            })?;
            row.push(cell);
        }

        table.rows.push(row);
        debug!(table = %table_name, "inserted row");
        Ok(())
    }

    /// Looks up a table by name
    pub fn get_table(&self, table_name: &str) -> Option<&Table> {
        self.tables.get(table_name)
    }

    /// Returns the table, or a descriptive failure if it doesn't exist
    pub fn must_get_table(&self, table_name: &str) -> Result<&Table> {
        self.get_table(table_name)
            .ok_or(Error::Query(format!("table {} does not exist", table_name)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::sql::schema::{Column, Table};
    use crate::sql::types::{DataType, Value};

    fn users_table() -> Table {
        Table::new(
            "users".to_string(),
            vec![
                Column {
                    name: "id".to_string(),
                    datatype: DataType::Int,
                    indexed: false,
                },
                Column {
                    name: "name".to_string(),
                    datatype: DataType::Text,
                    indexed: false,
                },
            ],
        )
    }

    #[test]
    fn test_create_table_rejects_duplicate_name() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table()).unwrap();
        assert!(catalog.create_table(users_table()).is_err());
        // the original table is still there, untouched
        assert_eq!(catalog.must_get_table("users").unwrap().rows.len(), 0);
    }

    #[test]
    fn test_insert_parses_cells_once() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table()).unwrap();
        catalog
            .insert_into("users", &["1".to_string(), "Bob".to_string()])
            .unwrap();

        let table = catalog.must_get_table("users").unwrap();
        assert_eq!(
            table.rows,
            vec![vec![Value::Integer(1), Value::String("Bob".to_string())]]
        );
    }

    #[test]
    fn test_insert_preserves_arrival_order() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table()).unwrap();
        for (id, name) in [("2", "b"), ("1", "a"), ("3", "c")] {
            catalog
                .insert_into("users", &[id.to_string(), name.to_string()])
                .unwrap();
        }

        let ids: Vec<_> = catalog
            .must_get_table("users")
            .unwrap()
            .rows
            .iter()
            .map(|row| row[0].clone())
            .collect();
        assert_eq!(
            ids,
            vec![Value::Integer(2), Value::Integer(1), Value::Integer(3)]
        );
    }

    #[test]
    fn test_insert_arity_mismatch_appends_nothing() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table()).unwrap();

        assert!(catalog.insert_into("users", &["1".to_string()]).is_err());
        assert!(
            catalog
                .insert_into(
                    "users",
                    &["1".to_string(), "Bob".to_string(), "extra".to_string()]
                )
                .is_err()
        );
        assert_eq!(catalog.must_get_table("users").unwrap().rows.len(), 0);
    }

    #[test]
    fn test_insert_invalid_int_literal_appends_nothing() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table()).unwrap();

        let err = catalog
            .insert_into("users", &["not_a_number".to_string(), "Bob".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("column id"));
        assert_eq!(catalog.must_get_table("users").unwrap().rows.len(), 0);
    }

    #[test]
    fn test_insert_into_missing_table_mutates_nothing() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table()).unwrap();

        assert!(catalog.insert_into("ghosts", &["1".to_string()]).is_err());
        assert!(catalog.get_table("ghosts").is_none());
        assert_eq!(catalog.must_get_table("users").unwrap().rows.len(), 0);
    }

    #[test]
    fn test_must_get_table_unknown() {
        let catalog = Catalog::new();
        assert!(catalog.must_get_table("nope").is_err());
    }
}
