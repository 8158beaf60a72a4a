use std::fmt::Display;

use crate::{
    error::Result,
    sql::{
        catalog::Catalog,
        executor::{mutation::Insert, query::Select, schema::CreateTable},
        parser::ast::Statement,
        types::Row,
    },
};

mod mutation;
mod query;
mod schema;

/// SQL executor trait
pub trait Executor {
    fn execute(self: Box<Self>, catalog: &mut Catalog) -> Result<ResultSet>;
}

/// Builds an executor from a parsed command
impl dyn Executor {
    pub fn build(stmt: Statement) -> Box<dyn Executor> {
        match stmt {
            Statement::CreateTable { name, columns } => CreateTable::new(name, columns),
            Statement::Insert { table_name, values } => Insert::new(table_name, values),
            // The captured projection and ORDER_BY clauses are dropped
            // here: results always carry every column in schema order,
            // rows in insertion order.
            Statement::Select {
                table_name,
                columns: _,
                where_condition,
                order_by: _,
            } => Select::new(table_name, where_condition),
        }
    }
}

/// Execution result set
#[derive(Debug, PartialEq)]
pub enum ResultSet {
    CreateTable {
        table_name: String,
        columns: usize,
    },
    Insert {
        count: usize,
    },
    Select {
        columns: Vec<String>,
        rows: Vec<Row>,
    },
}

impl Display for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSet::CreateTable {
                table_name,
                columns,
            } => write!(
                f,
                "Table {} created successfully with {} columns.",
                table_name, columns
            ),
            ResultSet::Insert { count } => write!(f, "{} row(s) inserted.", count),
            ResultSet::Select { rows, .. } => {
                if rows.is_empty() {
                    return f.write_str("No rows found.");
                }
                let lines: Vec<String> = rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|value| value.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}
