use tracing::debug;

use crate::{
    error::Result,
    sql::{
        catalog::Catalog,
        executor::{Executor, ResultSet},
        parser::Parser,
    },
};

/// SQL session owning the catalog for the life of the process
///
/// Single-threaded and synchronous: one statement is fully lexed, parsed
/// and executed before the next is accepted. Each statement either applies
/// completely or leaves the catalog untouched.
pub struct Session {
    catalog: Catalog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    /// Executes one SQL statement
    pub fn execute(&mut self, sql: &str) -> Result<ResultSet> {
        debug!(statement = sql, "executing");
        let stmt = Parser::new(sql).parse()?;
        <dyn Executor>::build(stmt).execute(&mut self.catalog)
    }

    /// Executes one statement and renders the outcome as text
    ///
    /// The contract with the interactive read-loop: one statement's text
    /// in (already trimmed, already confirmed not to be the exit
    /// sentinel), one human-readable success or failure string out. A
    /// malformed statement never terminates the caller.
    pub fn run(&mut self, sql: &str) -> String {
        match self.execute(sql) {
            Ok(result) => result.to_string(),
            Err(err) => format!("Error: {}", err),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
