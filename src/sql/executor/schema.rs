use crate::{
    error::Result,
    sql::{
        catalog::Catalog,
        executor::{Executor, ResultSet},
        schema::{Column, Table},
    },
};

/// CREATE TABLE executor
pub struct CreateTable {
    name: String,
    columns: Vec<Column>,
}

impl CreateTable {
    pub fn new(name: String, columns: Vec<Column>) -> Box<Self> {
        Box::new(Self { name, columns })
    }
}

impl Executor for CreateTable {
    fn execute(self: Box<Self>, catalog: &mut Catalog) -> Result<ResultSet> {
        let table_name = self.name.clone();
        let columns = self.columns.len();
        catalog.create_table(Table::new(self.name, self.columns))?;
        Ok(ResultSet::CreateTable {
            table_name,
            columns,
        })
    }
}
