use crate::{
    error::Result,
    sql::{
        catalog::Catalog,
        executor::{Executor, ResultSet},
    },
};

/// INSERT executor
pub struct Insert {
    table_name: String,
    values: Vec<String>,
}

impl Insert {
    pub fn new(table_name: String, values: Vec<String>) -> Box<Self> {
        Box::new(Self { table_name, values })
    }
}

impl Executor for Insert {
    fn execute(self: Box<Self>, catalog: &mut Catalog) -> Result<ResultSet> {
        catalog.insert_into(&self.table_name, &self.values)?;
        Ok(ResultSet::Insert { count: 1 })
    }
}
