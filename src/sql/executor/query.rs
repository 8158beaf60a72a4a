use std::cmp::Ordering;

use crate::{
    error::{Error, Result},
    sql::{
        catalog::Catalog,
        executor::{Executor, ResultSet},
        schema::Table,
        types::Row,
    },
};

/// SELECT executor
///
/// Filters a table's rows through the raw WHERE condition. Projection and
/// ordering are not applied: every column comes back in schema order, rows
/// in insertion order.
pub struct Select {
    table_name: String,
    where_condition: Option<String>,
}

impl Select {
    pub fn new(table_name: String, where_condition: Option<String>) -> Box<Self> {
        Box::new(Self {
            table_name,
            where_condition,
        })
    }
}

impl Executor for Select {
    fn execute(self: Box<Self>, catalog: &mut Catalog) -> Result<ResultSet> {
        let table = catalog.must_get_table(&self.table_name)?;
        let rows = filter_rows(table, self.where_condition.as_deref())?;
        Ok(ResultSet::Select {
            columns: table.columns.iter().map(|c| c.name.clone()).collect(),
            rows,
        })
    }
}

/// Comparison operator of a WHERE condition
#[derive(Debug, Clone, Copy, PartialEq)]
enum ConditionOp {
    Equal,
    LessThan,
    GreaterThan,
}

impl ConditionOp {
    fn from_str(op: &str) -> Result<ConditionOp> {
        match op {
            "=" => Ok(ConditionOp::Equal),
            "<" => Ok(ConditionOp::LessThan),
            ">" => Ok(ConditionOp::GreaterThan),
            other => Err(Error::Query(format!(
                "unknown comparison operator {}",
                other
            ))),
        }
    }
}

/// Applies the raw WHERE condition to a table's rows
///
/// The raw string is re-split on whitespace. Only a split of exactly three
/// parts is interpreted as (column, operator, literal) and applied as a
/// filter; any other shape leaves the condition unapplied and every row
/// passes. An unknown column name or operator fails the query.
fn filter_rows(table: &Table, condition: Option<&str>) -> Result<Vec<Row>> {
    let parts = condition
        .map(|cond| cond.split_whitespace().collect::<Vec<_>>())
        .unwrap_or_default();
    let [column, op, literal] = parts.as_slice() else {
        return Ok(table.rows.clone());
    };

    let col_index = table.get_col_index(column)?;
    let op = ConditionOp::from_str(op)?;
    let datatype = &table.columns[col_index].datatype;

    let mut rows = Vec::new();
    for row in &table.rows {
        if evaluate(datatype.compare(&row[col_index], literal)?, op) {
            rows.push(row.clone());
        }
    }
    Ok(rows)
}

/// The one condition evaluator: maps the typed comparison outcome through
/// the operator, for every column type and both quoting paths alike
fn evaluate(ordering: Ordering, op: ConditionOp) -> bool {
    match op {
        ConditionOp::Equal => ordering == Ordering::Equal,
        ConditionOp::LessThan => ordering == Ordering::Less,
        ConditionOp::GreaterThan => ordering == Ordering::Greater,
    }
}
