use super::traits::SqlBuilder;
use crate::error::{GenqError, GenqResult};
use crate::ident::{check, check_not_blank};
use std::collections::HashSet;

/// INSERT builder.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    /// Table name
    table: String,
    /// Column names
    columns: Vec<String>,
    /// VALUES expressions (e.g. "#{loginId,jdbcType=INTEGER}", "SYSDATE", "NULL")
    value_exprs: Vec<String>,
}

impl InsertBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            value_exprs: Vec::new(),
        }
    }

    /// Pair a column with a value expression, emitted verbatim.
    pub fn value(&mut self, column: &str, expr: &str) -> &mut Self {
        self.columns.push(column.to_string());
        self.value_exprs.push(expr.to_string());
        self
    }

    /// Pair a column with `NULL`.
    pub fn value_null(&mut self, column: &str) -> &mut Self {
        self.value(column, "NULL")
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl SqlBuilder for InsertBuilder {
    fn build_sql(&self) -> String {
        if self.columns.is_empty() {
            return format!("INSERT INTO {} DEFAULT VALUES", self.table);
        }
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            self.value_exprs.join(", ")
        )
    }

    fn validate(&self) -> GenqResult<()> {
        check(&self.table, "InsertBuilder: table")?;
        let mut seen = HashSet::new();
        for (column, expr) in self.columns.iter().zip(&self.value_exprs) {
            check(column, "InsertBuilder: column")?;
            check_not_blank(expr, "InsertBuilder: value expression")?;
            if !seen.insert(column.as_str()) {
                return Err(GenqError::validation(format!(
                    "InsertBuilder: duplicate column '{column}'"
                )));
            }
        }
        Ok(())
    }
}
