use super::push_where;
use super::traits::SqlBuilder;
use crate::error::{GenqError, GenqResult};
use crate::ident::check;

/// DELETE builder.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    /// Table name
    table: String,
    /// WHERE conditions, joined with AND
    conditions: Vec<String>,
}

impl DeleteBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: Vec::new(),
        }
    }

    /// Add a raw WHERE condition, joined to earlier ones with AND.
    pub fn and_where(&mut self, condition: impl Into<String>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }
}

impl SqlBuilder for DeleteBuilder {
    fn build_sql(&self) -> String {
        // never an unconditional delete
        if self.conditions.is_empty() {
            return format!("DELETE FROM {} WHERE 1=0", self.table);
        }
        let mut sql = format!("DELETE FROM {}", self.table);
        push_where(&mut sql, &self.conditions);
        sql
    }

    fn validate(&self) -> GenqResult<()> {
        check(&self.table, "DeleteBuilder: table")?;
        if self.conditions.iter().any(|c| c.trim().is_empty()) {
            return Err(GenqError::validation(
                "DeleteBuilder: WHERE condition cannot be empty",
            ));
        }
        Ok(())
    }
}
