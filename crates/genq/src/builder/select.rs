use super::push_where;
use super::traits::SqlBuilder;
use crate::error::{GenqError, GenqResult};
use crate::ident::{check, check_not_blank};
use crate::synth::ALL_COLUMNS;

/// SELECT builder.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    /// Table name
    table: String,
    /// Projection (e.g. "*", "ID, NAME", "NOW( )")
    projection: String,
    /// WHERE conditions, joined with AND
    conditions: Vec<String>,
}

impl SelectBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            projection: ALL_COLUMNS.to_string(),
            conditions: Vec::new(),
        }
    }

    /// Set the projection.
    pub fn select(&mut self, projection: &str) -> &mut Self {
        self.projection = projection.to_string();
        self
    }

    /// Add a raw WHERE condition, joined to earlier ones with AND.
    ///
    /// The condition is concatenated as-is; the caller is responsible for
    /// anything interpolated into it.
    pub fn and_where(&mut self, condition: impl Into<String>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn has_where(&self) -> bool {
        !self.conditions.is_empty()
    }
}

impl SqlBuilder for SelectBuilder {
    fn build_sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.projection, self.table);
        push_where(&mut sql, &self.conditions);
        sql
    }

    fn validate(&self) -> GenqResult<()> {
        check(&self.table, "SelectBuilder: table")?;
        check_not_blank(&self.projection, "SelectBuilder: projection")?;
        if self.conditions.iter().any(|c| c.trim().is_empty()) {
            return Err(GenqError::validation(
                "SelectBuilder: WHERE condition cannot be empty",
            ));
        }
        Ok(())
    }
}
