use crate::error::GenqResult;

/// Base trait for SQL text builders.
pub trait SqlBuilder {
    /// Build the SQL string without validation.
    fn build_sql(&self) -> String;

    /// Validate builder state.
    fn validate(&self) -> GenqResult<()> {
        Ok(())
    }

    /// Debug helper.
    fn to_sql(&self) -> String {
        self.build_sql()
    }

    /// Validate, then build the SQL string.
    fn build(&self) -> GenqResult<String> {
        self.validate()?;
        Ok(self.build_sql())
    }
}
