use serde::{Deserialize, Serialize};

use crate::error::{GenqError, GenqResult};
use crate::ident::check;
use crate::jdbc::TypeMapping;
use crate::naming::ColumnNaming;

/// Default date format for DATE coercion (`yyyy-MM-dd`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default placeholder-free table for function calls.
pub const DEFAULT_DUAL_TABLE: &str = "DUAL";

/// Default placeholder name bound by prefix LIKE lookups.
pub const DEFAULT_LIKE_PLACEHOLDER: &str = "attribute";

/// Configuration for a [`Synthesizer`](crate::Synthesizer).
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```toml
/// date_format = "%d/%m/%Y"
/// dual_table = "SYSIBM.SYSDUMMY1"
///
/// [type_mapping]
/// boolean = "BOOLEAN"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// chrono format used to parse text into dates (default `%Y-%m-%d`).
    pub date_format: String,
    /// Table named in function-call selects (default `DUAL`).
    pub dual_table: String,
    /// Placeholder bound by prefix LIKE lookups (default `attribute`).
    pub like_placeholder: String,
    /// Property → column conversion.
    pub naming: ColumnNaming,
    /// Value kind → JDBC tag table.
    pub type_mapping: TypeMapping,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            dual_table: DEFAULT_DUAL_TABLE.to_string(),
            like_placeholder: DEFAULT_LIKE_PLACEHOLDER.to_string(),
            naming: ColumnNaming::default(),
            type_mapping: TypeMapping::default(),
        }
    }
}

impl SynthConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default date format (chrono `strftime` syntax).
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the table used by function-call selects.
    pub fn with_dual_table(mut self, table: impl Into<String>) -> Self {
        self.dual_table = table.into();
        self
    }

    /// Set the placeholder name used by prefix LIKE lookups.
    pub fn with_like_placeholder(mut self, name: impl Into<String>) -> Self {
        self.like_placeholder = name.into();
        self
    }

    pub fn with_naming(mut self, naming: ColumnNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_type_mapping(mut self, mapping: TypeMapping) -> Self {
        self.type_mapping = mapping;
        self
    }

    /// Check the configured names before any statement is rendered with them.
    pub fn validate(&self) -> GenqResult<()> {
        if self.date_format.trim().is_empty() {
            return Err(GenqError::validation("date_format cannot be empty"));
        }
        check(&self.dual_table, "dual_table")?;
        check(&self.like_placeholder, "like_placeholder")?;
        Ok(())
    }
}
