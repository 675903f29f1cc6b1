//! Declared field lists for persisted types.
//!
//! Implemented by `#[derive(Entity)]`:
//!
//! ```ignore
//! use genq::Entity;
//!
//! #[derive(Entity)]
//! #[genq(rename_all = "camelCase")]
//! struct Login {
//!     login_id: i32,
//!     user_name: String,
//!     #[genq(transient)]
//!     session: Option<Session>,
//! }
//! ```

use crate::value::{Value, ValueKind};

/// One declared field of a persisted type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Property name used in placeholders (`#{name,...}`).
    pub name: &'static str,
    /// Explicit column name; `None` derives it from `name`.
    pub column: Option<&'static str>,
    /// Declared kind, used for JDBC type inference.
    pub kind: ValueKind,
    /// Excluded from persistence.
    pub transient: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            column: None,
            kind,
            transient: false,
        }
    }

    pub const fn with_column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}

/// A type whose fields can be turned into INSERT values.
pub trait Entity {
    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Current value of the field called `name`; `Value::Null` when absent,
    /// transient, or unknown.
    fn field_value(&self, name: &str) -> Value;
}
