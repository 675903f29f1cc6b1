//! JDBC type tags, the kind → tag mapping table, and named placeholders.
//!
//! Placeholders use the `#{name}` / `#{name,jdbcType=TAG}` syntax understood by
//! the downstream mapper layer; the exact text is part of the output contract.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::value::ValueKind;

/// A JDBC type tag attached to a named placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JdbcType {
    Varchar,
    Integer,
    Date,
    /// Any other tag, rendered verbatim (e.g. `TIMESTAMP`, `NUMERIC`).
    Other(String),
}

impl JdbcType {
    pub fn as_str(&self) -> &str {
        match self {
            JdbcType::Varchar => "VARCHAR",
            JdbcType::Integer => "INTEGER",
            JdbcType::Date => "DATE",
            JdbcType::Other(tag) => tag,
        }
    }

    /// Whether values bound with this tag are coerced to dates before binding.
    pub fn is_date(&self) -> bool {
        matches!(self, JdbcType::Date)
    }
}

impl fmt::Display for JdbcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JdbcType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Ok(if tag.eq_ignore_ascii_case("VARCHAR") {
            JdbcType::Varchar
        } else if tag.eq_ignore_ascii_case("INTEGER") {
            JdbcType::Integer
        } else if tag.eq_ignore_ascii_case("DATE") {
            JdbcType::Date
        } else {
            JdbcType::Other(tag.to_string())
        })
    }
}

impl From<&str> for JdbcType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<String> for JdbcType {
    fn from(s: String) -> Self {
        JdbcType::from(s.as_str())
    }
}

impl From<JdbcType> for String {
    fn from(t: JdbcType) -> Self {
        match t {
            JdbcType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Mapping from a value kind to the JDBC tag used when nothing overrides it.
///
/// Kinds without an entry render as `VARCHAR`. When deserialized, the given
/// entries are layered over the built-in table rather than replacing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeMapping {
    entries: HashMap<ValueKind, JdbcType>,
}

impl Default for TypeMapping {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(ValueKind::Integer, JdbcType::Integer);
        // FIXME: floats are tagged INTEGER, inherited from the mapper this
        // replaces. Kept so existing statements bind the same way.
        entries.insert(ValueKind::Float, JdbcType::Integer);
        entries.insert(ValueKind::Date, JdbcType::Date);
        entries.insert(ValueKind::Timestamp, JdbcType::Date);
        Self { entries }
    }
}

impl TypeMapping {
    /// The built-in table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with no entries: everything renders as `VARCHAR`.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Map `kind` to `tag`, replacing any previous entry.
    pub fn with(mut self, kind: ValueKind, tag: impl Into<JdbcType>) -> Self {
        self.entries.insert(kind, tag.into());
        self
    }

    /// Remove the entry for `kind` so it falls back to `VARCHAR`.
    pub fn without(mut self, kind: ValueKind) -> Self {
        self.entries.remove(&kind);
        self
    }

    /// Tag for `kind`, falling back to `VARCHAR`.
    pub fn lookup(&self, kind: ValueKind) -> JdbcType {
        self.entries
            .get(&kind)
            .cloned()
            .unwrap_or(JdbcType::Varchar)
    }
}

impl<'de> Deserialize<'de> for TypeMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = HashMap::<ValueKind, JdbcType>::deserialize(deserializer)?;
        let mut mapping = TypeMapping::default();
        mapping.entries.extend(overrides);
        Ok(mapping)
    }
}

/// `#{name}`
pub fn placeholder(name: &str) -> String {
    format!("#{{{name}}}")
}

/// `#{name,jdbcType=TAG}`
pub fn typed_placeholder(name: &str, jdbc_type: &JdbcType) -> String {
    format!("#{{{name},jdbcType={jdbc_type}}}")
}
