//! Clause-accumulating SQL text builders.
//!
//! These are the statement builders the synthesizer renders through. Each one
//! collects clauses (SELECT/FROM/WHERE, INSERT INTO/VALUES, DELETE FROM/WHERE)
//! and serializes them once, in clause order, as a single line of SQL text.
//!
//! ## Design
//!
//! - Output is text only; values are placeholders or caller-supplied literals.
//! - Identifiers are validated by [`SqlBuilder::build`] before rendering.
//! - Safe defaults: DELETE without WHERE renders a no-op unless explicitly allowed.

pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use traits::SqlBuilder;

/// Append ` WHERE a AND b ...` when there are conditions.
pub(crate) fn push_where(sql: &mut String, conditions: &[String]) {
    if conditions.is_empty() {
        return;
    }
    sql.push_str(" WHERE ");
    sql.push_str(&conditions.join(" AND "));
}
