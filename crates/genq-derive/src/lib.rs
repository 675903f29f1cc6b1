//! Derive macros for genq
//!
//! Provides `#[derive(Entity)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod entity;
mod sql_ident;

/// Derive the `Entity` field list for a struct.
///
/// # Example
///
/// ```ignore
/// use genq::Entity;
///
/// #[derive(Entity)]
/// #[genq(rename_all = "camelCase")]
/// struct Login {
///     login_id: i32,
///     user_name: Option<String>,
///     #[genq(column = "CREATED_ON")]
///     created: chrono::NaiveDate,
///     #[genq(transient)]
///     session: Session,
/// }
/// ```
///
/// # Generated
///
/// - `const FIELDS: &[FieldDescriptor]` - fields in declaration order
/// - `fn field_value(&self, name: &str) -> Value`
///
/// # Attributes
///
/// - `#[genq(rename_all = "...")]` - Property naming: `camelCase`, `PascalCase`,
///   `snake_case` or `SCREAMING_SNAKE_CASE` (default: the field name as written)
/// - `#[genq(rename = "name")]` - Property name for one field
/// - `#[genq(column = "NAME")]` - Explicit column name
/// - `#[genq(transient)]` - Never persisted; the field type needs no `SqlValue` impl
#[proc_macro_derive(Entity, attributes(genq))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
