//! # genq
//!
//! SQL fragment synthesis for mapper-style persistence layers.
//!
//! genq renders SELECT / INSERT / DELETE statement text with `#{name}` and
//! `#{name,jdbcType=TAG}` named placeholders. A downstream mapper binds and
//! executes them. genq never executes anything.
//!
//! ## Features
//!
//! - **Naming convention**: property identifiers become `UPPER_SNAKE_CASE` columns
//! - **Type inference**: JDBC tags inferred from declared or runtime value kinds
//! - **Entities without reflection**: `#[derive(Entity)]` declares persisted fields
//! - **Pure**: the caller's values are never mutated; coerced values are returned
//!
//! ```ignore
//! use genq::{Entity, Synthesizer, TypedInsertOptions, value_map};
//!
//! let synth = Synthesizer::new();
//!
//! // DELETE FROM users WHERE USER_ID=#{userId}
//! let sql = synth.delete_by_id("users", "userId")?;
//!
//! // SELECT NOW(1 , 2 ) FROM DUAL
//! let sql = synth.function_call("NOW", &["1", "2"])?;
//!
//! #[derive(Entity)]
//! #[genq(rename_all = "camelCase")]
//! struct Login {
//!     login_id: i32,
//!     #[genq(transient)]
//!     password: String,
//! }
//!
//! // INSERT INTO LOGINS (LOGIN_ID) VALUES (#{loginId,jdbcType=INTEGER})
//! let sql = synth.insert_entity("LOGINS", &login)?;
//!
//! let values = value_map! { "birthDate" => "2020-01-15" };
//! let options = TypedInsertOptions::new().override_type("birthDate", "DATE");
//! let out = synth.insert_from_typed_map("PEOPLE", &values, &options)?;
//! // out.values["birthDate"] is now a date
//! # Ok::<(), genq::GenqError>(())
//! ```

extern crate self as genq;

pub mod builder;
pub mod config;
pub mod entity;
pub mod error;
pub mod ident;
pub mod jdbc;
pub mod naming;
pub mod synth;
pub mod value;

pub use builder::{DeleteBuilder, InsertBuilder, SelectBuilder, SqlBuilder};
pub use config::{DEFAULT_DATE_FORMAT, SynthConfig};
pub use entity::{Entity, FieldDescriptor};
pub use error::{GenqError, GenqResult};
pub use ident::Ident;
pub use jdbc::{JdbcType, TypeMapping, placeholder, typed_placeholder};
pub use naming::{ColumnNaming, upper_snake};
pub use synth::{
    ALL_COLUMNS, ColumnSpec, Synthesizer, TypedInsert, TypedInsertOptions, equal_condition,
    parse_date,
};
pub use value::{
    NULL_LITERAL, SqlValue, Value, ValueKind, ValueMap, value_map_from_json,
    value_map_from_json_str,
};

#[cfg(feature = "derive")]
pub use genq_derive::Entity;
