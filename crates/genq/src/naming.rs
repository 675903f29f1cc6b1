//! Property name → column name conversion.

use heck::ToShoutySnakeCase;
use serde::{Deserialize, Serialize};

/// How a property identifier becomes a SQL column name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnNaming {
    /// A word starts at every uppercase ASCII letter after the first character:
    /// `userId` → `USER_ID`, `userID` → `USER_I_D`, `HTTPCode` → `H_T_T_P_CODE`.
    ///
    /// This is the convention of existing schemas, so it is the default.
    #[default]
    UpperSnake,
    /// heck's word splitting, which keeps acronym runs together:
    /// `userID` → `USER_ID`, `HTTPCode` → `HTTP_CODE`, `user_id` → `USER_ID`.
    ShoutySnake,
    /// Use the property name unchanged.
    Verbatim,
}

impl ColumnNaming {
    pub fn column_name(self, property: &str) -> String {
        match self {
            ColumnNaming::UpperSnake => upper_snake(property),
            ColumnNaming::ShoutySnake => property.to_shouty_snake_case(),
            ColumnNaming::Verbatim => property.to_string(),
        }
    }
}

/// `userId` → `USER_ID`, `documentURL` → `DOCUMENT_U_R_L`
///
/// Only ASCII letters are case-mapped; other characters pass through.
pub fn upper_snake(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for (i, c) in property.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}
