//! SQL identifier validation.
//!
//! Table, column and function names are rendered verbatim, so every name that
//! reaches a fragment goes through [`Ident::parse`] first. Empty or malformed
//! names fail fast instead of producing broken SQL text.
//!
//! - Unquoted parts are validated against: `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL and escape `"` as `""`
//! - Parts are joined with `.` (`schema.table`, `pkg.function`)

use crate::error::{GenqError, GenqResult};

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Unquoted(String),
    /// Quoted identifier: allows any characters except NUL.
    Quoted(String),
}

/// A validated SQL identifier (table, column, or function name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier string, supporting dotted and quoted forms.
    ///
    /// - Dotted: `schema.table`
    /// - Quoted: `"CamelCase"."UserTable"`
    /// - Mixed: `public."UserTable"`
    pub fn parse(s: &str) -> GenqResult<Self> {
        if s.is_empty() {
            return Err(GenqError::validation("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(GenqError::validation(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') => {
                        if chars.peek().is_none() {
                            return Err(GenqError::validation(format!(
                                "Trailing '.' in identifier '{s}'"
                            )));
                        }
                    }
                    Some(c) => {
                        return Err(GenqError::validation(format!(
                            "Expected '.' between identifier parts of '{s}', got '{c}'"
                        )));
                    }
                    None => break,
                }
            }

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('"') => {
                            // "" is an escaped quote
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                name.push('"');
                            } else {
                                break;
                            }
                        }
                        Some(c) => name.push(c),
                        None => {
                            return Err(GenqError::validation(format!(
                                "Unclosed quoted identifier in '{s}'"
                            )));
                        }
                    }
                }
                if name.is_empty() {
                    return Err(GenqError::validation("Empty quoted identifier"));
                }
                parts.push(IdentPart::Quoted(name));
                continue;
            }

            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let ok = if name.is_empty() {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !ok {
                    return Err(GenqError::validation(format!(
                        "Invalid character '{c}' in identifier '{s}'"
                    )));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(GenqError::validation(format!(
                    "Empty identifier segment in '{s}'"
                )));
            }
            parts.push(IdentPart::Unquoted(name));
        }

        Ok(Self { parts })
    }
}

/// Validate `name` as an identifier, naming the offending input in the error.
pub(crate) fn check(name: &str, what: &str) -> GenqResult<()> {
    Ident::parse(name)
        .map(|_| ())
        .map_err(|e| match e {
            GenqError::Validation(msg) => GenqError::validation(format!("{what}: {msg}")),
            other => other,
        })
}

/// Validate that free-form SQL text (projections, raw values) is not blank.
pub(crate) fn check_not_blank(text: &str, what: &str) -> GenqResult<()> {
    if text.trim().is_empty() {
        return Err(GenqError::validation(format!("{what} cannot be empty")));
    }
    Ok(())
}
