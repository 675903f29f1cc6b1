//! Attribute parsing for the Entity derive macro.
//!
//! Handles struct-level and field-level `#[genq(...)]` attributes.

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::Span;
use syn::Result;

use crate::sql_ident::parse_sql_ident;

/// Property naming applied to field identifiers.
#[derive(Clone, Copy, Default)]
pub(super) enum RenameAll {
    #[default]
    AsWritten,
    CamelCase,
    PascalCase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameAll {
    fn parse(value: &str, span: Span) -> Result<Self> {
        match value {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            other => Err(syn::Error::new(
                span,
                format!(
                    "unsupported rename_all '{other}' (expected camelCase, PascalCase, snake_case or SCREAMING_SNAKE_CASE)"
                ),
            )),
        }
    }

    pub(super) fn apply(self, field: &str) -> String {
        match self {
            Self::AsWritten => field.to_string(),
            Self::CamelCase => field.to_lower_camel_case(),
            Self::PascalCase => field.to_upper_camel_case(),
            Self::SnakeCase => field.to_snake_case(),
            Self::ScreamingSnakeCase => field.to_shouty_snake_case(),
        }
    }
}

#[derive(Default)]
pub(super) struct StructAttrs {
    pub(super) rename_all: RenameAll,
}

#[derive(Default)]
pub(super) struct FieldAttrs {
    pub(super) transient: bool,
    pub(super) rename: Option<String>,
    pub(super) column: Option<String>,
}

impl syn::parse::Parse for StructAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = StructAttrs::default();

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let _: syn::Token![=] = input.parse()?;
            let value: syn::LitStr = input.parse()?;

            match ident.to_string().as_str() {
                "rename_all" => {
                    attrs.rename_all = RenameAll::parse(&value.value(), value.span())?;
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown struct attribute '{other}'"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attrs)
    }
}

impl syn::parse::Parse for FieldAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = FieldAttrs::default();

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let key = ident.to_string();

            if input.peek(syn::Token![=]) {
                let _: syn::Token![=] = input.parse()?;
                let value: syn::LitStr = input.parse()?;
                match key.as_str() {
                    "rename" => {
                        attrs.rename = Some(parse_sql_ident(&value.value(), value.span(), "rename")?);
                    }
                    "column" => {
                        attrs.column = Some(parse_sql_ident(&value.value(), value.span(), "column")?);
                    }
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown field attribute '{other}'"),
                        ));
                    }
                }
            } else {
                match key.as_str() {
                    "transient" => attrs.transient = true,
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown field attribute '{other}'"),
                        ));
                    }
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attrs)
    }
}

pub(super) fn get_struct_attrs(input: &syn::DeriveInput) -> Result<StructAttrs> {
    let mut merged = StructAttrs::default();
    for attr in &input.attrs {
        if attr.path().is_ident("genq") {
            let parsed: StructAttrs = attr.parse_args()?;
            merged.rename_all = parsed.rename_all;
        }
    }
    Ok(merged)
}

pub(super) fn get_field_attrs(field: &syn::Field) -> Result<FieldAttrs> {
    let mut merged = FieldAttrs::default();
    for attr in &field.attrs {
        if attr.path().is_ident("genq") {
            let parsed: FieldAttrs = attr.parse_args()?;
            merged.transient |= parsed.transient;
            if parsed.rename.is_some() {
                merged.rename = parsed.rename;
            }
            if parsed.column.is_some() {
                merged.column = parsed.column;
            }
        }
    }
    Ok(merged)
}
