//! Entity derive macro implementation

mod attrs;

use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

use attrs::{get_field_attrs, get_struct_attrs};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity can only be derived for structs",
            ));
        }
    };

    let struct_attrs = get_struct_attrs(&input)?;

    let mut descriptors = Vec::new();
    let mut value_arms = Vec::new();
    let mut seen = HashSet::new();

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_ty = &field.ty;
        let attrs = get_field_attrs(field)?;

        let property = attrs
            .rename
            .clone()
            .unwrap_or_else(|| struct_attrs.rename_all.apply(&field_ident.unraw().to_string()));
        if !seen.insert(property.clone()) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate property name '{property}'"),
            ));
        }

        let column = match &attrs.column {
            Some(c) => quote! { ::core::option::Option::Some(#c) },
            None => quote! { ::core::option::Option::None },
        };

        if attrs.transient {
            descriptors.push(quote! {
                genq::FieldDescriptor {
                    name: #property,
                    column: #column,
                    kind: genq::ValueKind::Other,
                    transient: true,
                }
            });
            continue;
        }

        descriptors.push(quote! {
            genq::FieldDescriptor {
                name: #property,
                column: #column,
                kind: <#field_ty as genq::SqlValue>::KIND,
                transient: false,
            }
        });
        value_arms.push(quote! {
            #property => genq::SqlValue::to_value(&self.#field_ident)
        });
    }

    Ok(quote! {
        impl #impl_generics genq::Entity for #name #ty_generics #where_clause {
            const FIELDS: &'static [genq::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn field_value(&self, name: &str) -> genq::Value {
                match name {
                    #(#value_arms,)*
                    _ => genq::Value::Null,
                }
            }
        }
    })
}
