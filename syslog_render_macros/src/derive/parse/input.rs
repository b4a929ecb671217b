//! Input parsing for the `Record` derive macro.
//!
//! Gathers the struct identifier, generics, fields, and attribute metadata
//! in one pass so expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field with its parsed attributes.
pub(crate) struct RecordField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
}

impl RecordField {
    /// Field name as written, without any raw identifier prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Everything the generator needs from the derive input.
pub(crate) struct RecordInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<RecordField>,
}

/// Validates the derive input and collects its fields.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<RecordInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Record requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Record requires named fields"));
        };
        fields.push(RecordField {
            ident,
            ty: field.ty.clone(),
            attrs: parse_field_attrs(field)?,
        });
    }
    Ok(RecordInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}
