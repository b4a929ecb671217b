//! Token generation for the `Record` and `Render` impls.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{WherePredicate, parse_quote};

use super::parse::{RecordField, RecordInput};

/// Generates both trait impls for `record`.
pub(crate) fn record_impls(record: &RecordInput) -> TokenStream {
    let krate = crate_prefix(record.struct_attrs.crate_path.as_ref());
    let ident = &record.ident;
    let type_name = ident.to_string();
    let mut generics = record.generics.clone();
    let bounds = field_bounds(record, &krate);
    if !bounds.is_empty() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let body = fields_body(&record.fields, &krate);

    quote! {
        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<#krate::Field<'_>> {
                #body
            }
        }

        impl #impl_generics #krate::Render for #ident #ty_generics #where_clause {
            fn kind(&self) -> #krate::ValueKind<'_> {
                #krate::ValueKind::Record(self)
            }
        }
    }
}

/// Path that generated code uses to reach the runtime crate.
///
/// `#[syslog(crate = "...")]` replaces the default for crates that depend
/// on `syslog_render` under another name or re-export it.
fn crate_prefix(custom: Option<&syn::Path>) -> TokenStream {
    custom.map_or_else(|| quote! { ::syslog_render }, |path| quote! { #path })
}

/// Trait bounds on field types, needed only when the struct is generic.
fn field_bounds(record: &RecordInput, krate: &TokenStream) -> Vec<WherePredicate> {
    if record.generics.type_params().next().is_none() {
        return Vec::new();
    }
    record
        .fields
        .iter()
        .filter(|field| !field.attrs.skip)
        .map(|field| {
            let ty = &field.ty;
            if field.attrs.flatten {
                parse_quote! { #ty: #krate::Record }
            } else {
                parse_quote! { #ty: #krate::Render }
            }
        })
        .collect()
}

/// Body of `Record::fields`: a `static` metadata table and the field list.
fn fields_body(fields: &[RecordField], krate: &TokenStream) -> TokenStream {
    let plain: Vec<&RecordField> = fields
        .iter()
        .filter(|field| !field.attrs.skip && !field.attrs.flatten)
        .collect();
    let active = fields.iter().filter(|field| !field.attrs.skip).count();
    if active == 0 {
        return quote! { ::std::vec::Vec::new() };
    }

    let metas = plain.iter().map(|field| meta_tokens(field, krate));
    let meta_idents: Vec<_> = (0..plain.len()).map(|i| format_ident!("__meta_{}", i)).collect();
    let count = plain.len();
    let table = if count == 0 {
        quote! {}
    } else {
        quote! {
            static META: [#krate::FieldMeta; #count] = [ #( #metas ),* ];
            let [ #( #meta_idents ),* ] = &META;
        }
    };

    let mut next_meta = meta_idents.iter();
    let pushes: Vec<_> = fields
        .iter()
        .filter(|field| !field.attrs.skip)
        .filter_map(|field| {
            let member = &field.ident;
            if field.attrs.flatten {
                return Some(quote! {
                    fields.extend(#krate::Record::fields(&self.#member));
                });
            }
            next_meta.next().map(|meta| {
                quote! {
                    fields.push(#krate::Field::new(#meta, &self.#member));
                }
            })
        })
        .collect();

    quote! {
        #table
        let mut fields = ::std::vec::Vec::with_capacity(#count);
        #( #pushes )*
        fields
    }
}

fn meta_tokens(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let ident = field.name();
    let name = field.attrs.name.as_ref().map_or_else(
        || quote! { ::core::option::Option::None },
        |value| quote! { ::core::option::Option::Some(#value) },
    );
    let pos = field.attrs.pos.map_or_else(
        || quote! { ::core::option::Option::None },
        |value| quote! { ::core::option::Option::Some(#value) },
    );
    let omit_empty = field.attrs.omit_empty;
    quote! { #krate::FieldMeta::new(#ident, #name, #pos, #omit_empty) }
}
