//! Parsing of `#[syslog(...)]` attributes.
//!
//! Every setting is validated here so a malformed record fails to compile
//! instead of producing error nodes at render time.

use syn::Attribute;
use syn::meta::ParseNestedMeta;

mod input;
mod literals;

pub(crate) use input::{RecordField, RecordInput, parse_input};
use literals::{lit_i8, lit_str};

/// Struct-level attributes recognised by `#[derive(Record)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Record)]`.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub pos: Option<i8>,
    pub name: Option<String>,
    pub omit_empty: bool,
    pub flatten: bool,
    pub skip: bool,
}

/// Iterate all `#[syslog(...)]` attributes once and apply a callback.
fn parse_syslog<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("syslog")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown(meta: &ParseNestedMeta, allowed: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown syslog attribute `{key}`; expected {allowed}"))
}

/// Extracts `#[syslog(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_syslog(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            return Ok(());
        }
        Err(unknown(meta, "`crate`"))
    })?;
    Ok(out)
}

/// Parses field-level `#[syslog(...)]` attributes.
///
/// `flatten` and `skip` cannot be combined with the other settings.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_syslog(&field.attrs, |meta| {
        let Some(ident) = meta.path.get_ident() else {
            return Err(unknown(meta, "`pos`, `name`, `omit_empty`, `flatten` or `skip`"));
        };
        match ident.to_string().as_str() {
            "pos" => out.pos = Some(lit_i8(meta, "pos")?),
            "name" => {
                let s = lit_str(meta, "name")?;
                if s.value().is_empty() {
                    return Err(syn::Error::new(s.span(), "name must not be empty"));
                }
                out.name = Some(s.value());
            }
            "omit_empty" | "omitempty" => out.omit_empty = true,
            "flatten" => out.flatten = true,
            "skip" => out.skip = true,
            _ => {
                return Err(unknown(meta, "`pos`, `name`, `omit_empty`, `flatten` or `skip`"));
            }
        }
        Ok(())
    })?;
    let shaped = out.pos.is_some() || out.name.is_some() || out.omit_empty;
    if out.flatten && (shaped || out.skip) {
        return Err(syn::Error::new_spanned(
            field,
            "`flatten` cannot be combined with other syslog attributes",
        ));
    }
    if out.skip && shaped {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` cannot be combined with other syslog attributes",
        ));
    }
    Ok(out)
}
