//! Procedural macros for `syslog_render`.
//!
//! [`Record`] implements `syslog_render::Record` and `syslog_render::Render`
//! for structs with named fields. Field metadata is validated while the
//! macro expands and stored in a `static` table, so nothing is parsed when
//! a value renders.
//!
//! Field attributes, all under `#[syslog(...)]`:
//!
//! - `pos = <int>` renders the field as a positional argument. The index
//!   must fit in an `i8`; lower indices come first.
//! - `name = "<keyword>"` overrides the keyword derived from the field name.
//! - `omit_empty` leaves the field out when its value is empty.
//! - `flatten` splices the fields of a nested record in place.
//! - `skip` excludes the field entirely.
//!
//! The struct attribute `#[syslog(crate = "path")]` points generated code at
//! a renamed dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `syslog_render::Record`.
#[proc_macro_derive(Record, attributes(syslog))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
