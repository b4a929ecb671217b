//! Expansion of `#[derive(Record)]`.

mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and generates the `Record` and `Render` impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let record = parse::parse_input(input)?;
    Ok(generate::record_impls(&record))
}
