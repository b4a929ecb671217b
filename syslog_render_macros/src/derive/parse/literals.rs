//! Literal parsing helpers for derive attributes.

use syn::meta::ParseNestedMeta;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Parses a string literal from `key = "..."`.
pub(super) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Parses a possibly negative integer literal that fits in an `i8`.
///
/// Both `pos = 1` and `pos = "1"` are accepted.
pub(super) fn lit_i8(meta: &ParseNestedMeta, key: &str) -> syn::Result<i8> {
    let expr = meta.value()?.parse::<Expr>()?;
    let invalid = |span| syn::Error::new(span, format!("{key} must be an integer between -128 and 127"));
    match &expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse::<i8>().map_err(|_| invalid(int.span())),
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => s.value().parse::<i8>().map_err(|_| invalid(s.span())),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => format!("-{}", int.base10_digits())
                .parse::<i8>()
                .map_err(|_| invalid(int.span())),
            _ => Err(syn::Error::new_spanned(&expr, format!("{key} must be an integer"))),
        },
        _ => Err(syn::Error::new_spanned(&expr, format!("{key} must be an integer"))),
    }
}
