//! String quoting and scalar formatting for syslog-ng syntax.

use crate::Scalar;

/// Wraps `text` in double quotes, escaping characters the parser treats
/// specially inside quoted strings.
///
/// Handles:
/// - Backslashes: `\` -> `\\`
/// - Double quotes: `"` -> `\"`
/// - Line breaks and tabs: `\n`, `\r`, `\t`
///
/// # Examples
///
/// ```
/// use syslog_render::emit::escape::quote;
///
/// assert_eq!(quote("plain"), "\"plain\"");
/// assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
/// assert_eq!(quote("C:\\logs"), "\"C:\\\\logs\"");
/// ```
#[must_use]
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

/// Formats a scalar as it appears in configuration text.
///
/// Strings are quoted, booleans become `yes`/`no`, and numbers use their
/// decimal form.
///
/// # Examples
///
/// ```
/// use syslog_render::Scalar;
/// use syslog_render::emit::escape::format_scalar;
///
/// assert_eq!(format_scalar(&Scalar::Bool(true)), "yes");
/// assert_eq!(format_scalar(&Scalar::I32(-5)), "-5");
/// assert_eq!(format_scalar(&Scalar::Str("x".into())), "\"x\"");
/// ```
#[must_use]
pub fn format_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Bool(true) => "yes".to_owned(),
        Scalar::Bool(false) => "no".to_owned(),
        Scalar::Str(text) => quote(text),
        Scalar::I8(n) => n.to_string(),
        Scalar::I16(n) => n.to_string(),
        Scalar::I32(n) => n.to_string(),
        Scalar::I64(n) => n.to_string(),
        Scalar::Isize(n) => n.to_string(),
        Scalar::U8(n) => n.to_string(),
        Scalar::U16(n) => n.to_string(),
        Scalar::U32(n) => n.to_string(),
        Scalar::U64(n) => n.to_string(),
        Scalar::Usize(n) => n.to_string(),
        Scalar::F32(n) => n.to_string(),
        Scalar::F64(n) => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "\"\"")]
    #[case("line\nbreak", "\"line\\nbreak\"")]
    #[case("tab\there", "\"tab\\there\"")]
    #[case("${HOST}", "\"${HOST}\"")]
    fn quotes_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote(input), expected);
    }

    #[rstest]
    #[case(Scalar::Bool(false), "no")]
    #[case(Scalar::U64(u64::MAX), "18446744073709551615")]
    #[case(Scalar::F64(1.5), "1.5")]
    #[case(Scalar::I8(-128), "-128")]
    fn formats_scalars(#[case] scalar: Scalar, #[case] expected: &str) {
        assert_eq!(format_scalar(&scalar), expected);
    }
}
