//! Conversion from field identifiers to syslog-ng option keywords.

use heck::ToKebabCase;

/// Converts an identifier into the keyword spelling used by syslog-ng.
///
/// Every run of uppercase letters starts a new lowercase word and words are
/// joined with hyphens. Snake-case identifiers convert the same way.
///
/// # Examples
///
/// ```
/// use syslog_render::to_syntax_key;
///
/// assert_eq!(to_syntax_key("TimeReopen"), "time-reopen");
/// assert_eq!(to_syntax_key("URL"), "url");
/// assert_eq!(to_syntax_key("log_fifo_size"), "log-fifo-size");
/// ```
#[must_use]
pub fn to_syntax_key(identifier: &str) -> String {
    identifier.to_kebab_case()
}
