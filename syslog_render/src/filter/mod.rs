//! Match expressions and their translation into filter nodes.
//!
//! The renderer treats a [`MatchExpr`] as opaque and hands it to a
//! [`FilterTranslator`]. [`MatchExprTranslator`] is the default.

mod translate;
#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::{Render, RenderNode, ValueKind};

pub use translate::MatchExprTranslator;

/// Boolean filter logic over log messages.
///
/// Serialized externally tagged, matching the custom-resource shape:
///
/// ```
/// use syslog_render::MatchExpr;
///
/// let expr: MatchExpr = serde_json::from_str(
///     r#"{"not": {"regexp": {"pattern": "debug", "value": "MSG"}}}"#,
/// )?;
/// assert!(matches!(expr, MatchExpr::Not(_)));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MatchExpr {
    /// Every sub-expression must match.
    And(Vec<MatchExpr>),
    /// At least one sub-expression must match.
    Or(Vec<MatchExpr>),
    /// The sub-expression must not match.
    Not(Box<MatchExpr>),
    /// A pattern match against a message field or template.
    Regexp(RegexpMatch),
}

impl MatchExpr {
    /// Conjunction of `exprs`.
    #[must_use]
    pub const fn and(exprs: Vec<Self>) -> Self {
        Self::And(exprs)
    }

    /// Disjunction of `exprs`.
    #[must_use]
    pub const fn or(exprs: Vec<Self>) -> Self {
        Self::Or(exprs)
    }

    /// Negation of `expr`.
    #[must_use]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }
}

impl From<RegexpMatch> for MatchExpr {
    fn from(regexp: RegexpMatch) -> Self {
        Self::Regexp(regexp)
    }
}

impl Render for MatchExpr {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Match(self)
    }
}

/// Parameters of a `match()` filter function.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegexpMatch {
    /// Pattern to match.
    pub pattern: String,
    /// Name-value pair to match against, such as `MSG` or `HOST`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Template expression to match against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Pattern type: `pcre`, `string`, or `glob`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    /// Pattern flags such as `ignore-case`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
}

impl RegexpMatch {
    /// A match for `pattern` against the whole message.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Matches against the name-value pair `value`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Matches against a template instead of a name-value pair.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the pattern type.
    #[must_use]
    pub fn with_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = Some(match_type.into());
        self
    }

    /// Adds a pattern flag.
    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }
}

/// Converts match expressions into filter subtrees.
///
/// Implementations must be deterministic and must report malformed
/// expressions as [`RenderNode::Error`] rather than panicking.
pub trait FilterTranslator {
    /// Translates `expr` into a filter subtree.
    fn translate(&self, expr: &MatchExpr) -> RenderNode;
}

impl<F> FilterTranslator for F
where
    F: Fn(&MatchExpr) -> RenderNode,
{
    fn translate(&self, expr: &MatchExpr) -> RenderNode {
        self(expr)
    }
}
