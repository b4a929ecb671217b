//! Typed value categories understood by the renderer.
//!
//! Instead of open-ended reflection, every renderable type reports a
//! [`ValueKind`] drawn from a closed set of categories. Records implement
//! [`crate::Record`] (usually via `#[derive(Record)]`) and report
//! [`ValueKind::Record`]; domain types can bypass the generic traversal
//! entirely by reporting [`ValueKind::Nodes`].
//!
//! ```
//! use syslog_render::{Render, RenderNode, Scalar, ValueKind};
//!
//! struct Port(u16);
//!
//! impl Render for Port {
//!     fn kind(&self) -> ValueKind<'_> {
//!         ValueKind::Nodes(vec![RenderNode::option_expr(
//!             "port",
//!             vec![RenderNode::Literal(Scalar::U16(self.0))],
//!         )])
//!     }
//! }
//! ```

mod dynamic;
mod impls;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::{MatchExpr, Record, RenderNode, Scalar, SecretRef};

/// Category of a value, as seen by the renderer.
#[non_exhaustive]
pub enum ValueKind<'a> {
    /// A primitive value rendered as a literal.
    Scalar(Scalar),
    /// A secret reference resolved at render time.
    Secret(&'a SecretRef),
    /// An optional value; `None` renders as nothing.
    Indirect(Option<&'a dyn Render>),
    /// A filter expression handed to the filter translator.
    Match(&'a MatchExpr),
    /// An ordered sequence whose elements render one after the other.
    Sequence(Vec<&'a dyn Render>),
    /// Key/value entries rendered as option expressions.
    Mapping(Vec<(MapKey<'a>, &'a dyn Render)>),
    /// A structured record introspected field by field.
    Record(&'a dyn Record),
    /// Pre-rendered nodes supplied by the value itself.
    Nodes(Vec<RenderNode>),
    /// A value the target syntax cannot express.
    Unsupported(&'static str),
}

/// A value that can be rendered into syslog-ng syntax.
pub trait Render {
    /// Reports the category of this value.
    fn kind(&self) -> ValueKind<'_>;

    /// Whether the value counts as empty for `omit_empty` fields.
    fn is_empty_value(&self) -> bool {
        false
    }
}

/// Classification of a mapping key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey<'a> {
    /// A string-typed key, used as the option keyword.
    Str(Cow<'a, str>),
    /// A key of another type, identified by its type name.
    Other(&'static str),
}

/// Map key types accepted by the mapping impls.
pub trait RenderKey {
    /// Classifies this key.
    fn render_key(&self) -> MapKey<'_>;
}

pub(crate) fn sequence_of<'a, T, I>(items: I) -> ValueKind<'a>
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ValueKind::Sequence(items.into_iter().map(|item| item as &dyn Render).collect())
}

pub(crate) fn mapping_of<'a, K, V, I>(entries: I) -> ValueKind<'a>
where
    K: RenderKey + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    ValueKind::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.render_key(), value as &dyn Render))
            .collect(),
    )
}
