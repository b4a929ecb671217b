//! Builders and queries for render trees.

use syslog_render::{RenderError, RenderNode, Scalar, collect_errors};

/// Shorthand for [`RenderNode::literal`].
#[must_use]
pub fn lit(value: impl Into<Scalar>) -> RenderNode {
    RenderNode::literal(value)
}

/// Shorthand for [`RenderNode::option_expr`].
#[must_use]
pub fn opt(key: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::option_expr(key, children)
}

/// A driver statement `name(children...)` as built by the renderer.
#[must_use]
pub fn driver(name: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::paren_def_stmt(name, vec![RenderNode::space_separated(children)])
}

/// Owned copies of every error embedded in `nodes`.
#[must_use]
pub fn errors(nodes: &[RenderNode]) -> Vec<RenderError> {
    collect_errors(nodes).into_iter().cloned().collect()
}

/// Keys of the top-level option expressions in `nodes`, in order.
#[must_use]
pub fn option_keys(nodes: &[RenderNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|node| match node {
            RenderNode::OptionExpr { key, .. } => Some(key.as_str()),
            _ => None,
        })
        .collect()
}
