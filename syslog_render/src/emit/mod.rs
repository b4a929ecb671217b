//! Reference emission stage turning node trees into configuration text.
//!
//! Emission starts by collecting every error node in the tree, along with any
//! NaN or infinite float literal, which the daemon cannot parse. If there are
//! any, they are returned together and no text is produced.

pub mod escape;

use crate::{AggregatedErrors, EmitSettings, FilterOp, RenderError, RenderNode, RenderSettings, Scalar};

use escape::format_scalar;

/// Writes node trees as syslog-ng configuration text.
///
/// # Examples
///
/// ```
/// use syslog_render::{EmitSettings, Emitter, RenderNode};
///
/// let statement = RenderNode::paren_def_stmt(
///     "loki",
///     vec![RenderNode::space_separated(vec![
///         RenderNode::option_expr("url", vec![RenderNode::literal("http://loki:3100")]),
///         RenderNode::option_expr("workers", vec![RenderNode::literal(2_u32)]),
///     ])],
/// );
/// let compact = Emitter::new(EmitSettings { indent: 4, pretty: false });
/// assert_eq!(
///     compact.emit(&[statement])?,
///     r#"loki(url("http://loki:3100") workers(2))"#,
/// );
/// # Ok::<(), syslog_render::AggregatedErrors>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    settings: EmitSettings,
}

impl Emitter {
    /// An emitter using `settings`.
    #[must_use]
    pub const fn new(settings: EmitSettings) -> Self {
        Self { settings }
    }

    /// An emitter using the emission part of `settings`.
    #[must_use]
    pub const fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(settings.emit)
    }

    /// Emits `nodes` as text.
    ///
    /// Statements are separated by newlines and other top-level nodes by
    /// single spaces.
    ///
    /// # Errors
    ///
    /// Returns every [`RenderError`] embedded in `nodes`, in tree order, when
    /// there is at least one. Non-finite float literals are reported as
    /// [`RenderError::NonFiniteNumber`] in the same pass.
    pub fn emit(&self, nodes: &[RenderNode]) -> Result<String, AggregatedErrors> {
        let mut problems = Vec::new();
        for node in nodes {
            collect_problems(node, &mut problems);
        }
        if !problems.is_empty() {
            return Err(AggregatedErrors::new(problems));
        }
        let mut out = String::new();
        let mut previous: Option<&RenderNode> = None;
        for node in nodes {
            if let Some(prev) = previous {
                out.push(if is_statement(prev) || is_statement(node) {
                    '\n'
                } else {
                    ' '
                });
            }
            self.write_node(node, 0, &mut out);
            previous = Some(node);
        }
        Ok(out)
    }

    fn write_node(&self, node: &RenderNode, depth: usize, out: &mut String) {
        match node {
            RenderNode::Literal(scalar) => out.push_str(&format_scalar(scalar)),
            // Errors were collected before writing started.
            RenderNode::Error(_) => {}
            RenderNode::OptionExpr { key, children } => {
                out.push_str(key);
                out.push('(');
                self.write_separated(children, depth, out);
                out.push(')');
            }
            RenderNode::SpaceSeparated(children) => self.write_separated(children, depth, out),
            RenderNode::ParenDefStmt { name, children } => {
                out.push_str(name);
                out.push('(');
                self.write_body(children, depth, out);
                out.push(')');
            }
            RenderNode::FilterExpr(subtree) => self.write_node(subtree, depth, out),
            RenderNode::FilterOp { op, operands } => self.write_filter_op(*op, operands, depth, out),
        }
    }

    fn write_separated(&self, nodes: &[RenderNode], depth: usize, out: &mut String) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            self.write_node(node, depth, out);
        }
    }

    fn write_body(&self, children: &[RenderNode], depth: usize, out: &mut String) {
        let items = body_items(children);
        if !self.settings.pretty || items.is_empty() {
            self.write_separated_refs(&items, depth, out);
            return;
        }
        out.push('\n');
        for item in items {
            push_indent(out, self.settings.indent, depth + 1);
            self.write_node(item, depth + 1, out);
            out.push('\n');
        }
        push_indent(out, self.settings.indent, depth);
    }

    fn write_separated_refs(&self, nodes: &[&RenderNode], depth: usize, out: &mut String) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            self.write_node(node, depth, out);
        }
    }

    fn write_filter_op(&self, op: FilterOp, operands: &[RenderNode], depth: usize, out: &mut String) {
        if op == FilterOp::Not {
            out.push_str("not ");
            self.write_separated(operands, depth, out);
            return;
        }
        out.push('(');
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(op.as_str());
                out.push(' ');
            }
            self.write_node(operand, depth, out);
        }
        out.push(')');
    }
}

/// Errors and unwritable literals under `node`, in pre-order.
fn collect_problems(node: &RenderNode, out: &mut Vec<RenderError>) {
    match node {
        RenderNode::Error(err) => out.push(err.clone()),
        RenderNode::Literal(scalar) if !scalar.is_finite() => {
            out.push(RenderError::NonFiniteNumber {
                value: non_finite_text(scalar),
            });
        }
        _ => {}
    }
    for child in node.children() {
        collect_problems(child, out);
    }
}

fn non_finite_text(scalar: &Scalar) -> String {
    match scalar {
        Scalar::F32(n) => n.to_string(),
        Scalar::F64(n) => n.to_string(),
        other => format!("{other:?}"),
    }
}

/// Statement body items, with space-separated groups expanded in place.
fn body_items(children: &[RenderNode]) -> Vec<&RenderNode> {
    children
        .iter()
        .flat_map(|child| match child {
            RenderNode::SpaceSeparated(inner) => inner.iter().collect::<Vec<_>>(),
            other => vec![other],
        })
        .collect()
}

const fn is_statement(node: &RenderNode) -> bool {
    matches!(node, RenderNode::ParenDefStmt { .. })
}

fn push_indent(out: &mut String, width: usize, depth: usize) {
    out.extend(std::iter::repeat_n(' ', width * depth));
}
