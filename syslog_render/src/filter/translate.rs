//! Default translation of match expressions into syslog-ng filter nodes.

use super::{FilterTranslator, MatchExpr, RegexpMatch};
use crate::{FilterOp, RenderError, RenderNode};

/// Translates match expressions into `match()` calls joined by boolean
/// operators.
///
/// ```
/// use syslog_render::{FilterTranslator, MatchExpr, MatchExprTranslator, RegexpMatch, RenderNode};
///
/// let node = MatchExprTranslator.translate(&RegexpMatch::new("error").with_value("MSG").into());
/// assert_eq!(
///     node,
///     RenderNode::option_expr(
///         "match",
///         vec![
///             RenderNode::literal("error"),
///             RenderNode::option_expr("value", vec![RenderNode::literal("MSG")]),
///         ],
///     ),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchExprTranslator;

impl FilterTranslator for MatchExprTranslator {
    fn translate(&self, expr: &MatchExpr) -> RenderNode {
        match expr {
            MatchExpr::And(exprs) => self.combine(FilterOp::And, exprs),
            MatchExpr::Or(exprs) => self.combine(FilterOp::Or, exprs),
            MatchExpr::Not(inner) => RenderNode::FilterOp {
                op: FilterOp::Not,
                operands: vec![self.translate(inner)],
            },
            MatchExpr::Regexp(regexp) => match_call(regexp),
        }
    }
}

impl MatchExprTranslator {
    fn combine(self, op: FilterOp, exprs: &[MatchExpr]) -> RenderNode {
        if exprs.is_empty() {
            return RenderNode::error(RenderError::invalid_filter(format!(
                "`{}` needs at least one operand",
                op.as_str()
            )));
        }
        RenderNode::FilterOp {
            op,
            operands: exprs.iter().map(|expr| self.translate(expr)).collect(),
        }
    }
}

fn match_call(regexp: &RegexpMatch) -> RenderNode {
    if regexp.pattern.is_empty() {
        return RenderNode::error(RenderError::invalid_filter("regexp pattern is empty"));
    }
    let mut children = vec![RenderNode::literal(regexp.pattern.as_str())];
    let options = [
        ("value", regexp.value.as_deref()),
        ("template", regexp.template.as_deref()),
        ("type", regexp.match_type.as_deref()),
    ];
    children.extend(
        options
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .map(|(key, value)| RenderNode::option_expr(key, vec![RenderNode::literal(value)])),
    );
    if !regexp.flags.is_empty() {
        children.push(RenderNode::option_expr(
            "flags",
            regexp
                .flags
                .iter()
                .map(|flag| RenderNode::literal(flag.as_str()))
                .collect(),
        ));
    }
    RenderNode::option_expr("match", children)
}
