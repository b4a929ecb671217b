//! Unit tests for match expression translation.

use rstest::rstest;

use super::*;
use crate::{FilterOp, RenderError};

fn match_node(pattern: &str) -> RenderNode {
    RenderNode::option_expr("match", vec![RenderNode::literal(pattern)])
}

#[rstest]
fn translates_full_regexp() {
    let expr = MatchExpr::from(
        RegexpMatch::new("^nginx")
            .with_value("PROGRAM")
            .with_type("pcre")
            .with_flag("ignore-case")
            .with_flag("utf8"),
    );
    let expected = RenderNode::option_expr(
        "match",
        vec![
            RenderNode::literal("^nginx"),
            RenderNode::option_expr("value", vec![RenderNode::literal("PROGRAM")]),
            RenderNode::option_expr("type", vec![RenderNode::literal("pcre")]),
            RenderNode::option_expr(
                "flags",
                vec![RenderNode::literal("ignore-case"), RenderNode::literal("utf8")],
            ),
        ],
    );
    assert_eq!(MatchExprTranslator.translate(&expr), expected);
}

#[rstest]
fn translates_nested_boolean_logic() {
    let expr = MatchExpr::and(vec![
        RegexpMatch::new("a").into(),
        MatchExpr::not(MatchExpr::or(vec![
            RegexpMatch::new("b").into(),
            RegexpMatch::new("c").into(),
        ])),
    ]);
    let expected = RenderNode::FilterOp {
        op: FilterOp::And,
        operands: vec![
            match_node("a"),
            RenderNode::FilterOp {
                op: FilterOp::Not,
                operands: vec![RenderNode::FilterOp {
                    op: FilterOp::Or,
                    operands: vec![match_node("b"), match_node("c")],
                }],
            },
        ],
    };
    assert_eq!(MatchExprTranslator.translate(&expr), expected);
}

#[rstest]
#[case(MatchExpr::and(Vec::new()), "`and` needs at least one operand")]
#[case(MatchExpr::or(Vec::new()), "`or` needs at least one operand")]
#[case(RegexpMatch::new("").into(), "regexp pattern is empty")]
fn malformed_expressions_become_errors(#[case] expr: MatchExpr, #[case] reason: &str) {
    assert_eq!(
        MatchExprTranslator.translate(&expr),
        RenderNode::error(RenderError::invalid_filter(reason))
    );
}

#[rstest]
fn malformed_operand_does_not_hide_siblings() {
    let expr = MatchExpr::or(vec![RegexpMatch::new("").into(), RegexpMatch::new("ok").into()]);
    let node = MatchExprTranslator.translate(&expr);
    assert_eq!(node.errors().len(), 1);
    assert!(matches!(
        node,
        RenderNode::FilterOp { ref operands, .. } if operands.last() == Some(&match_node("ok"))
    ));
}

#[rstest]
fn empty_optional_parts_are_omitted() {
    let expr = MatchExpr::from(RegexpMatch::new("x").with_value(""));
    assert_eq!(MatchExprTranslator.translate(&expr), match_node("x"));
}
