//! Intermediate output tree produced by the renderer.
//!
//! Nodes are plain data. Each render call builds a fresh tree which the
//! emission stage consumes once.

use crate::RenderError;

/// A primitive value carried by a [`RenderNode::Literal`].
///
/// Integer and float widths are kept exactly as they appeared in the input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Scalar {
    /// Boolean flag.
    Bool(bool),
    /// Text value.
    Str(String),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Pointer-sized signed integer.
    Isize(isize),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// Pointer-sized unsigned integer.
    Usize(usize),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

scalar_from!(
    bool => Bool,
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl Scalar {
    /// Returns `false` for NaN and infinite floats.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        match self {
            Self::F32(n) => n.is_finite(),
            Self::F64(n) => n.is_finite(),
            _ => true,
        }
    }
}

/// Boolean operators used inside filter subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// All operands must match.
    And,
    /// Any operand may match.
    Or,
    /// Negates its single operand.
    Not,
}

impl FilterOp {
    /// Keyword spelling in the target syntax.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        }
    }
}

/// One unit of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RenderNode {
    /// A scalar value.
    Literal(Scalar),
    /// A failure captured in place of the value that caused it.
    Error(RenderError),
    /// A keyword argument: `key(children...)`.
    OptionExpr {
        /// Keyword spelling of the option.
        key: String,
        /// Rendered argument values.
        children: Vec<RenderNode>,
    },
    /// A named, parenthesised statement such as a destination driver.
    ParenDefStmt {
        /// Statement name.
        name: String,
        /// Statement body.
        children: Vec<RenderNode>,
    },
    /// Children emitted one after the other with a single space between.
    SpaceSeparated(Vec<RenderNode>),
    /// A translated filter expression.
    FilterExpr(Box<RenderNode>),
    /// Boolean combination of filter subtrees.
    FilterOp {
        /// Operator joining the operands.
        op: FilterOp,
        /// Operand subtrees.
        operands: Vec<RenderNode>,
    },
}

impl RenderNode {
    /// Builds a [`RenderNode::Literal`].
    #[must_use]
    pub fn literal(value: impl Into<Scalar>) -> Self {
        Self::Literal(value.into())
    }

    /// Builds a [`RenderNode::OptionExpr`].
    #[must_use]
    pub fn option_expr(key: impl Into<String>, children: Vec<Self>) -> Self {
        Self::OptionExpr {
            key: key.into(),
            children,
        }
    }

    /// Builds a [`RenderNode::ParenDefStmt`].
    #[must_use]
    pub fn paren_def_stmt(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self::ParenDefStmt {
            name: name.into(),
            children,
        }
    }

    /// Builds a [`RenderNode::SpaceSeparated`].
    #[must_use]
    pub const fn space_separated(children: Vec<Self>) -> Self {
        Self::SpaceSeparated(children)
    }

    /// Builds a [`RenderNode::FilterExpr`].
    #[must_use]
    pub fn filter_expr(subtree: Self) -> Self {
        Self::FilterExpr(Box::new(subtree))
    }

    /// Builds a [`RenderNode::Error`].
    #[must_use]
    pub const fn error(err: RenderError) -> Self {
        Self::Error(err)
    }

    /// Returns `true` for [`RenderNode::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Every error embedded in this node, in depth-first pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use syslog_render::{RenderError, RenderNode};
    ///
    /// let node = RenderNode::option_expr(
    ///     "token",
    ///     vec![RenderNode::error(RenderError::unsupported("()"))],
    /// );
    /// assert_eq!(node.errors().len(), 1);
    /// ```
    #[must_use]
    pub fn errors(&self) -> Vec<&RenderError> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    /// Direct children of this node. Literals and errors have none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Literal(_) | Self::Error(_) => &[],
            Self::OptionExpr { children, .. }
            | Self::ParenDefStmt { children, .. }
            | Self::SpaceSeparated(children)
            | Self::FilterOp {
                operands: children, ..
            } => children,
            Self::FilterExpr(subtree) => std::slice::from_ref(subtree.as_ref()),
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a RenderError>) {
        if let Self::Error(err) = self {
            out.push(err);
        }
        for child in self.children() {
            child.collect_into(out);
        }
    }
}

/// Every error embedded in `nodes`, in depth-first pre-order.
#[must_use]
pub fn collect_errors(nodes: &[RenderNode]) -> Vec<&RenderError> {
    let mut out = Vec::new();
    for node in nodes {
        node.collect_into(&mut out);
    }
    out
}
