use super::{BinaryOp, Expr};

/// `<lhs> <op> <rhs>`, such as the `a.id = b.id` of a join condition or the
/// `price >= 10` of a filter.
///
/// Operands are rendered as they are. Wrap an operand in [`Expr::nested`] when
/// it needs parentheses to keep its grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl BinaryOp {
    /// Builds `<lhs> <self> <rhs>`.
    pub fn apply(self, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: self,
            rhs: Box::new(rhs.into()),
        })
    }
}

impl Expr {
    /// `<lhs> = <rhs>`, the usual `ON` predicate.
    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        BinaryOp::Eq.apply(lhs, rhs)
    }

    pub fn ge(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        BinaryOp::Ge.apply(lhs, rhs)
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        BinaryOp::Lt.apply(lhs, rhs)
    }

    pub fn like(lhs: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        BinaryOp::Like.apply(lhs, pattern)
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
