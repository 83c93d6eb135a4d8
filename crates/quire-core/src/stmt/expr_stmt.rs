use super::{Expr, Query};

/// A subquery used as a scalar expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub query: Box<Query>,
}

impl Expr {
    pub fn stmt(query: impl Into<Query>) -> Self {
        ExprStmt {
            query: Box::new(query.into()),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}
