use super::{Alias, Expr, Name};

/// One entry of a projection list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// An expression with an optional alias: `price * qty AS total`
    Expr { expr: Expr, alias: Option<Alias> },

    /// `*`
    Wildcard,

    /// `t.*`
    QualifiedWildcard(Name),
}

impl SelectItem {
    pub fn expr(expr: impl Into<Expr>) -> Self {
        Self::Expr {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn aliased(expr: impl Into<Expr>, alias: impl Into<Alias>) -> Self {
        Self::Expr {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn qualified_wildcard(table: impl Into<Name>) -> Self {
        Self::QualifiedWildcard(table.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard | Self::QualifiedWildcard(_))
    }
}

impl From<Expr> for SelectItem {
    fn from(value: Expr) -> Self {
        Self::expr(value)
    }
}
