use super::Expr;

/// `ORDER [SIBLINGS] BY ...`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,

    /// Oracle `ORDER SIBLINGS BY`, for hierarchical queries
    pub siblings: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub order: Option<Direction>,
    pub nulls: Option<NullsOrder>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

impl OrderBy {
    pub fn new(exprs: impl IntoIterator<Item = impl Into<OrderByExpr>>) -> Self {
        Self {
            exprs: exprs.into_iter().map(Into::into).collect(),
            siblings: false,
        }
    }

    pub fn siblings(mut self) -> Self {
        self.siblings = true;
        self
    }
}

impl OrderByExpr {
    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Some(Direction::Asc),
            nulls: None,
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Some(Direction::Desc),
            nulls: None,
        }
    }

    pub fn nulls(mut self, nulls: NullsOrder) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

impl From<Expr> for OrderByExpr {
    fn from(value: Expr) -> Self {
        Self {
            expr: value,
            order: None,
            nulls: None,
        }
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self::new([value])
    }
}
