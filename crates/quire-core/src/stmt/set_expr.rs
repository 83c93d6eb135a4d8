use super::{PlainSelect, Query};

/// The body of a query: a single `SELECT`, a set operation over several
/// bodies, or a parenthesized query.
#[derive(Debug, Clone, PartialEq)]
pub enum SetExpr {
    Select(Box<PlainSelect>),
    SetOp(ExprSetOp),

    /// `(query)`, needed when an operand carries its own ORDER BY or LIMIT
    Query(Box<Query>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprSetOp {
    pub op: SetOp,

    /// `UNION ALL` rather than `UNION`
    pub all: bool,

    pub operands: Vec<SetExpr>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Intersect,
    Except,

    /// Oracle spelling of `EXCEPT`
    Minus,
}

impl SetExpr {
    pub fn as_select(&self) -> Option<&PlainSelect> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn as_select_mut(&mut self) -> Option<&mut PlainSelect> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }

    pub fn is_set_op(&self) -> bool {
        matches!(self, Self::SetOp(_))
    }
}

impl ExprSetOp {
    pub fn new(op: SetOp, operands: impl IntoIterator<Item = impl Into<SetExpr>>) -> Self {
        Self {
            op,
            all: false,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }

    pub fn is_union(&self) -> bool {
        self.op == SetOp::Union
    }
}

impl SetOp {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Minus => "MINUS",
        }
    }
}

impl Default for SetExpr {
    fn default() -> Self {
        Self::Select(Box::default())
    }
}

impl From<PlainSelect> for SetExpr {
    fn from(value: PlainSelect) -> Self {
        Self::Select(Box::new(value))
    }
}

impl From<ExprSetOp> for SetExpr {
    fn from(value: ExprSetOp) -> Self {
        Self::SetOp(value)
    }
}

impl From<Query> for SetExpr {
    /// A bare query collapses to its body; one with envelope clauses is kept
    /// whole and parenthesized.
    fn from(value: Query) -> Self {
        if value.is_bare() {
            value.body
        } else {
            Self::Query(Box::new(value))
        }
    }
}
