use super::Expr;

/// `LIMIT n` or `LIMIT ALL`
#[derive(Debug, Clone, PartialEq)]
pub enum Limit {
    Count(Expr),
    All,
}

/// `OFFSET n [ROW | ROWS]`
#[derive(Debug, Clone, PartialEq)]
pub struct Offset {
    pub value: Expr,
    pub rows: Option<OffsetRows>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffsetRows {
    Row,
    Rows,
}

/// `FETCH FIRST [n] [PERCENT] ROWS { ONLY | WITH TIES }`
#[derive(Debug, Clone, PartialEq)]
pub struct Fetch {
    pub quantity: Option<Expr>,
    pub percent: bool,
    pub with_ties: bool,
}

impl Limit {
    pub fn count(n: impl Into<Expr>) -> Self {
        Self::Count(n.into())
    }
}

impl Offset {
    pub fn new(value: impl Into<Expr>) -> Self {
        Self {
            value: value.into(),
            rows: None,
        }
    }

    pub fn rows(mut self, rows: OffsetRows) -> Self {
        self.rows = Some(rows);
        self
    }
}

impl Fetch {
    pub fn first(quantity: impl Into<Expr>) -> Self {
        Self {
            quantity: Some(quantity.into()),
            percent: false,
            with_ties: false,
        }
    }

    pub fn percent(mut self) -> Self {
        self.percent = true;
        self
    }

    pub fn with_ties(mut self) -> Self {
        self.with_ties = true;
        self
    }
}
