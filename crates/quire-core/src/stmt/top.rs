use super::Expr;

/// T-SQL `TOP n [PERCENT] [WITH TIES]`
#[derive(Debug, Clone, PartialEq)]
pub struct Top {
    pub quantity: Expr,

    /// `TOP (n)` rather than `TOP n`
    pub parenthesized: bool,
    pub percent: bool,
    pub with_ties: bool,
}

impl Top {
    pub fn new(quantity: impl Into<Expr>) -> Self {
        Self {
            quantity: quantity.into(),
            parenthesized: false,
            percent: false,
            with_ties: false,
        }
    }

    pub fn parenthesized(mut self) -> Self {
        self.parenthesized = true;
        self
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
