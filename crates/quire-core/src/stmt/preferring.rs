use super::Expr;

/// Exasol `PREFERRING <term> [PARTITION BY ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Preferring {
    pub term: Preference,
    pub partition_by: Vec<Expr>,
}

/// A preference term. Terms nest, so combinators box their operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Preference {
    /// `HIGH expr`
    High(Expr),

    /// `LOW expr`
    Low(Expr),

    /// `INVERSE (term)`
    Inverse(Box<Preference>),

    /// `a PLUS b`
    Plus(Box<Preference>, Box<Preference>),

    /// `a PRIOR TO b`
    PriorTo(Box<Preference>, Box<Preference>),

    /// A boolean expression used directly as a preference
    Expr(Expr),
}

impl Preferring {
    pub fn new(term: Preference) -> Self {
        Self {
            term,
            partition_by: vec![],
        }
    }

    pub fn partition_by(mut self, expr: impl Into<Expr>) -> Self {
        self.partition_by.push(expr.into());
        self
    }
}

impl Preference {
    pub fn high(expr: impl Into<Expr>) -> Self {
        Self::High(expr.into())
    }

    pub fn low(expr: impl Into<Expr>) -> Self {
        Self::Low(expr.into())
    }

    pub fn inverse(self) -> Self {
        Self::Inverse(Box::new(self))
    }

    pub fn plus(self, rhs: Preference) -> Self {
        Self::Plus(Box::new(self), Box::new(rhs))
    }

    pub fn prior_to(self, rhs: Preference) -> Self {
        Self::PriorTo(Box::new(self), Box::new(rhs))
    }
}
