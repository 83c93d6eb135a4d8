use super::Expr;

/// `GROUP BY a, b` optionally followed by `GROUPING SETS ((a), (a, b))`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupBy {
    pub exprs: Vec<Expr>,
    pub grouping_sets: Vec<Vec<Expr>>,
}

impl GroupBy {
    pub fn new(exprs: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        Self {
            exprs: exprs.into_iter().map(Into::into).collect(),
            grouping_sets: vec![],
        }
    }

    pub fn push(&mut self, expr: impl Into<Expr>) {
        self.exprs.push(expr.into());
    }

    pub fn grouping_set(mut self, set: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        self.grouping_sets
            .push(set.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty() && self.grouping_sets.is_empty()
    }
}
