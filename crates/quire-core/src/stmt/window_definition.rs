use super::{Expr, OrderByExpr};

/// A named window: `w AS (PARTITION BY a ORDER BY b)`
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDefinition {
    pub name: String,
    pub spec: WindowSpec,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowSpec {
    /// Name of an existing window this one refines
    pub base: Option<String>,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderByExpr>,
}

impl WindowDefinition {
    pub fn new(name: impl Into<String>, spec: WindowSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

impl WindowSpec {
    pub fn base(mut self, name: impl Into<String>) -> Self {
        self.base = Some(name.into());
        self
    }

    pub fn partition_by(mut self, expr: impl Into<Expr>) -> Self {
        self.partition_by.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<OrderByExpr>) -> Self {
        self.order_by.push(expr.into());
        self
    }
}
