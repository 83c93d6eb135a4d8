use super::*;

/// A scalar SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column
    Column(Column),

    /// Function call
    Func(ExprFunc),

    /// In list
    InList(ExprInList),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// An expression wrapped in parentheses
    Nested(Box<Expr>),

    /// Logical negation
    Not(Box<Expr>),

    /// OR a set of expressions
    Or(ExprOr),

    /// SQL text emitted verbatim. Used for fragments the tree does not model,
    /// such as bind parameters or vendor functions with unusual syntax.
    Raw(String),

    /// A scalar subquery
    Stmt(ExprStmt),

    /// A literal value
    Value(Value),
}

impl Expr {
    pub fn column(name: impl Into<Name>) -> Self {
        Self::Column(Column::new(name))
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn nested(expr: impl Into<Self>) -> Self {
        Self::Nested(Box::new(expr.into()))
    }

    pub fn not(expr: impl Into<Self>) -> Self {
        Self::Not(Box::new(expr.into()))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }
}

impl From<Column> for Expr {
    fn from(value: Column) -> Self {
        Self::Column(value)
    }
}
