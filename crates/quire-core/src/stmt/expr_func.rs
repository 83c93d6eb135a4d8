use super::{Expr, Name};

/// A function call such as `COUNT(DISTINCT id)` or `explode(tags)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: Name,
    pub args: Vec<Expr>,

    /// `DISTINCT` before the argument list
    pub distinct: bool,
}

impl ExprFunc {
    pub fn new(name: impl Into<Name>, args: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            distinct: false,
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

impl Expr {
    pub fn func(name: impl Into<Name>, args: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        ExprFunc::new(name, args).into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
