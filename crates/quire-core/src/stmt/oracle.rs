use super::Expr;

/// Oracle optimizer hint and hierarchical query clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleOptions {
    pub hint: Option<OracleHint>,
    pub hierarchical: Option<Hierarchical>,
}

/// `/*+ text */`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleHint {
    pub text: String,
}

/// `[START WITH cond] CONNECT BY [NOCYCLE] cond`
///
/// When `connect_first` is set the `CONNECT BY` part is emitted before
/// `START WITH`, which Oracle also accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchical {
    pub start_with: Option<Expr>,
    pub connect_by: Expr,
    pub nocycle: bool,
    pub connect_first: bool,
}

impl OracleHint {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Hierarchical {
    pub fn new(connect_by: impl Into<Expr>) -> Self {
        Self {
            start_with: None,
            connect_by: connect_by.into(),
            nocycle: false,
            connect_first: false,
        }
    }

    pub fn start_with(mut self, expr: impl Into<Expr>) -> Self {
        self.start_with = Some(expr.into());
        self
    }

    pub fn nocycle(mut self) -> Self {
        self.nocycle = true;
        self
    }

    pub fn connect_first(mut self) -> Self {
        self.connect_first = true;
        self
    }
}
