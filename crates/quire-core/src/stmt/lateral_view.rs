use super::ExprFunc;

/// Hive `LATERAL VIEW [OUTER] explode(tags) t AS tag`
#[derive(Debug, Clone, PartialEq)]
pub struct LateralView {
    pub outer: bool,
    pub function: ExprFunc,
    pub table_alias: Option<String>,

    /// Column aliases following `AS`
    pub columns: Vec<String>,
}

impl LateralView {
    pub fn new(function: ExprFunc) -> Self {
        Self {
            outer: false,
            function,
            table_alias: None,
            columns: vec![],
        }
    }

    pub fn outer(mut self) -> Self {
        self.outer = true;
        self
    }

    pub fn table_alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = Some(alias.into());
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }
}
