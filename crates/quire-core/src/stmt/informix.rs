use super::{Expr, Table};

/// Informix row limiting and temp-table output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InformixOptions {
    pub skip: Option<Skip>,
    pub first: Option<First>,

    /// `INTO TEMP t`, independent of `PlainSelect::into_tables`
    pub into_temp_table: Option<Table>,

    /// `WITH NO LOG`
    pub with_no_log: bool,
}

/// `SKIP n`
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub rows: Expr,
}

/// `FIRST n` or `LIMIT n` in the select head.
#[derive(Debug, Clone, PartialEq)]
pub struct First {
    pub keyword: FirstKeyword,
    pub rows: Expr,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FirstKeyword {
    First,
    Limit,
}

impl Skip {
    pub fn new(rows: impl Into<Expr>) -> Self {
        Self { rows: rows.into() }
    }
}

impl First {
    pub fn new(rows: impl Into<Expr>) -> Self {
        Self {
            keyword: FirstKeyword::First,
            rows: rows.into(),
        }
    }

    pub fn limit(rows: impl Into<Expr>) -> Self {
        Self {
            keyword: FirstKeyword::Limit,
            rows: rows.into(),
        }
    }
}
