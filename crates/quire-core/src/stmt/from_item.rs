use super::{Alias, ExprFunc, Name, Query, Table};

/// A relation that can appear after `FROM` or `JOIN`.
#[derive(Debug, Clone, PartialEq)]
pub enum FromItem {
    /// A named table
    Table(Table),

    /// A derived table: `(SELECT ...) AS t`
    Subquery(TableSubquery),

    /// A table-valued function: `generate_series(1, 10) AS s`
    Function(TableFunction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSubquery {
    pub query: Box<Query>,
    pub alias: Option<Alias>,

    /// `LATERAL (SELECT ...)`
    pub lateral: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableFunction {
    pub func: ExprFunc,
    pub alias: Option<Alias>,
}

impl FromItem {
    pub fn table(name: impl Into<Name>) -> Self {
        Self::Table(Table::new(name))
    }

    pub fn subquery(query: impl Into<Query>, alias: Option<Alias>) -> Self {
        Self::Subquery(TableSubquery {
            query: Box::new(query.into()),
            alias,
            lateral: false,
        })
    }

    pub fn function(func: ExprFunc, alias: Option<Alias>) -> Self {
        Self::Function(TableFunction { func, alias })
    }

    pub fn alias(&self) -> Option<&Alias> {
        match self {
            Self::Table(table) => table.alias.as_ref(),
            Self::Subquery(subquery) => subquery.alias.as_ref(),
            Self::Function(function) => function.alias.as_ref(),
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<Table> for FromItem {
    fn from(value: Table) -> Self {
        Self::Table(value)
    }
}

impl From<&str> for FromItem {
    fn from(value: &str) -> Self {
        Self::Table(value.into())
    }
}

impl From<TableSubquery> for FromItem {
    fn from(value: TableSubquery) -> Self {
        Self::Subquery(value)
    }
}

impl From<TableFunction> for FromItem {
    fn from(value: TableFunction) -> Self {
        Self::Function(value)
    }
}
