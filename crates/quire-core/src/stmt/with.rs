use super::Query;

/// `WITH [RECURSIVE] name [(cols)] AS (query), ...`
#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub recursive: bool,
    pub ctes: Vec<Cte>,
}

/// One common table expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    pub name: String,
    pub columns: Vec<String>,
    pub query: Query,
}

impl With {
    pub fn new(ctes: impl IntoIterator<Item = Cte>) -> Self {
        Self {
            recursive: false,
            ctes: ctes.into_iter().collect(),
        }
    }

    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

impl Cte {
    pub fn new(name: impl Into<String>, query: impl Into<Query>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            query: query.into(),
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }
}
