use super::{Alias, Name};

/// A named table, as it appears in `FROM`, `INTO` or `FOR UPDATE OF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    pub name: Name,
    pub alias: Option<Alias>,
}

impl Table {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<Alias>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for Table {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Table {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Name> for Table {
    fn from(value: Name) -> Self {
        Self {
            name: value,
            alias: None,
        }
    }
}
