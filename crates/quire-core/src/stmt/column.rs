use super::Name;

/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: Name,
}

impl Column {
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Column {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Column {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Name> for Column {
    fn from(value: Name) -> Self {
        Self { name: value }
    }
}
