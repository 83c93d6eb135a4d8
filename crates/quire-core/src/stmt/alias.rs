/// An alias attached to a relation or a projected expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    pub name: String,

    /// Emit the `AS` keyword before the name.
    pub use_as: bool,
}

impl Alias {
    /// An alias written as `AS name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_as: true,
        }
    }

    /// An alias written without the `AS` keyword.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_as: false,
        }
    }
}

impl From<&str> for Alias {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Alias {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
