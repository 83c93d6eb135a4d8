/// A possibly qualified SQL identifier, such as `schema.table` or `t.col`.
///
/// Each part is stored unquoted; quoting is applied at serialization time
/// according to the serializer's flavor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(pub Vec<String>);

impl Name {
    pub fn new(parts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// The unqualified part of the name.
    pub fn base(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_qualified(&self) -> bool {
        self.0.len() > 1
    }
}

impl From<&str> for Name {
    /// Splits on `.`, so `"a.id"` becomes the two-part name `a.id`. Use
    /// [`Name::new`] for identifiers that contain a literal dot.
    fn from(value: &str) -> Self {
        Self(value.split('.').map(str::to_string).collect())
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<String>> for Name {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}
