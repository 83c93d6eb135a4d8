use super::SelectItem;

/// `DISTINCT`, `UNIQUE` or `DISTINCT ON (...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distinct {
    /// Oracle spelling `UNIQUE`
    pub unique: bool,

    /// PostgreSQL `DISTINCT ON (...)` items
    pub on: Vec<SelectItem>,
}

impl Distinct {
    pub fn unique() -> Self {
        Self {
            unique: true,
            on: vec![],
        }
    }

    pub fn on(items: impl IntoIterator<Item = impl Into<SelectItem>>) -> Self {
        Self {
            unique: false,
            on: items.into_iter().map(Into::into).collect(),
        }
    }
}
