use super::Serializer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum Flavor {
    /// Identifiers are emitted as written
    #[default]
    Generic,
    Postgresql,
    Sqlite,
    Mysql,
}

impl Flavor {
    /// The character used to quote identifiers, if any.
    pub(super) fn quote(self) -> Option<char> {
        match self {
            Flavor::Generic => None,
            Flavor::Postgresql | Flavor::Sqlite => Some('"'),
            Flavor::Mysql => Some('`'),
        }
    }
}

impl Serializer {
    /// A serializer that leaves identifiers unquoted. Used by
    /// [`Render::render`](super::Render::render).
    pub fn generic() -> Serializer {
        Serializer {
            flavor: Flavor::Generic,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }
}
