use super::{Formatter, Ident, Period, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Period(self.parts().iter().map(Ident)));
    }
}

impl ToSql for &stmt::Alias {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.use_as {
            fmt!(f, "AS ");
        }
        fmt!(f, Ident(&self.name));
    }
}

impl ToSql for &stmt::Column {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name);
    }
}

impl ToSql for &stmt::Table {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name);

        if let Some(alias) = &self.alias {
            fmt!(f, " " alias);
        }
    }
}
