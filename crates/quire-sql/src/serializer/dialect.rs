//! Vendor-specific fragments.

use super::{Formatter, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::Skip {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SKIP " self.rows);
    }
}

impl ToSql for &stmt::First {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let keyword = match self.keyword {
            stmt::FirstKeyword::First => "FIRST ",
            stmt::FirstKeyword::Limit => "LIMIT ",
        };

        fmt!(f, keyword self.rows);
    }
}

impl ToSql for &stmt::OracleHint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "/*+ " self.text.as_str() " */");
    }
}

impl ToSql for &stmt::Hierarchical {
    /// Carries its own leading space.
    fn to_sql(self, f: &mut Formatter<'_>) {
        let nocycle = if self.nocycle { "NOCYCLE " } else { "" };

        if self.connect_first {
            fmt!(f, " CONNECT BY " nocycle self.connect_by);

            if let Some(start_with) = &self.start_with {
                fmt!(f, " START WITH " start_with);
            }
        } else {
            if let Some(start_with) = &self.start_with {
                fmt!(f, " START WITH " start_with);
            }

            fmt!(f, " CONNECT BY " nocycle self.connect_by);
        }
    }
}

impl ToSql for stmt::BigQueryQualifier {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::BigQueryQualifier::AsStruct => fmt!(f, "AS STRUCT"),
            stmt::BigQueryQualifier::AsValue => fmt!(f, "AS VALUE"),
        }
    }
}

impl ToSql for stmt::CacheFlag {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.keyword());
    }
}

impl ToSql for &stmt::StreamingWindow {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::StreamingWindow::*;

        match self {
            Hopping { size, advance } => {
                fmt!(f, "HOPPING (SIZE " size ", ADVANCE BY " advance ")");
            }
            Session { size } => fmt!(f, "SESSION (" size ")"),
            Tumbling { size } => fmt!(f, "TUMBLING (SIZE " size ")"),
        }
    }
}

impl ToSql for &stmt::JoinWindow {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.after {
            Some(after) => fmt!(f, "(" self.before ", " after ")"),
            None => fmt!(f, "(" self.before ")"),
        }
    }
}

impl ToSql for &stmt::JoinHint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let hint = match self {
            stmt::JoinHint::Loop => "LOOP",
            stmt::JoinHint::Hash => "HASH",
            stmt::JoinHint::Merge => "MERGE",
            stmt::JoinHint::Remote => "REMOTE",
        };

        fmt!(f, hint);
    }
}
