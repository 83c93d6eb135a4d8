use super::{Formatter, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::FromItem {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::FromItem::*;

        match self {
            Table(table) => fmt!(f, table),
            Subquery(subquery) => {
                if subquery.lateral {
                    fmt!(f, "LATERAL ");
                }
                fmt!(f, "(" subquery.query ")");

                if let Some(alias) = &subquery.alias {
                    fmt!(f, " " alias);
                }
            }
            Function(function) => {
                fmt!(f, function.func);

                if let Some(alias) = &function.alias {
                    fmt!(f, " " alias);
                }
            }
        }
    }
}

impl ToSql for &stmt::SelectItem {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::SelectItem::*;

        match self {
            Expr { expr, alias } => {
                fmt!(f, expr);

                if let Some(alias) = alias {
                    fmt!(f, " " alias);
                }
            }
            Wildcard => fmt!(f, "*"),
            QualifiedWildcard(table) => fmt!(f, table ".*"),
        }
    }
}
