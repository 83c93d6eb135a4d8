//! Clauses shared by several statement shapes: grouping, ordering, window
//! definitions and the select head modifiers.

use super::{Comma, Formatter, Ident, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::Distinct {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.unique {
            fmt!(f, "UNIQUE");
        } else {
            fmt!(f, "DISTINCT");
        }

        if !self.on.is_empty() {
            fmt!(f, " ON (" Comma(&self.on) ")");
        }
    }
}

impl ToSql for &stmt::Top {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.parenthesized {
            fmt!(f, "TOP (" self.quantity ")");
        } else {
            fmt!(f, "TOP " self.quantity);
        }

        if self.percent {
            fmt!(f, " PERCENT");
        }

        if self.with_ties {
            fmt!(f, " WITH TIES");
        }
    }
}

impl ToSql for &stmt::GroupBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "GROUP BY " Comma(&self.exprs));

        if !self.grouping_sets.is_empty() {
            if !self.exprs.is_empty() {
                fmt!(f, " ");
            }

            fmt!(f, "GROUPING SETS (" Comma(self.grouping_sets.iter().map(GroupingSet)) ")");
        }
    }
}

struct GroupingSet<'a>(&'a Vec<stmt::Expr>);

impl ToSql for GroupingSet<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "(" Comma(self.0) ")");
    }
}

impl ToSql for &stmt::LateralView {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "LATERAL VIEW");

        if self.outer {
            fmt!(f, " OUTER");
        }

        fmt!(f, " " self.function);

        if let Some(alias) = &self.table_alias {
            fmt!(f, " " Ident(alias));
        }

        if !self.columns.is_empty() {
            fmt!(f, " AS " Comma(self.columns.iter().map(Ident)));
        }
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let siblings = if self.siblings { "SIBLINGS " } else { "" };

        fmt!(f, "ORDER " siblings "BY " Comma(&self.exprs));
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.expr);

        match self.order {
            Some(stmt::Direction::Asc) => fmt!(f, " ASC"),
            Some(stmt::Direction::Desc) => fmt!(f, " DESC"),
            None => {}
        }

        match self.nulls {
            Some(stmt::NullsOrder::First) => fmt!(f, " NULLS FIRST"),
            Some(stmt::NullsOrder::Last) => fmt!(f, " NULLS LAST"),
            None => {}
        }
    }
}

impl ToSql for &stmt::WindowDefinition {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.name) " AS (" self.spec ")");
    }
}

impl ToSql for &stmt::WindowSpec {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";

        if let Some(base) = &self.base {
            fmt!(f, Ident(base));
            s = " ";
        }

        if !self.partition_by.is_empty() {
            fmt!(f, s "PARTITION BY " Comma(&self.partition_by));
            s = " ";
        }

        if !self.order_by.is_empty() {
            fmt!(f, s "ORDER BY " Comma(&self.order_by));
        }
    }
}

impl ToSql for &stmt::Preferring {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "PREFERRING " self.term);

        if !self.partition_by.is_empty() {
            fmt!(f, " PARTITION BY " Comma(&self.partition_by));
        }
    }
}

impl ToSql for &stmt::Preference {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Preference::*;

        match self {
            High(expr) => fmt!(f, "HIGH " expr),
            Low(expr) => fmt!(f, "LOW " expr),
            Inverse(term) => fmt!(f, "INVERSE (" term ")"),
            Plus(lhs, rhs) => fmt!(f, lhs " PLUS " rhs),
            PriorTo(lhs, rhs) => fmt!(f, lhs " PRIOR TO " rhs),
            Expr(expr) => fmt!(f, expr),
        }
    }
}

impl ToSql for &stmt::OptimizeFor {
    /// Carries its own leading space, like the hierarchical clause.
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, " OPTIMIZE FOR " self.rows " ROWS");
    }
}

impl ToSql for &stmt::WindowDuration {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.value " " self.unit.keyword(self.value));
    }
}

