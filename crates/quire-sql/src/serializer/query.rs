use super::select::{SelectBody, SelectTail};
use super::{Comma, Formatter, Ident, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(with) = &self.with {
            fmt!(f, with " ");
        }

        // A plain select's tail goes after the clauses added here
        let select = self.body.as_select();

        match select {
            Some(select) => fmt!(f, SelectBody(select)),
            None => fmt!(f, self.body),
        }

        if let Some(order_by) = &self.order_by {
            fmt!(f, " " order_by);
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " " limit);
        }

        if let Some(offset) = &self.offset {
            fmt!(f, " " offset);
        }

        if let Some(fetch) = &self.fetch {
            fmt!(f, " " fetch);
        }

        for lock in &self.locks {
            fmt!(f, " " lock);
        }

        if let Some(select) = select {
            fmt!(f, SelectTail(select));
        }
    }
}

impl ToSql for &stmt::SetExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::SetExpr::Select(select) => fmt!(f, select),
            stmt::SetExpr::SetOp(set_op) => fmt!(f, set_op),
            stmt::SetExpr::Query(query) => fmt!(f, "(" query ")"),
        }
    }
}

impl ToSql for &stmt::ExprSetOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let all = if self.all { " ALL" } else { "" };

        let mut s = false;
        for operand in &self.operands {
            if s {
                fmt!(f, " " self.op.keyword() all " ");
            }
            fmt!(f, operand);
            s = true;
        }
    }
}

impl ToSql for &stmt::With {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let recursive = if self.recursive { "RECURSIVE " } else { "" };

        fmt!(f, "WITH " recursive Comma(&self.ctes));
    }
}

impl ToSql for &stmt::Cte {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.name));

        if !self.columns.is_empty() {
            fmt!(f, " (" Comma(self.columns.iter().map(Ident)) ")");
        }

        fmt!(f, " AS (" self.query ")");
    }
}

impl ToSql for &stmt::Limit {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Limit::Count(expr) => fmt!(f, "LIMIT " expr),
            stmt::Limit::All => fmt!(f, "LIMIT ALL"),
        }
    }
}

impl ToSql for &stmt::Offset {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "OFFSET " self.value);

        match self.rows {
            Some(stmt::OffsetRows::Row) => fmt!(f, " ROW"),
            Some(stmt::OffsetRows::Rows) => fmt!(f, " ROWS"),
            None => {}
        }
    }
}

impl ToSql for &stmt::Fetch {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "FETCH FIRST ");

        if let Some(quantity) = &self.quantity {
            fmt!(f, quantity " ");
        }

        if self.percent {
            fmt!(f, "PERCENT ");
        }

        if self.with_ties {
            fmt!(f, "ROWS WITH TIES");
        } else {
            fmt!(f, "ROWS ONLY");
        }
    }
}

impl ToSql for &stmt::Lock {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.kind {
            stmt::LockKind::Update => fmt!(f, "FOR UPDATE"),
            stmt::LockKind::Share => fmt!(f, "FOR SHARE"),
        }

        if !self.of.is_empty() {
            fmt!(f, " OF " Comma(&self.of));
        }

        match self.wait {
            Some(stmt::LockWait::Nowait) => fmt!(f, " NOWAIT"),
            Some(stmt::LockWait::SkipLocked) => fmt!(f, " SKIP LOCKED"),
            None => {}
        }
    }
}
