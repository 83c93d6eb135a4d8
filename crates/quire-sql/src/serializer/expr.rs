use super::{Comma, Delimited, Formatter, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(column) => {
                fmt!(f, column);
            }
            Func(func) => {
                fmt!(f, func);
            }
            InList(expr) => {
                let op = if expr.negate { " NOT IN (" } else { " IN (" };
                fmt!(f, expr.expr op Comma(&expr.list) ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Nested(expr) => {
                fmt!(f, "(" expr ")");
            }
            Not(expr) => {
                fmt!(f, "NOT " expr);
            }
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            Raw(sql) => {
                fmt!(f, sql.as_str());
            }
            Stmt(expr) => {
                fmt!(f, "(" expr.query ")");
            }
            Value(value) => {
                fmt!(f, value);
            }
        }
    }
}

impl ToSql for &stmt::ExprFunc {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // Function names are not quoted, `COUNT` must stay `COUNT`
        let name = self.name.parts().iter().map(String::as_str);
        let distinct = if self.distinct { "DISTINCT " } else { "" };

        fmt!(f, Delimited(name, ".") "(" distinct Comma(&self.args) ")");
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::BinaryOp::*;

        let op = match self {
            Eq => "=",
            Ne => "<>",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Like => "LIKE",
            Concat => "||",
        };

        fmt!(f, op);
    }
}
