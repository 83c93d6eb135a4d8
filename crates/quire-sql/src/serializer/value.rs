use super::{Formatter, ToSql};

use quire_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Value::*;

        match self {
            Null => fmt!(f, "NULL"),
            Bool(true) => fmt!(f, "TRUE"),
            Bool(false) => fmt!(f, "FALSE"),
            I64(v) => f.dst.push_str(&v.to_string()),
            F64(v) => f.dst.push_str(&v.to_string()),
            String(v) => {
                f.dst.push('\'');
                for ch in v.chars() {
                    if ch == '\'' {
                        f.dst.push('\'');
                    }
                    f.dst.push(ch);
                }
                f.dst.push('\'');
            }
        }
    }
}
