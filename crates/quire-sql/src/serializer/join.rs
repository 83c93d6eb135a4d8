use super::{FormattedList, Formatter, ToSql};

use quire_core::stmt::{self, JoinKeyword, JoinType};

impl ToSql for &stmt::Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.global {
            fmt!(f, "GLOBAL ");
        }

        if self.simple {
            // A comma join has no keyword; only OUTER survives
            if self.is_outer() {
                fmt!(f, "OUTER ");
            }
            fmt!(f, self.source);
        } else {
            if self.kind.natural {
                fmt!(f, "NATURAL ");
            }

            match self.kind.ty() {
                Some(JoinType::Right) => fmt!(f, "RIGHT "),
                Some(JoinType::Full) => fmt!(f, "FULL "),
                Some(JoinType::Left) => fmt!(f, "LEFT "),
                Some(JoinType::Cross) => fmt!(f, "CROSS "),
                None => {}
            }

            match self.kind.keyword() {
                Some(JoinKeyword::Outer) => fmt!(f, "OUTER "),
                Some(JoinKeyword::Inner) => fmt!(f, "INNER "),
                Some(JoinKeyword::Semi) => fmt!(f, "SEMI "),
                None => {}
            }

            if self.straight || self.apply {
                if let Some(hint) = self.hint {
                    tracing::debug!(
                        ?hint,
                        straight = self.straight,
                        apply = self.apply,
                        "join hint not rendered"
                    );
                }

                let keyword = if self.straight {
                    "STRAIGHT_JOIN "
                } else {
                    "APPLY "
                };
                fmt!(f, keyword);
            } else {
                if let Some(hint) = self.hint {
                    fmt!(f, hint " ");
                }
                fmt!(f, "JOIN ");
            }

            fmt!(f, self.source);

            if let Some(window) = &self.window {
                fmt!(f, " WITHIN " window);
            }
        }

        for expr in &self.on {
            fmt!(f, " ON " expr);
        }

        fmt!(f, FormattedList {
            items: &self.using,
            keyword: "USING",
            comma: true,
            parens: true,
        });
    }
}
