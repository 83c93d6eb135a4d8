use super::{Comma, Formatter, ToSql};

use quire_core::stmt;

/// Everything up to and including the Informix `INTO TEMP` / `WITH NO LOG`
/// suffix.
pub(super) struct SelectBody<'a>(pub(super) &'a stmt::PlainSelect);

/// `OPTIMIZE FOR` and `FOR XML PATH`. These follow any clauses a wrapping
/// query adds, so they are written separately from the body.
pub(super) struct SelectTail<'a>(pub(super) &'a stmt::PlainSelect);

impl ToSql for &stmt::PlainSelect {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, SelectBody(self) SelectTail(self));
    }
}

impl ToSql for SelectBody<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let select = self.0;

        fmt!(f, "SELECT ");
        head(select, f);
        fmt!(f, Comma(&select.projection));

        if !select.into_tables.is_empty() {
            fmt!(f, " INTO " Comma(&select.into_tables));
        }

        if let Some(source) = &select.source {
            from(select, source, f);
        } else if let Some(filter) = &select.filter {
            // Without a source only WHERE is meaningful
            fmt!(f, " WHERE " filter);
        }

        if let Some(informix) = &select.informix {
            if let Some(table) = &informix.into_temp_table {
                fmt!(f, " INTO TEMP " table);
            }

            if informix.with_no_log {
                fmt!(f, " WITH NO LOG");
            }
        }
    }
}

impl ToSql for SelectTail<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let select = self.0;

        if let Some(optimize_for) = &select.optimize_for {
            fmt!(f, optimize_for);
        }

        if let Some(path) = &select.for_xml_path {
            fmt!(f, " FOR XML PATH(" path.as_str() ")");
        }
    }
}

/// Modifiers between `SELECT` and the projection. Each one is followed by a
/// single space.
fn head(select: &stmt::PlainSelect, f: &mut Formatter<'_>) {
    if let Some(mysql) = &select.mysql {
        if mysql.straight_join {
            fmt!(f, "STRAIGHT_JOIN ");
        }
    }

    if let Some(oracle) = &select.oracle {
        if let Some(hint) = &oracle.hint {
            fmt!(f, hint " ");
        }
    }

    if let Some(informix) = &select.informix {
        if let Some(skip) = &informix.skip {
            fmt!(f, skip " ");
        }

        if let Some(first) = &informix.first {
            fmt!(f, first " ");
        }
    }

    if let Some(distinct) = &select.distinct {
        fmt!(f, distinct " ");
    }

    if let Some(qualifier) = select.bigquery {
        fmt!(f, qualifier " ");
    }

    if let Some(top) = &select.top {
        fmt!(f, top " ");
    }

    if let Some(mysql) = &select.mysql {
        if let Some(flag) = mysql.cache_flag {
            fmt!(f, flag " ");
        }

        if mysql.sql_calc_found_rows {
            fmt!(f, "SQL_CALC_FOUND_ROWS ");
        }
    }
}

/// The `FROM` clause and every clause that only applies when a source is
/// present.
fn from(select: &stmt::PlainSelect, source: &stmt::FromItem, f: &mut Formatter<'_>) {
    fmt!(f, " FROM ");

    if select.using_only {
        fmt!(f, "ONLY ");
    }

    fmt!(f, source);

    for view in &select.lateral_views {
        fmt!(f, " " view);
    }

    for join in &select.joins {
        let sep = if join.simple { ", " } else { " " };
        fmt!(f, sep join);
    }

    if select.using_final {
        fmt!(f, " FINAL");
    }

    let streaming = select.streaming.as_ref();

    if let Some(window) = streaming.and_then(|s| s.window.as_ref()) {
        fmt!(f, " WINDOW " window);
    }

    if let Some(filter) = &select.filter {
        fmt!(f, " WHERE " filter);
    }

    if let Some(hierarchical) = select.oracle.as_ref().and_then(|o| o.hierarchical.as_ref()) {
        fmt!(f, hierarchical);
    }

    if let Some(preferring) = &select.preferring {
        fmt!(f, " " preferring);
    }

    if let Some(group_by) = &select.group_by {
        fmt!(f, " " group_by);
    }

    if let Some(having) = &select.having {
        fmt!(f, " HAVING " having);
    }

    if let Some(qualify) = &select.qualify {
        fmt!(f, " QUALIFY " qualify);
    }

    if !select.window_definitions.is_empty() {
        fmt!(f, " WINDOW " Comma(&select.window_definitions));
    }

    if streaming.is_some_and(|s| s.emit_changes) {
        fmt!(f, " EMIT CHANGES");
    }
}
