use super::{Formatter, ToSql};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

/// A list introduced by a keyword, such as ` USING (a, b)`.
///
/// Renders nothing when the list is empty. Otherwise a leading space, the
/// keyword (if any), then the items, separated by `, ` when `comma` is set and
/// by a single space otherwise, wrapped in parentheses when `parens` is set.
pub(super) struct FormattedList<L> {
    pub(super) items: L,
    pub(super) keyword: &'static str,
    pub(super) comma: bool,
    pub(super) parens: bool,
}

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Delimited(self.0, ", "));
    }
}

impl<L> ToSql for Period<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Delimited(self.0, "."));
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

impl<L> ToSql for FormattedList<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut items = self.items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }

        fmt!(f, " ");
        if !self.keyword.is_empty() {
            fmt!(f, self.keyword " ");
        }

        let sep = if self.comma { ", " } else { " " };

        if self.parens {
            fmt!(f, "(" Delimited(items, sep) ")");
        } else {
            fmt!(f, Delimited(items, sep));
        }
    }
}
