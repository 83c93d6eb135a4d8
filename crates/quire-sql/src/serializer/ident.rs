use super::{Formatter, ToSql};

/// An identifier, quoted according to the serializer's flavor.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ident = self.0.as_ref();

        let Some(quote) = f.serializer.flavor.quote() else {
            f.dst.push_str(ident);
            return;
        };

        f.dst.push(quote);
        for ch in ident.chars() {
            // Embedded quote characters are escaped by doubling them
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}
