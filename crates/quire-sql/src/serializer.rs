#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, FormattedList, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod render;
pub use render::Render;

// Fragment serializers
mod clause;
mod dialect;
mod expr;
mod from_item;
mod join;
mod name;
mod query;
mod select;
mod value;

/// Renders statement trees to SQL text.
///
/// The serializer is cheap to construct and holds no state beyond its
/// flavor, so one instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    /// The database flavor controls how identifiers are quoted.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// Renders `node` as a complete statement, terminated by `;`.
    pub fn serialize(&self, node: &impl Render) -> String {
        let _span = tracing::trace_span!("serialize", flavor = ?self.flavor).entered();

        let mut ret = node.render_with(self);
        ret.push(';');

        tracing::trace!(len = ret.len(), "serialized statement");
        ret
    }

    fn write<T>(&self, node: &T) -> String
    where
        T: ?Sized,
        for<'b> &'b T: ToSql,
    {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        node.to_sql(&mut fmt);
        ret
    }
}
