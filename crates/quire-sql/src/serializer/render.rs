use super::Serializer;

use quire_core::stmt;

mod sealed {
    pub trait Sealed {}
}

/// Statement tree nodes that can be rendered to SQL text.
///
/// Rendering is a pure read of the tree: it never fails and repeated calls
/// produce identical output.
pub trait Render: sealed::Sealed {
    /// Renders the node using `serializer`'s flavor.
    fn render_with(&self, serializer: &Serializer) -> String;

    /// Renders the node with identifiers left unquoted.
    fn render(&self) -> String {
        self.render_with(&Serializer::generic())
    }
}

macro_rules! impl_render {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Render for $ty {
                fn render_with(&self, serializer: &Serializer) -> String {
                    serializer.write(self)
                }
            }
        )*
    };
}

impl_render!(
    stmt::Alias,
    stmt::Column,
    stmt::Distinct,
    stmt::Expr,
    stmt::Fetch,
    stmt::First,
    stmt::FromItem,
    stmt::GroupBy,
    stmt::Hierarchical,
    stmt::Join,
    stmt::JoinHint,
    stmt::JoinWindow,
    stmt::LateralView,
    stmt::Limit,
    stmt::Lock,
    stmt::Name,
    stmt::Offset,
    stmt::OptimizeFor,
    stmt::OracleHint,
    stmt::OrderBy,
    stmt::PlainSelect,
    stmt::Preferring,
    stmt::Query,
    stmt::SelectItem,
    stmt::SetExpr,
    stmt::Skip,
    stmt::StreamingWindow,
    stmt::Table,
    stmt::Top,
    stmt::Value,
    stmt::WindowDefinition,
    stmt::WindowDuration,
    stmt::With,
);
