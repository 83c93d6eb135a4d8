mod alias;
pub use alias::Alias;

mod bigquery;
pub use bigquery::BigQueryQualifier;

mod column;
pub use column::Column;

mod distinct;
pub use distinct::Distinct;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod from_item;
pub use from_item::{FromItem, TableFunction, TableSubquery};

mod group_by;
pub use group_by::GroupBy;

mod informix;
pub use informix::{First, FirstKeyword, InformixOptions, Skip};

mod join;
pub use join::{Join, JoinBuilder, JoinKeyword, JoinKind, JoinType};

mod join_hint;
pub use join_hint::JoinHint;

mod join_window;
pub use join_window::JoinWindow;

mod lateral_view;
pub use lateral_view::LateralView;

mod limit;
pub use limit::{Fetch, Limit, Offset, OffsetRows};

mod lock;
pub use lock::{Lock, LockKind, LockWait};

mod mysql;
pub use mysql::{CacheFlag, MySqlOptions};

mod name;
pub use name::Name;

mod op_binary;
pub use op_binary::BinaryOp;

mod optimize_for;
pub use optimize_for::OptimizeFor;

mod oracle;
pub use oracle::{Hierarchical, OracleHint, OracleOptions};

mod order_by;
pub use order_by::{Direction, NullsOrder, OrderBy, OrderByExpr};

mod plain_select;
pub use plain_select::{PlainSelect, PlainSelectBuilder};

mod preferring;
pub use preferring::{Preference, Preferring};

mod query;
pub use query::{Query, QueryBuilder};

mod select_item;
pub use select_item::SelectItem;

mod set_expr;
pub use set_expr::{ExprSetOp, SetExpr, SetOp};

mod streaming;
pub use streaming::{StreamingOptions, StreamingWindow};

mod table;
pub use table::Table;

mod top;
pub use top::Top;

mod value;
pub use value::Value;

mod window_definition;
pub use window_definition::{WindowDefinition, WindowSpec};

mod window_duration;
pub use window_duration::{TimeUnit, WindowDuration};

mod with;
pub use with::{Cte, With};
