use super::*;
use crate::{error, Result};

/// A single `SELECT` body.
///
/// Every clause slot is optional; absent slots, and empty lists, render as
/// nothing. The dialect-specific slots are grouped per vendor and created on
/// first use through the `*_mut` accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainSelect {
    /// The projection. Must be non-empty for the output to be valid SQL.
    pub projection: Vec<SelectItem>,

    /// The `FROM` relation. When absent, joins and the other clauses that
    /// only make sense with a source are not rendered.
    pub source: Option<FromItem>,

    /// Relations joined onto `source`, in order
    pub joins: Vec<Join>,

    pub lateral_views: Vec<LateralView>,

    /// WHERE
    pub filter: Option<Expr>,

    pub group_by: Option<GroupBy>,

    pub having: Option<Expr>,

    /// QUALIFY, filtering on window function results
    pub qualify: Option<Expr>,

    pub distinct: Option<Distinct>,

    pub bigquery: Option<BigQueryQualifier>,

    pub top: Option<Top>,

    pub optimize_for: Option<OptimizeFor>,

    pub preferring: Option<Preferring>,

    /// T-SQL `FOR XML PATH(...)` argument, emitted verbatim
    pub for_xml_path: Option<String>,

    /// Named windows, `WINDOW w AS (...)`
    pub window_definitions: Vec<WindowDefinition>,

    /// ClickHouse `FINAL`
    pub using_final: bool,

    /// PostgreSQL `FROM ONLY`
    pub using_only: bool,

    /// `SELECT ... INTO t1, t2`. An empty list renders no `INTO` at all.
    pub into_tables: Vec<Table>,

    pub mysql: Option<MySqlOptions>,

    pub oracle: Option<OracleOptions>,

    pub informix: Option<InformixOptions>,

    pub streaming: Option<StreamingOptions>,
}

#[derive(Debug, Default)]
pub struct PlainSelectBuilder {
    select: PlainSelect,
}

impl PlainSelect {
    pub fn builder() -> PlainSelectBuilder {
        PlainSelectBuilder::default()
    }

    /// `SELECT * FROM source`
    pub fn from_source(source: impl Into<FromItem>) -> Self {
        Self {
            projection: vec![SelectItem::Wildcard],
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// `SELECT * FROM source WHERE filter`
    pub fn filter(source: impl Into<FromItem>, filter: impl Into<Expr>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::from_source(source)
        }
    }

    /// `SELECT exprs FROM source`
    pub fn project(
        exprs: impl IntoIterator<Item = impl Into<Expr>>,
        source: impl Into<FromItem>,
    ) -> Self {
        Self {
            projection: exprs.into_iter().map(|e| SelectItem::expr(e)).collect(),
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn add_select_item(&mut self, item: impl Into<SelectItem>) {
        self.projection.push(item.into());
    }

    pub fn add_select_expr(&mut self, expr: impl Into<Expr>) {
        self.projection.push(SelectItem::expr(expr));
    }

    pub fn add_join(&mut self, join: impl Into<Join>) {
        self.joins.push(join.into());
    }

    pub fn add_lateral_view(&mut self, view: LateralView) {
        self.lateral_views.push(view);
    }

    pub fn add_into_table(&mut self, table: impl Into<Table>) {
        self.into_tables.push(table.into());
    }

    /// Appends to the GROUP BY list, creating the clause if needed.
    pub fn add_group_by_expr(&mut self, expr: impl Into<Expr>) {
        self.group_by.get_or_insert_with(GroupBy::default).push(expr);
    }

    pub fn add_window_definition(&mut self, window: WindowDefinition) {
        self.window_definitions.push(window);
    }

    /// ANDs `expr` onto the current WHERE clause.
    pub fn and(&mut self, expr: impl Into<Expr>) {
        let expr = expr.into();
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr,
        });
    }

    pub fn select_item(&self, index: usize) -> Result<&SelectItem> {
        error::get("projection", &self.projection, index)
    }

    pub fn join(&self, index: usize) -> Result<&Join> {
        error::get("joins", &self.joins, index)
    }

    #[deprecated(note = "use `join(0)` or iterate `joins`")]
    pub fn first_join(&self) -> Result<&Join> {
        self.join(0)
            .map_err(|err| err.context("PlainSelect::first_join"))
    }

    pub fn mysql_mut(&mut self) -> &mut MySqlOptions {
        self.mysql.get_or_insert_with(MySqlOptions::default)
    }

    pub fn oracle_mut(&mut self) -> &mut OracleOptions {
        self.oracle.get_or_insert_with(OracleOptions::default)
    }

    pub fn informix_mut(&mut self) -> &mut InformixOptions {
        self.informix.get_or_insert_with(InformixOptions::default)
    }

    pub fn streaming_mut(&mut self) -> &mut StreamingOptions {
        self.streaming.get_or_insert_with(StreamingOptions::default)
    }
}

impl PlainSelectBuilder {
    pub fn item(mut self, item: impl Into<SelectItem>) -> Self {
        self.select.add_select_item(item);
        self
    }

    pub fn expr(mut self, expr: impl Into<Expr>) -> Self {
        self.select.add_select_expr(expr);
        self
    }

    pub fn wildcard(self) -> Self {
        self.item(SelectItem::Wildcard)
    }

    pub fn from(mut self, source: impl Into<FromItem>) -> Self {
        self.select.source = Some(source.into());
        self
    }

    pub fn only(mut self) -> Self {
        self.select.using_only = true;
        self
    }

    pub fn join(mut self, join: impl Into<Join>) -> Self {
        self.select.add_join(join);
        self
    }

    pub fn lateral_view(mut self, view: LateralView) -> Self {
        self.select.add_lateral_view(view);
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.select.and(filter);
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.select.group_by = Some(group_by);
        self
    }

    pub fn having(mut self, having: impl Into<Expr>) -> Self {
        self.select.having = Some(having.into());
        self
    }

    pub fn qualify(mut self, qualify: impl Into<Expr>) -> Self {
        self.select.qualify = Some(qualify.into());
        self
    }

    pub fn distinct(mut self, distinct: Distinct) -> Self {
        self.select.distinct = Some(distinct);
        self
    }

    pub fn bigquery(mut self, qualifier: BigQueryQualifier) -> Self {
        self.select.bigquery = Some(qualifier);
        self
    }

    pub fn top(mut self, top: Top) -> Self {
        self.select.top = Some(top);
        self
    }

    pub fn optimize_for(mut self, rows: u64) -> Self {
        self.select.optimize_for = Some(OptimizeFor::new(rows));
        self
    }

    pub fn preferring(mut self, preferring: Preferring) -> Self {
        self.select.preferring = Some(preferring);
        self
    }

    pub fn for_xml_path(mut self, path: impl Into<String>) -> Self {
        self.select.for_xml_path = Some(path.into());
        self
    }

    pub fn window(mut self, window: WindowDefinition) -> Self {
        self.select.add_window_definition(window);
        self
    }

    pub fn using_final(mut self) -> Self {
        self.select.using_final = true;
        self
    }

    pub fn into_table(mut self, table: impl Into<Table>) -> Self {
        self.select.add_into_table(table);
        self
    }

    pub fn straight_join(mut self) -> Self {
        self.select.mysql_mut().straight_join = true;
        self
    }

    pub fn sql_calc_found_rows(mut self) -> Self {
        self.select.mysql_mut().sql_calc_found_rows = true;
        self
    }

    pub fn cache_flag(mut self, flag: CacheFlag) -> Self {
        self.select.mysql_mut().cache_flag = Some(flag);
        self
    }

    pub fn oracle_hint(mut self, hint: impl Into<String>) -> Self {
        self.select.oracle_mut().hint = Some(OracleHint::new(hint));
        self
    }

    pub fn hierarchical(mut self, hierarchical: Hierarchical) -> Self {
        self.select.oracle_mut().hierarchical = Some(hierarchical);
        self
    }

    pub fn skip(mut self, rows: impl Into<Expr>) -> Self {
        self.select.informix_mut().skip = Some(Skip::new(rows));
        self
    }

    pub fn first(mut self, first: First) -> Self {
        self.select.informix_mut().first = Some(first);
        self
    }

    pub fn into_temp_table(mut self, table: impl Into<Table>) -> Self {
        self.select.informix_mut().into_temp_table = Some(table.into());
        self
    }

    pub fn with_no_log(mut self) -> Self {
        self.select.informix_mut().with_no_log = true;
        self
    }

    pub fn streaming_window(mut self, window: StreamingWindow) -> Self {
        self.select.streaming_mut().window = Some(window);
        self
    }

    pub fn emit_changes(mut self) -> Self {
        self.select.streaming_mut().emit_changes = true;
        self
    }

    pub fn build(self) -> PlainSelect {
        self.select
    }
}

impl From<PlainSelectBuilder> for PlainSelect {
    fn from(value: PlainSelectBuilder) -> Self {
        value.build()
    }
}
