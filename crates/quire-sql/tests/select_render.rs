use pretty_assertions::assert_eq;
use quire_sql::stmt::{
    Alias, BigQueryQualifier, BinaryOp, CacheFlag, Distinct, Expr, ExprFunc, First, GroupBy,
    Hierarchical, Join, LateralView, OrderByExpr, PlainSelect, Preference, Preferring,
    SelectItem, StreamingWindow, Top, WindowDefinition, WindowDuration, WindowSpec,
};
use quire_sql::Render;

// ---------------------------------------------------------------------------
// Basic shapes
// ---------------------------------------------------------------------------

#[test]
fn select_distinct_star() {
    let select = PlainSelect::builder()
        .distinct(Distinct::default())
        .wildcard()
        .from("orders")
        .build();

    assert_eq!(select.render(), "SELECT DISTINCT * FROM orders");
}

#[test]
fn select_without_source_keeps_where() {
    let select = PlainSelect::builder()
        .expr(Expr::value(1i64))
        .filter(Expr::raw("1=1"))
        .build();

    assert_eq!(select.render(), "SELECT 1 WHERE 1=1");
}

#[test]
fn projection_items() {
    let select = PlainSelect::builder()
        .item(SelectItem::qualified_wildcard("o"))
        .item(SelectItem::aliased(Expr::column("o.total"), "t"))
        .item(SelectItem::aliased(Expr::column("c.name"), Alias::bare("n")))
        .from(quire_sql::stmt::Table::new("orders").alias(Alias::bare("o")))
        .build();

    assert_eq!(
        select.render(),
        "SELECT o.*, o.total AS t, c.name n FROM orders o"
    );
}

#[test]
fn joins_follow_source() {
    let mut select = PlainSelect::from_source("a");
    select.add_join(Join::simple("b"));
    select.add_join(Join::left(
        "c",
        Expr::eq(Expr::column("a.id"), Expr::column("c.id")),
    ));

    assert_eq!(
        select.render(),
        "SELECT * FROM a, b LEFT JOIN c ON a.id = c.id"
    );
}

#[test]
fn select_into_tables() {
    let select = PlainSelect::builder()
        .wildcard()
        .into_table("archive")
        .into_table("backup")
        .from("orders")
        .build();

    assert_eq!(select.render(), "SELECT * INTO archive, backup FROM orders");
}

#[test]
fn filter_operators() {
    let total = BinaryOp::Mul.apply(Expr::column("price"), Expr::column("qty"));
    let label = BinaryOp::Concat.apply(Expr::column("first"), Expr::column("last"));

    let mut select = PlainSelect::builder().expr(label).from("items").build();
    select.and(Expr::ge(Expr::nested(total), 100i64));
    select.and(Expr::lt(Expr::column("qty"), 5i64));
    select.and(Expr::like(Expr::column("sku"), "A%"));
    select.and(BinaryOp::Ne.apply(Expr::column("state"), "it's"));

    assert_eq!(
        select.render(),
        "SELECT first || last FROM items WHERE (price * qty) >= 100 AND qty < 5 \
         AND sku LIKE 'A%' AND state <> 'it''s'"
    );
}

// ---------------------------------------------------------------------------
// Head modifiers
// ---------------------------------------------------------------------------

#[test]
fn every_head_modifier_in_order() {
    let select = PlainSelect::builder()
        .straight_join()
        .oracle_hint("INDEX(t idx)")
        .skip(Expr::value(5i64))
        .first(First::new(Expr::value(10i64)))
        .distinct(Distinct::default())
        .bigquery(BigQueryQualifier::AsStruct)
        .top(Top::new(Expr::value(3i64)))
        .cache_flag(CacheFlag::SqlNoCache)
        .sql_calc_found_rows()
        .wildcard()
        .build();

    assert_eq!(
        select.render(),
        "SELECT STRAIGHT_JOIN /*+ INDEX(t idx) */ SKIP 5 FIRST 10 DISTINCT AS STRUCT TOP 3 \
         SQL_NO_CACHE SQL_CALC_FOUND_ROWS *"
    );
}

#[test]
fn head_order_ignores_setter_order() {
    let a = PlainSelect::builder()
        .top(Top::new(Expr::value(3i64)))
        .sql_calc_found_rows()
        .distinct(Distinct::unique())
        .straight_join()
        .wildcard()
        .from("t")
        .build();

    let b = PlainSelect::builder()
        .wildcard()
        .from("t")
        .straight_join()
        .distinct(Distinct::unique())
        .sql_calc_found_rows()
        .top(Top::new(Expr::value(3i64)))
        .build();

    assert_eq!(a.render(), b.render());
    assert_eq!(
        a.render(),
        "SELECT STRAIGHT_JOIN UNIQUE TOP 3 SQL_CALC_FOUND_ROWS * FROM t"
    );
}

#[test]
fn top_variants() {
    let select = PlainSelect::builder()
        .top(Top::new(Expr::value(10i64)).parenthesized().percent().with_ties())
        .wildcard()
        .from("t")
        .build();

    assert_eq!(select.render(), "SELECT TOP (10) PERCENT WITH TIES * FROM t");
}

#[test]
fn distinct_on() {
    let select = PlainSelect::builder()
        .distinct(Distinct::on([Expr::column("customer")]))
        .expr(Expr::column("customer"))
        .expr(Expr::column("total"))
        .from("orders")
        .build();

    assert_eq!(
        select.render(),
        "SELECT DISTINCT ON (customer) customer, total FROM orders"
    );
}

#[test]
fn bigquery_as_value() {
    let select = PlainSelect::builder()
        .bigquery(BigQueryQualifier::AsValue)
        .expr(Expr::column("x"))
        .from("t")
        .build();

    assert_eq!(select.render(), "SELECT AS VALUE x FROM t");
}

#[test]
fn informix_first_as_limit() {
    let select = PlainSelect::builder()
        .first(First::limit(Expr::value(3i64)))
        .wildcard()
        .from("t")
        .build();

    assert_eq!(select.render(), "SELECT LIMIT 3 * FROM t");
}

// ---------------------------------------------------------------------------
// Body clauses
// ---------------------------------------------------------------------------

#[test]
fn body_clauses_in_order() {
    let explode = ExprFunc::new("explode", [Expr::column("tags")]);
    let window = WindowSpec::default()
        .partition_by(Expr::column("id"))
        .order_by(OrderByExpr::desc(Expr::column("ts")));

    let select = PlainSelect::builder()
        .window(WindowDefinition::new("w", window))
        .qualify(Expr::raw("rn = 1"))
        .having(Expr::raw("COUNT(*) > 1"))
        .group_by(GroupBy::new([Expr::column("id")]))
        .preferring(Preferring::new(
            Preference::low(Expr::column("price")).prior_to(Preference::high(Expr::column("rating"))),
        ))
        .filter(Expr::raw("x > 1"))
        .using_final()
        .lateral_view(LateralView::new(explode).table_alias("t").column("tag"))
        .only()
        .expr(Expr::column("id"))
        .from("events")
        .build();

    assert_eq!(
        select.render(),
        "SELECT id FROM ONLY events LATERAL VIEW explode(tags) t AS tag FINAL WHERE x > 1 \
         PREFERRING LOW price PRIOR TO HIGH rating GROUP BY id HAVING COUNT(*) > 1 \
         QUALIFY rn = 1 WINDOW w AS (PARTITION BY id ORDER BY ts DESC)"
    );
}

#[test]
fn grouping_sets() {
    let group_by = GroupBy::default()
        .grouping_set([Expr::column("a")])
        .grouping_set([Expr::column("a"), Expr::column("b")]);

    let select = PlainSelect::builder()
        .expr(Expr::func("COUNT", [Expr::raw("*")]))
        .from("t")
        .group_by(group_by)
        .build();

    assert_eq!(
        select.render(),
        "SELECT COUNT(*) FROM t GROUP BY GROUPING SETS ((a), (a, b))"
    );
}

#[test]
fn hierarchical_query() {
    let hierarchical = Hierarchical::new(Expr::raw("PRIOR id = manager_id"))
        .start_with(Expr::is_null(Expr::column("manager_id")));

    let select = PlainSelect::builder()
        .expr(Expr::column("id"))
        .from("employees")
        .filter(Expr::raw("active = 1"))
        .hierarchical(hierarchical)
        .build();

    assert_eq!(
        select.render(),
        "SELECT id FROM employees WHERE active = 1 START WITH manager_id IS NULL \
         CONNECT BY PRIOR id = manager_id"
    );
}

#[test]
fn hierarchical_connect_first() {
    let hierarchical = Hierarchical::new(Expr::raw("PRIOR id = manager_id"))
        .start_with(Expr::is_null(Expr::column("manager_id")))
        .nocycle()
        .connect_first();

    let select = PlainSelect::builder()
        .expr(Expr::column("id"))
        .from("employees")
        .hierarchical(hierarchical)
        .build();

    assert_eq!(
        select.render(),
        "SELECT id FROM employees CONNECT BY NOCYCLE PRIOR id = manager_id \
         START WITH manager_id IS NULL"
    );
}

#[test]
fn empty_window_definitions_render_nothing() {
    let mut select = PlainSelect::from_source("t");
    select.window_definitions = vec![];
    select.into_tables = vec![];

    assert_eq!(select.render(), "SELECT * FROM t");
}

// ---------------------------------------------------------------------------
// Streaming
// ---------------------------------------------------------------------------

#[test]
fn streaming_window_and_emit_changes() {
    let tumbling = StreamingWindow::tumbling(WindowDuration::seconds(30));

    let a = PlainSelect::builder()
        .wildcard()
        .from("pageviews")
        .emit_changes()
        .streaming_window(tumbling)
        .group_by(GroupBy::new([Expr::column("region")]))
        .build();

    let b = PlainSelect::builder()
        .group_by(GroupBy::new([Expr::column("region")]))
        .streaming_window(tumbling)
        .emit_changes()
        .wildcard()
        .from("pageviews")
        .build();

    let expected = "SELECT * FROM pageviews WINDOW TUMBLING (SIZE 30 SECONDS) GROUP BY region EMIT CHANGES";
    assert_eq!(a.render(), expected);
    assert_eq!(b.render(), expected);
}

#[test]
fn hopping_and_session_windows() {
    let hopping =
        StreamingWindow::hopping(WindowDuration::minutes(5), WindowDuration::minutes(1));
    let select = PlainSelect::builder()
        .wildcard()
        .from("clicks")
        .streaming_window(hopping)
        .build();
    assert_eq!(
        select.render(),
        "SELECT * FROM clicks WINDOW HOPPING (SIZE 5 MINUTES, ADVANCE BY 1 MINUTE)"
    );

    let session = StreamingWindow::session(WindowDuration::seconds(60));
    let select = PlainSelect::builder()
        .wildcard()
        .from("clicks")
        .streaming_window(session)
        .build();
    assert_eq!(
        select.render(),
        "SELECT * FROM clicks WINDOW SESSION (60 SECONDS)"
    );
}

// ---------------------------------------------------------------------------
// Without a source
// ---------------------------------------------------------------------------

#[test]
fn source_gated_clauses_are_inert() {
    let select = PlainSelect::builder()
        .expr(Expr::value(1i64))
        .join(Join::simple("b"))
        .group_by(GroupBy::new([Expr::column("a")]))
        .having(Expr::raw("x"))
        .qualify(Expr::raw("y"))
        .using_final()
        .only()
        .emit_changes()
        .streaming_window(StreamingWindow::tumbling(WindowDuration::seconds(1)))
        .hierarchical(Hierarchical::new(Expr::raw("PRIOR a = b")))
        .filter(Expr::raw("1=1"))
        .build();

    assert_eq!(select.render(), "SELECT 1 WHERE 1=1");
}

// ---------------------------------------------------------------------------
// Tail
// ---------------------------------------------------------------------------

#[test]
fn informix_temp_table() {
    let select = PlainSelect::builder()
        .expr(Expr::column("id"))
        .into_table("archive")
        .from("orders")
        .into_temp_table("tmp")
        .with_no_log()
        .build();

    assert_eq!(
        select.render(),
        "SELECT id INTO archive FROM orders INTO TEMP tmp WITH NO LOG"
    );
}

#[test]
fn optimize_for_and_xml_path() {
    let select = PlainSelect::builder()
        .wildcard()
        .from("t")
        .optimize_for(10)
        .for_xml_path("''")
        .build();

    assert_eq!(
        select.render(),
        "SELECT * FROM t OPTIMIZE FOR 10 ROWS FOR XML PATH('')"
    );
}

#[test]
fn tail_renders_without_source() {
    let select = PlainSelect::builder()
        .expr(Expr::value(1i64))
        .with_no_log()
        .optimize_for(1)
        .build();

    assert_eq!(select.render(), "SELECT 1 WITH NO LOG OPTIMIZE FOR 1 ROWS");
}

#[test]
fn render_does_not_mutate() {
    let select = PlainSelect::filter("orders", Expr::raw("total > 10"));
    let before = select.clone();

    let first = select.render();
    let second = select.render();

    assert_eq!(first, second);
    assert_eq!(select, before);
}
