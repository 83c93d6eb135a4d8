use pretty_assertions::assert_eq;
use quire_sql::stmt::{
    Cte, Expr, Fetch, FromItem, Limit, Lock, Offset, OffsetRows, OrderBy, OrderByExpr,
    PlainSelect, Query, With,
};
use quire_sql::{Render, Serializer};

#[test]
fn with_order_limit_offset() {
    let recent = PlainSelect::filter("orders", Expr::raw("total > 100"));

    let query = Query::builder(PlainSelect::from_source("recent"))
        .with(With::new([Cte::new("recent", recent)]))
        .order_by(OrderByExpr::desc(Expr::column("total")))
        .limit(Limit::count(Expr::value(10i64)))
        .offset(Offset::new(Expr::value(20i64)))
        .build();

    assert_eq!(
        query.render(),
        "WITH recent AS (SELECT * FROM orders WHERE total > 100) SELECT * FROM recent \
         ORDER BY total DESC LIMIT 10 OFFSET 20"
    );
}

#[test]
fn recursive_cte_with_columns() {
    let cte = Cte::new("tree", PlainSelect::from_source("nodes")).column("id");
    let query = Query::builder(PlainSelect::from_source("tree"))
        .with(With::new([cte]).recursive())
        .build();

    assert_eq!(
        query.render(),
        "WITH RECURSIVE tree (id) AS (SELECT * FROM nodes) SELECT * FROM tree"
    );
}

#[test]
fn select_tail_follows_envelope() {
    let select = PlainSelect::builder()
        .wildcard()
        .from("t")
        .optimize_for(5)
        .for_xml_path("'row'")
        .build();

    let query = Query::builder(select)
        .fetch(Fetch::first(Expr::value(5i64)))
        .build();

    assert_eq!(
        query.render(),
        "SELECT * FROM t FETCH FIRST 5 ROWS ONLY OPTIMIZE FOR 5 ROWS FOR XML PATH('row')"
    );
}

#[test]
fn offset_and_fetch_variants() {
    let query = Query::builder(PlainSelect::from_source("t"))
        .order_by(OrderBy::new([OrderByExpr::asc(Expr::column("id"))]))
        .offset(Offset::new(Expr::value(10i64)).rows(OffsetRows::Rows))
        .fetch(Fetch::first(Expr::value(10i64)).percent().with_ties())
        .build();

    assert_eq!(
        query.render(),
        "SELECT * FROM t ORDER BY id ASC OFFSET 10 ROWS FETCH FIRST 10 PERCENT ROWS WITH TIES"
    );
}

#[test]
fn limit_all() {
    let query = Query::builder(PlainSelect::from_source("t"))
        .limit(Limit::All)
        .build();

    assert_eq!(query.render(), "SELECT * FROM t LIMIT ALL");
}

#[test]
fn order_siblings_by() {
    let query = Query::builder(PlainSelect::from_source("employees"))
        .order_by(OrderBy::new([OrderByExpr::from(Expr::column("name"))]).siblings())
        .build();

    assert_eq!(
        query.render(),
        "SELECT * FROM employees ORDER SIBLINGS BY name"
    );
}

#[test]
fn locking_clauses() {
    let query = Query::builder(PlainSelect::from_source("orders"))
        .lock(Lock::update().of("orders").skip_locked())
        .build();
    assert_eq!(
        query.render(),
        "SELECT * FROM orders FOR UPDATE OF orders SKIP LOCKED"
    );

    let query = Query::builder(PlainSelect::from_source("orders"))
        .lock(Lock::share().nowait())
        .build();
    assert_eq!(query.render(), "SELECT * FROM orders FOR SHARE NOWAIT");
}

// ---------------------------------------------------------------------------
// Set operations
// ---------------------------------------------------------------------------

#[test]
fn union_all() {
    let mut query = Query::new(PlainSelect::from_source("a"));
    query.union_all(PlainSelect::from_source("b"));

    assert_eq!(query.render(), "SELECT * FROM a UNION ALL SELECT * FROM b");
}

#[test]
fn union_of_three() {
    let mut query = Query::new(PlainSelect::from_source("a"));
    query.union(PlainSelect::from_source("b"));
    query.union(PlainSelect::from_source("c"));

    assert_eq!(
        query.render(),
        "SELECT * FROM a UNION SELECT * FROM b UNION SELECT * FROM c"
    );
}

#[test]
fn union_operand_with_limit_is_parenthesized() {
    let rhs = Query::builder(PlainSelect::from_source("b"))
        .limit(Limit::count(Expr::value(1i64)))
        .build();

    let mut query = Query::new(PlainSelect::from_source("a"));
    query.union(rhs);

    assert_eq!(
        query.render(),
        "SELECT * FROM a UNION (SELECT * FROM b LIMIT 1)"
    );
}

#[test]
fn order_by_applies_to_union() {
    let mut query = Query::new(PlainSelect::from_source("a"));
    query.union(PlainSelect::from_source("b"));
    query.order_by = Some(OrderByExpr::asc(Expr::column("id")).into());

    assert_eq!(
        query.render(),
        "SELECT * FROM a UNION SELECT * FROM b ORDER BY id ASC"
    );
}

// ---------------------------------------------------------------------------
// Subqueries
// ---------------------------------------------------------------------------

#[test]
fn scalar_subquery() {
    let max = PlainSelect::project([Expr::func("MAX", [Expr::column("total")])], "orders");
    let query = Query::filter(
        "orders",
        Expr::eq(Expr::column("total"), Expr::stmt(max)),
    );

    assert_eq!(
        query.render(),
        "SELECT * FROM orders WHERE total = (SELECT MAX(total) FROM orders)"
    );
}

#[test]
fn in_list_and_derived_table() {
    let inner = PlainSelect::filter("orders", Expr::in_list(Expr::column("status"), ["open", "held"]));
    let select = PlainSelect::from_source(FromItem::subquery(inner, Some("o".into())));

    assert_eq!(
        select.render(),
        "SELECT * FROM (SELECT * FROM orders WHERE status IN ('open', 'held')) AS o"
    );
}

#[test]
fn serialize_terminates_statement() {
    let query = Query::filter("orders", Expr::raw("total > 10"));

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT * FROM orders WHERE total > 10;"
    );
}
