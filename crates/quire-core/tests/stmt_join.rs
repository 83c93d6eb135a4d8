use pretty_assertions::assert_eq;
use quire_core::stmt::{Column, Expr, Join, JoinWindow, WindowDuration};

#[test]
fn on_expressions_keep_insertion_order() {
    let mut join = Join::new("b");
    join.add_on_expr(Expr::eq(Expr::column("a.id"), Expr::column("b.id")));
    join.add_on_expr(Expr::is_not_null(Expr::column("b.name")));

    assert_eq!(join.on.len(), 2);
    assert_eq!(
        join.on[0],
        Expr::eq(Expr::column("a.id"), Expr::column("b.id"))
    );
}

#[test]
fn set_on_exprs_replaces() {
    let mut join = Join::left("b", Expr::raw("1 = 1"));
    join.set_on_exprs([Expr::raw("x"), Expr::raw("y")]);

    assert_eq!(join.on, vec![Expr::raw("x"), Expr::raw("y")]);
}

#[test]
fn using_columns() {
    let mut join = Join::new("t");
    join.add_using_column("id");
    join.add_using_column("name");
    assert_eq!(join.using, vec![Column::new("id"), Column::new("name")]);

    join.set_using_columns([Column::new("code")]);
    assert_eq!(join.using, vec![Column::new("code")]);
}

#[test]
#[allow(deprecated)]
fn first_on_expr() {
    let join = Join::new("t");
    let err = join.on_expr().unwrap_err();
    assert!(err.is_index_out_of_range());
    assert_eq!(
        err.to_string(),
        "Join::on_expr(): index out of range: on[0] (len 0)"
    );

    let join = Join::inner("t", Expr::raw("a"));
    assert_eq!(join.on_expr().unwrap(), &Expr::raw("a"));
}

#[test]
#[allow(deprecated)]
fn set_on_expr_inserts_first() {
    let mut join = Join::inner("t", Expr::raw("second"));
    join.set_on_expr(Expr::raw("first"));

    assert_eq!(join.on, vec![Expr::raw("first"), Expr::raw("second")]);
    assert_eq!(join.on_expr().unwrap(), &Expr::raw("first"));
}

#[test]
fn window_join() {
    let join = Join::new("t");
    assert!(!join.is_window_join());

    let join = Join::builder("t")
        .window(JoinWindow::new(WindowDuration::hours(1)))
        .build();
    assert!(join.is_window_join());
}

#[test]
fn simple_constructor() {
    let join = Join::simple("t2");

    assert!(join.simple);
    assert!(join.on.is_empty());
    assert_eq!(join.source.as_table().map(|t| t.name.parts().len()), Some(1));
}
