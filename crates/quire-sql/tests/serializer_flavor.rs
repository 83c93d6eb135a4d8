use pretty_assertions::assert_eq;
use quire_sql::stmt::{Expr, Join, Name, PlainSelect, Table, Value};
use quire_sql::{Render, Serializer};

fn join() -> Join {
    Join::left(
        Table::new("orders").alias("o"),
        Expr::eq(Expr::column("a.id"), Expr::column("o.id")),
    )
}

#[test]
fn generic_leaves_identifiers_unquoted() {
    assert_eq!(
        join().render_with(&Serializer::generic()),
        "LEFT JOIN orders AS o ON a.id = o.id"
    );
    assert_eq!(join().render(), join().render_with(&Serializer::default()));
}

#[test]
fn postgresql_quotes_identifiers() {
    assert_eq!(
        join().render_with(&Serializer::postgresql()),
        r#"LEFT JOIN "orders" AS "o" ON "a"."id" = "o"."id""#
    );
}

#[test]
fn sqlite_quotes_like_postgresql() {
    assert_eq!(
        join().render_with(&Serializer::sqlite()),
        join().render_with(&Serializer::postgresql())
    );
}

#[test]
fn mysql_uses_backticks() {
    assert_eq!(
        join().render_with(&Serializer::mysql()),
        "LEFT JOIN `orders` AS `o` ON `a`.`id` = `o`.`id`"
    );
}

#[test]
fn embedded_quotes_are_doubled() {
    let table = Table::new(Name::new([r#"we"ird"#]));

    assert_eq!(
        table.render_with(&Serializer::postgresql()),
        r#""we""ird""#
    );
    assert_eq!(
        Table::new(Name::new(["a`b"])).render_with(&Serializer::mysql()),
        "`a``b`"
    );
}

#[test]
fn function_names_are_not_quoted() {
    let expr = Expr::func("COUNT", [Expr::column("id")]);
    assert_eq!(expr.render_with(&Serializer::postgresql()), r#"COUNT("id")"#);
}

#[test]
fn string_literals_escape_quotes() {
    assert_eq!(Value::from("it's").render(), "'it''s'");
    assert_eq!(Value::Null.render(), "NULL");
    assert_eq!(Value::Bool(true).render(), "TRUE");
}

#[test]
fn serialize_with_flavor() {
    let select = PlainSelect::project([Expr::column("id")], "users");

    assert_eq!(
        Serializer::mysql().serialize(&select),
        "SELECT `id` FROM `users`;"
    );
}
