use super::{Column, Expr, FromItem, JoinHint, JoinWindow};
use crate::{error, Result};

/// One relation joined onto a `FROM` source, with its qualifiers and
/// predicates.
///
/// The join kind is held in [`JoinKind`]. Use the `set_*` mutators (or
/// [`JoinBuilder`]) to change it: setting `INNER`, `OUTER`, `LEFT` or `RIGHT`
/// clears the qualifiers it contradicts. Writing to `kind` directly bypasses
/// that and may produce nonsensical, but still renderable, SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The joined relation
    pub source: FromItem,

    /// NATURAL / LEFT / RIGHT / FULL / CROSS / OUTER / INNER / SEMI
    pub kind: JoinKind,

    /// ClickHouse `GLOBAL` prefix
    pub global: bool,

    /// MySQL `STRAIGHT_JOIN` in place of `JOIN`
    pub straight: bool,

    /// T-SQL `CROSS APPLY` / `OUTER APPLY`
    pub apply: bool,

    /// Comma join: the relation is listed in `FROM a, b` without a keyword.
    pub simple: bool,

    /// Join hint, only emitted when neither `STRAIGHT_JOIN` nor `APPLY` is.
    pub hint: Option<JoinHint>,

    /// `ON` predicates, emitted in order. Some dialects accept several.
    pub on: Vec<Expr>,

    /// `USING (...)` columns
    pub using: Vec<Column>,

    /// KSQL `WITHIN` window
    pub window: Option<JoinWindow>,
}

/// The join-kind qualifiers of a join.
///
/// Each qualifier is an independent flag. The guarded setters on [`Join`]
/// clear contradicting flags, but some combinations (`NATURAL LEFT`,
/// `FULL` with `INNER`) are left alone. When more than one directional flag
/// is set, [`JoinKind::ty`] picks the one that renders.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct JoinKind {
    pub natural: bool,
    pub left: bool,
    pub right: bool,
    pub full: bool,
    pub cross: bool,
    pub outer: bool,
    pub inner: bool,
    pub semi: bool,
}

/// The directional keyword emitted before `JOIN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JoinType {
    Left,
    Right,
    Full,
    Cross,
}

/// The keyword emitted between the directional keyword and `JOIN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JoinKeyword {
    Outer,
    Inner,
    Semi,
}

impl JoinKind {
    /// The directional keyword that renders. `RIGHT` wins over `FULL`, which
    /// wins over `LEFT`, which wins over `CROSS`.
    pub fn ty(&self) -> Option<JoinType> {
        if self.right {
            Some(JoinType::Right)
        } else if self.full {
            Some(JoinType::Full)
        } else if self.left {
            Some(JoinType::Left)
        } else if self.cross {
            Some(JoinType::Cross)
        } else {
            None
        }
    }

    /// The keyword that renders. `OUTER` wins over `INNER`, which wins over
    /// `SEMI`.
    pub fn keyword(&self) -> Option<JoinKeyword> {
        if self.outer {
            Some(JoinKeyword::Outer)
        } else if self.inner {
            Some(JoinKeyword::Inner)
        } else if self.semi {
            Some(JoinKeyword::Semi)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct JoinBuilder {
    join: Join,
}

impl Join {
    /// A plain `JOIN <source>` with no qualifiers.
    pub fn new(source: impl Into<FromItem>) -> Self {
        Self {
            source: source.into(),
            kind: JoinKind::default(),
            global: false,
            straight: false,
            apply: false,
            simple: false,
            hint: None,
            on: vec![],
            using: vec![],
            window: None,
        }
    }

    pub fn builder(source: impl Into<FromItem>) -> JoinBuilder {
        JoinBuilder {
            join: Join::new(source),
        }
    }

    /// A comma join, rendered as `, <source>` in the `FROM` list.
    pub fn simple(source: impl Into<FromItem>) -> Self {
        Self::builder(source).simple().build()
    }

    /// `LEFT JOIN <source> ON <on>`
    pub fn left(source: impl Into<FromItem>, on: impl Into<Expr>) -> Self {
        Self::builder(source).left().on(on).build()
    }

    /// `INNER JOIN <source> ON <on>`
    pub fn inner(source: impl Into<FromItem>, on: impl Into<Expr>) -> Self {
        Self::builder(source).inner().on(on).build()
    }

    pub fn is_inner(&self) -> bool {
        self.kind.inner
    }

    pub fn is_outer(&self) -> bool {
        self.kind.outer
    }

    pub fn is_semi(&self) -> bool {
        self.kind.semi
    }

    pub fn is_left(&self) -> bool {
        self.kind.left
    }

    pub fn is_right(&self) -> bool {
        self.kind.right
    }

    pub fn is_full(&self) -> bool {
        self.kind.full
    }

    pub fn is_cross(&self) -> bool {
        self.kind.cross
    }

    pub fn is_natural(&self) -> bool {
        self.kind.natural
    }

    /// Whether the join means an INNER join: either the `INNER` keyword is
    /// set, or no qualifier that would make it something else is.
    pub fn is_inner_join(&self) -> bool {
        let kind = &self.kind;
        kind.inner
            || !(kind.left || kind.right || kind.full || kind.outer || kind.cross || kind.natural)
    }

    pub fn is_window_join(&self) -> bool {
        self.window.is_some()
    }

    /// Sets the `INNER` keyword. Setting it clears `LEFT`, `RIGHT`, `OUTER`,
    /// `CROSS` and `NATURAL`.
    pub fn set_inner(&mut self, inner: bool) {
        self.update_kind(|kind| {
            if inner {
                kind.left = false;
                kind.right = false;
                kind.outer = false;
                kind.cross = false;
                kind.natural = false;
            }
            kind.inner = inner;
        });
    }

    /// Sets the `OUTER` keyword. Setting it clears `INNER`.
    pub fn set_outer(&mut self, outer: bool) {
        self.update_kind(|kind| {
            if outer {
                kind.inner = false;
            }
            kind.outer = outer;
        });
    }

    pub fn set_semi(&mut self, semi: bool) {
        self.update_kind(|kind| kind.semi = semi);
    }

    /// Sets `LEFT`. Setting it clears `INNER` and `RIGHT`.
    pub fn set_left(&mut self, left: bool) {
        self.update_kind(|kind| {
            if left {
                kind.inner = false;
                kind.right = false;
            }
            kind.left = left;
        });
    }

    /// Sets `RIGHT`. Setting it clears `INNER` and `LEFT`.
    pub fn set_right(&mut self, right: bool) {
        self.update_kind(|kind| {
            if right {
                kind.inner = false;
                kind.left = false;
            }
            kind.right = right;
        });
    }

    pub fn set_full(&mut self, full: bool) {
        self.update_kind(|kind| kind.full = full);
    }

    pub fn set_cross(&mut self, cross: bool) {
        self.update_kind(|kind| kind.cross = cross);
    }

    pub fn set_natural(&mut self, natural: bool) {
        self.update_kind(|kind| kind.natural = natural);
    }

    /// Returns the first `ON` expression.
    ///
    /// Fails with an index out of range error when the join has no `ON`
    /// predicate.
    #[deprecated(note = "a join may carry several ON expressions; use `on`")]
    pub fn on_expr(&self) -> Result<&Expr> {
        error::get("on", &self.on, 0).map_err(|err| err.context("Join::on_expr"))
    }

    /// Inserts `expr` as the first `ON` expression.
    #[deprecated(note = "use `add_on_expr` or `set_on_exprs`")]
    pub fn set_on_expr(&mut self, expr: impl Into<Expr>) {
        self.on.insert(0, expr.into());
    }

    pub fn add_on_expr(&mut self, expr: impl Into<Expr>) {
        self.on.push(expr.into());
    }

    /// Replaces all `ON` expressions.
    pub fn set_on_exprs(&mut self, exprs: impl IntoIterator<Item = Expr>) {
        self.on.clear();
        self.on.extend(exprs);
    }

    pub fn add_using_column(&mut self, column: impl Into<Column>) {
        self.using.push(column.into());
    }

    /// Replaces all `USING` columns.
    pub fn set_using_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.using.clear();
        self.using.extend(columns);
    }

    fn update_kind(&mut self, f: impl FnOnce(&mut JoinKind)) {
        let prev = self.kind;
        f(&mut self.kind);

        if prev != self.kind {
            tracing::trace!(?prev, kind = ?self.kind, "join kind updated");
        }
    }
}

impl JoinBuilder {
    pub fn inner(mut self) -> Self {
        self.join.set_inner(true);
        self
    }

    pub fn outer(mut self) -> Self {
        self.join.set_outer(true);
        self
    }

    pub fn semi(mut self) -> Self {
        self.join.set_semi(true);
        self
    }

    pub fn left(mut self) -> Self {
        self.join.set_left(true);
        self
    }

    pub fn right(mut self) -> Self {
        self.join.set_right(true);
        self
    }

    pub fn full(mut self) -> Self {
        self.join.set_full(true);
        self
    }

    pub fn cross(mut self) -> Self {
        self.join.set_cross(true);
        self
    }

    pub fn natural(mut self) -> Self {
        self.join.set_natural(true);
        self
    }

    pub fn global(mut self) -> Self {
        self.join.global = true;
        self
    }

    pub fn straight(mut self) -> Self {
        self.join.straight = true;
        self
    }

    pub fn apply(mut self) -> Self {
        self.join.apply = true;
        self
    }

    pub fn simple(mut self) -> Self {
        self.join.simple = true;
        self
    }

    pub fn hint(mut self, hint: JoinHint) -> Self {
        self.join.hint = Some(hint);
        self
    }

    pub fn on(mut self, expr: impl Into<Expr>) -> Self {
        self.join.add_on_expr(expr);
        self
    }

    pub fn using(mut self, column: impl Into<Column>) -> Self {
        self.join.add_using_column(column);
        self
    }

    pub fn window(mut self, window: JoinWindow) -> Self {
        self.join.window = Some(window);
        self
    }

    pub fn build(self) -> Join {
        self.join
    }
}

impl From<JoinBuilder> for Join {
    fn from(value: JoinBuilder) -> Self {
        value.build()
    }
}
