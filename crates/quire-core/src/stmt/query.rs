use super::*;

/// A complete SELECT statement: an optional `WITH`, a body, and the clauses
/// that apply to the body as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Any CTEs
    pub with: Option<With>,

    /// A single `SELECT` or a set operation
    pub body: SetExpr,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    pub limit: Option<Limit>,

    pub offset: Option<Offset>,

    pub fetch: Option<Fetch>,

    /// FOR { UPDATE | SHARE }
    pub locks: Vec<Lock>,
}

#[derive(Debug)]
pub struct QueryBuilder {
    query: Query,
}

impl Query {
    pub fn new(body: impl Into<SetExpr>) -> Self {
        Self {
            with: None,
            body: body.into(),
            order_by: None,
            limit: None,
            offset: None,
            fetch: None,
            locks: vec![],
        }
    }

    pub fn builder(body: impl Into<SetExpr>) -> QueryBuilder {
        QueryBuilder {
            query: Query::new(body),
        }
    }

    /// `SELECT * FROM source WHERE filter`
    pub fn filter(source: impl Into<FromItem>, filter: impl Into<Expr>) -> Self {
        Self::new(PlainSelect::filter(source, filter))
    }

    /// Whether the query is nothing more than its body.
    pub fn is_bare(&self) -> bool {
        self.with.is_none()
            && self.order_by.is_none()
            && self.limit.is_none()
            && self.offset.is_none()
            && self.fetch.is_none()
            && self.locks.is_empty()
    }

    /// Combines this query's body with `query` using `UNION`. Successive
    /// unions extend the same operand list.
    pub fn union(&mut self, query: impl Into<Self>) {
        self.set_op(SetOp::Union, false, query.into());
    }

    pub fn union_all(&mut self, query: impl Into<Self>) {
        self.set_op(SetOp::Union, true, query.into());
    }

    fn set_op(&mut self, op: SetOp, all: bool, rhs: Query) {
        let rhs = SetExpr::from(rhs);

        match &mut self.body {
            SetExpr::SetOp(lhs) if lhs.op == op && lhs.all == all => {
                lhs.operands.push(rhs);
            }
            me => {
                let lhs = std::mem::take(me);
                *me = SetExpr::SetOp(ExprSetOp {
                    op,
                    all,
                    operands: vec![lhs, rhs],
                });
            }
        }
    }
}

impl QueryBuilder {
    pub fn with(mut self, with: impl Into<With>) -> Self {
        self.query.with = Some(with.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.query.order_by = Some(order_by.into());
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: Offset) -> Self {
        self.query.offset = Some(offset);
        self
    }

    pub fn fetch(mut self, fetch: Fetch) -> Self {
        self.query.fetch = Some(fetch);
        self
    }

    pub fn lock(mut self, lock: Lock) -> Self {
        self.query.locks.push(lock);
        self
    }

    pub fn locks(mut self, locks: impl Into<Vec<Lock>>) -> Self {
        self.query.locks = locks.into();
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}

impl From<PlainSelect> for Query {
    fn from(value: PlainSelect) -> Self {
        Self::new(value)
    }
}

impl From<SetExpr> for Query {
    fn from(value: SetExpr) -> Self {
        Self::new(value)
    }
}

impl From<QueryBuilder> for Query {
    fn from(value: QueryBuilder) -> Self {
        value.build()
    }
}
