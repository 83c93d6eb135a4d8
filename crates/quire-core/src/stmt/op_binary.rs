/// Infix operators of [`ExprBinaryOp`](super::ExprBinaryOp). `Like` renders
/// as the `LIKE` keyword and `Concat` as `||`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Add,
    Sub,
    Mul,
    Div,
    Like,
    Concat,
}
