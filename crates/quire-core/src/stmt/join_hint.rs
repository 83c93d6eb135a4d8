/// T-SQL join hint placed between the join type and the `JOIN` keyword, as
/// in `INNER HASH JOIN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JoinHint {
    Loop,
    Hash,
    Merge,
    Remote,
}
