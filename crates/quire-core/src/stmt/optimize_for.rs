/// DB2 `OPTIMIZE FOR n ROWS`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OptimizeFor {
    pub rows: u64,
}

impl OptimizeFor {
    pub fn new(rows: u64) -> Self {
        Self { rows }
    }
}
