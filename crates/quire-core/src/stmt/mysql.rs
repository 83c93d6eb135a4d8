/// MySQL select modifiers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MySqlOptions {
    /// `SELECT STRAIGHT_JOIN ...`
    pub straight_join: bool,
    pub sql_calc_found_rows: bool,
    pub cache_flag: Option<CacheFlag>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CacheFlag {
    SqlCache,
    SqlNoCache,
}

impl CacheFlag {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::SqlCache => "SQL_CACHE",
            Self::SqlNoCache => "SQL_NO_CACHE",
        }
    }
}
