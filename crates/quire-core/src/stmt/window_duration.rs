/// A length of time used by streaming windows, such as `30 SECONDS`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowDuration {
    pub value: u64,
    pub unit: TimeUnit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl WindowDuration {
    pub fn new(value: u64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    pub fn seconds(value: u64) -> Self {
        Self::new(value, TimeUnit::Second)
    }

    pub fn minutes(value: u64) -> Self {
        Self::new(value, TimeUnit::Minute)
    }

    pub fn hours(value: u64) -> Self {
        Self::new(value, TimeUnit::Hour)
    }
}

impl TimeUnit {
    /// The unit keyword, singular when `value` is one.
    pub fn keyword(self, value: u64) -> &'static str {
        let plural = value != 1;
        match (self, plural) {
            (Self::Millisecond, false) => "MILLISECOND",
            (Self::Millisecond, true) => "MILLISECONDS",
            (Self::Second, false) => "SECOND",
            (Self::Second, true) => "SECONDS",
            (Self::Minute, false) => "MINUTE",
            (Self::Minute, true) => "MINUTES",
            (Self::Hour, false) => "HOUR",
            (Self::Hour, true) => "HOURS",
            (Self::Day, false) => "DAY",
            (Self::Day, true) => "DAYS",
        }
    }
}
