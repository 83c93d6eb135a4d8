use super::WindowDuration;

/// KSQL stream-stream join window: `WITHIN (1 HOUR)` or
/// `WITHIN (1 HOUR, 2 HOURS)` when the before and after bounds differ.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JoinWindow {
    pub before: WindowDuration,
    pub after: Option<WindowDuration>,
}

impl JoinWindow {
    pub fn new(duration: WindowDuration) -> Self {
        Self {
            before: duration,
            after: None,
        }
    }

    pub fn before_after(before: WindowDuration, after: WindowDuration) -> Self {
        Self {
            before,
            after: Some(after),
        }
    }

    pub fn is_before_after(&self) -> bool {
        self.after.is_some()
    }
}
