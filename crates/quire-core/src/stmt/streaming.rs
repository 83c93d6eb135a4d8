use super::WindowDuration;

/// KSQL streaming clauses.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StreamingOptions {
    /// `WINDOW TUMBLING (SIZE 30 SECONDS)` and friends
    pub window: Option<StreamingWindow>,

    /// `EMIT CHANGES`
    pub emit_changes: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StreamingWindow {
    Hopping {
        size: WindowDuration,
        advance: WindowDuration,
    },
    Session {
        size: WindowDuration,
    },
    Tumbling {
        size: WindowDuration,
    },
}

impl StreamingWindow {
    pub fn tumbling(size: WindowDuration) -> Self {
        Self::Tumbling { size }
    }

    pub fn hopping(size: WindowDuration, advance: WindowDuration) -> Self {
        Self::Hopping { size, advance }
    }

    pub fn session(size: WindowDuration) -> Self {
        Self::Session { size }
    }
}
