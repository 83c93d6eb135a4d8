use super::Table;

/// `FOR UPDATE [OF t] [NOWAIT | SKIP LOCKED]`
#[derive(Debug, Clone, PartialEq)]
pub struct Lock {
    pub kind: LockKind,
    pub of: Vec<Table>,
    pub wait: Option<LockWait>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LockKind {
    Update,
    Share,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LockWait {
    Nowait,
    SkipLocked,
}

impl Lock {
    pub fn update() -> Self {
        Self {
            kind: LockKind::Update,
            of: vec![],
            wait: None,
        }
    }

    pub fn share() -> Self {
        Self {
            kind: LockKind::Share,
            of: vec![],
            wait: None,
        }
    }

    pub fn of(mut self, table: impl Into<Table>) -> Self {
        self.of.push(table.into());
        self
    }

    pub fn nowait(mut self) -> Self {
        self.wait = Some(LockWait::Nowait);
        self
    }

    pub fn skip_locked(mut self) -> Self {
        self.wait = Some(LockWait::SkipLocked);
        self
    }
}
