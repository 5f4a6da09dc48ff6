#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    #[default]
    BeforeInit,
    Dirty,
    Clean,
}

impl StateSyncStatus {
    pub fn needs_compute(self) -> bool {
        !matches!(self, Self::Clean)
    }
}
