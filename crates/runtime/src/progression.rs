//! Level unlock progression.
use crate::error::{Result, RuntimeError};

/// Tracks the highest unlocked level index.
///
/// Level 0 is always available. Winning a level raises the unlocked index to
/// that level's unlock target; it never goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    max_level: usize,
    level_count: usize,
}

impl Progression {
    pub fn new(level_count: usize) -> Self {
        Self {
            max_level: 0,
            level_count,
        }
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        index < self.level_count && index <= self.max_level
    }

    /// Checks that `index` exists and is unlocked.
    pub fn check(&self, index: usize) -> Result<()> {
        if index >= self.level_count {
            return Err(RuntimeError::UnknownLevel {
                index,
                count: self.level_count,
            });
        }
        if index > self.max_level {
            return Err(RuntimeError::LevelLocked {
                index,
                max_level: self.max_level,
            });
        }
        Ok(())
    }

    /// Records a win that unlocks `unlock`; returns true if a new level became available.
    pub fn record_win(&mut self, unlock: usize) -> bool {
        let unlock = unlock.min(self.level_count.saturating_sub(1));
        if unlock > self.max_level {
            self.max_level = unlock;
            return true;
        }
        false
    }
}
