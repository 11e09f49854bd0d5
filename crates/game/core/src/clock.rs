//! Monotonic simulation clock.
use std::fmt;

/// Point on the monotonic simulation timeline, in time units (milliseconds by default).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Time units elapsed since `earlier`; zero if `earlier` lies in the future.
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Returns true once at least `duration` units have passed since `started_at`.
    pub fn has_elapsed(self, started_at: Tick, duration: u64) -> bool {
        self.since(started_at) >= duration
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl std::ops::AddAssign<u64> for Tick {
    fn add_assign(&mut self, rhs: u64) {
        self.0 = self.0.saturating_add(rhs);
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_saturates_for_future_start() {
        assert_eq!(Tick(100).since(Tick(400)), 0);
        assert_eq!(Tick(900).since(Tick(100)), 800);
    }

    #[test]
    fn has_elapsed_is_inclusive() {
        assert!(!Tick(899).has_elapsed(Tick(100), 800));
        assert!(Tick(900).has_elapsed(Tick(100), 800));
    }
}
