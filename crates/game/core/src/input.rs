//! Per-frame input state.
use bitflags::bitflags;

use crate::geometry::Vec2;

bitflags! {
    /// Controls held during one frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InputState: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// Toggle the player's light.
        const LIGHT = 1 << 4;
        /// Toggle the level pause state.
        const PAUSE = 1 << 5;
    }
}

impl InputState {
    /// Movement direction (not normalized). Up wins over down, right over left.
    pub fn direction(self) -> Vec2 {
        let y = if self.contains(Self::UP) {
            -1.0
        } else if self.contains(Self::DOWN) {
            1.0
        } else {
            0.0
        };
        let x = if self.contains(Self::RIGHT) {
            1.0
        } else if self.contains(Self::LEFT) {
            -1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_resolve_by_priority() {
        let input = InputState::UP | InputState::DOWN | InputState::LEFT | InputState::RIGHT;
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));
        assert_eq!(InputState::empty().direction(), Vec2::ZERO);
        assert_eq!((InputState::LEFT | InputState::DOWN).direction(), Vec2::new(-1.0, 1.0));
    }
}
