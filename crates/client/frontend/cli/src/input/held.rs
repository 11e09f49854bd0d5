//! Emulates held movement keys on top of press events.
use std::time::{Duration, Instant};

use game_core::InputState;

const DIRECTIONS: [InputState; 4] = [
    InputState::UP,
    InputState::DOWN,
    InputState::LEFT,
    InputState::RIGHT,
];

/// Tracks which controls are down for the next frame.
///
/// A movement key counts as held until it is released or `hold` has passed
/// since its latest press or auto-repeat. Toggles are queued and delivered
/// to exactly one frame.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    hold: Duration,
    pressed_at: [Option<Instant>; 4],
    pending: InputState,
}

impl HeldKeys {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            pressed_at: [None; 4],
            pending: InputState::empty(),
        }
    }

    /// Marks `direction` as held; pressing a direction releases its opposite.
    pub fn press(&mut self, direction: InputState, now: Instant) {
        for (slot, candidate) in DIRECTIONS.iter().enumerate() {
            if *candidate == direction {
                self.pressed_at[slot] = Some(now);
            } else if *candidate == opposite(direction) {
                self.pressed_at[slot] = None;
            }
        }
    }

    pub fn release(&mut self, direction: InputState) {
        for (slot, candidate) in DIRECTIONS.iter().enumerate() {
            if direction.contains(*candidate) {
                self.pressed_at[slot] = None;
            }
        }
    }

    /// Queues one-shot controls such as [`InputState::LIGHT`].
    pub fn trigger(&mut self, controls: InputState) {
        self.pending |= controls;
    }

    /// Controls for the frame starting at `now`; drains queued toggles.
    pub fn frame(&mut self, now: Instant) -> InputState {
        let mut input = std::mem::take(&mut self.pending);
        for (slot, direction) in DIRECTIONS.iter().enumerate() {
            match self.pressed_at[slot] {
                Some(at) if now.duration_since(at) < self.hold => input |= *direction,
                Some(_) => self.pressed_at[slot] = None,
                None => {}
            }
        }
        input
    }

    pub fn clear(&mut self) {
        self.pressed_at = [None; 4];
        self.pending = InputState::empty();
    }
}

fn opposite(direction: InputState) -> InputState {
    if direction == InputState::UP {
        InputState::DOWN
    } else if direction == InputState::DOWN {
        InputState::UP
    } else if direction == InputState::LEFT {
        InputState::RIGHT
    } else if direction == InputState::RIGHT {
        InputState::LEFT
    } else {
        InputState::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(150);

    #[test]
    fn press_holds_until_the_window_ends() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(InputState::RIGHT, start);

        assert_eq!(keys.frame(start + Duration::from_millis(100)), InputState::RIGHT);
        assert_eq!(keys.frame(start + HOLD), InputState::empty());
    }

    #[test]
    fn repeats_extend_the_hold() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(InputState::UP, start);
        keys.press(InputState::UP, start + Duration::from_millis(120));

        assert_eq!(keys.frame(start + Duration::from_millis(200)), InputState::UP);
    }

    #[test]
    fn opposite_press_and_release_clear_directions() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(InputState::LEFT, start);
        keys.press(InputState::UP, start);
        keys.press(InputState::RIGHT, start);
        assert_eq!(keys.frame(start), InputState::UP | InputState::RIGHT);

        keys.release(InputState::UP);
        assert_eq!(keys.frame(start), InputState::RIGHT);
    }

    #[test]
    fn toggles_are_delivered_once() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.trigger(InputState::LIGHT);
        keys.trigger(InputState::PAUSE);

        assert_eq!(keys.frame(start), InputState::LIGHT | InputState::PAUSE);
        assert_eq!(keys.frame(start), InputState::empty());
    }
}
