use crate::geometry::Vec2;

/// Distance and unit direction from an observer to a target point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensed {
    pub distance: f32,
    /// Zero when the target coincides with the observer.
    pub direction: Vec2,
}

pub fn sense(from: Vec2, target: Vec2) -> Sensed {
    let offset = target - from;
    let distance = offset.length();
    let direction = if distance > 0.0 {
        Vec2::new(offset.x / distance, offset.y / distance)
    } else {
        Vec2::ZERO
    };
    Sensed {
        distance,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_give_zero_direction() {
        let sensed = sense(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0));
        assert_eq!(sensed.distance, 0.0);
        assert_eq!(sensed.direction, Vec2::ZERO);
    }

    #[test]
    fn direction_is_unit_length_toward_target() {
        let sensed = sense(Vec2::new(0.0, 0.0), Vec2::new(-30.0, 40.0));
        assert!((sensed.distance - 50.0).abs() < 1e-5);
        assert!((sensed.direction.x + 0.6).abs() < 1e-6);
        assert!((sensed.direction.y - 0.8).abs() < 1e-6);
    }
}
