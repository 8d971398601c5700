//! Rotation as a pure function of loop time.

use tumble_common::Euler;

/// Milliseconds per radian about X.
pub const X_PERIOD_MS: f64 = 2000.0;
/// Milliseconds per radian about Y.
pub const Y_PERIOD_MS: f64 = 1000.0;

/// Rotation of the cube `t_ms` milliseconds after the loop started.
///
/// Derived, never accumulated: `x = t / 2000`, `y = t / 1000`, `z = 0`. Angles
/// grow without wrapping.
pub fn rotation_at(t_ms: f64) -> Euler {
    Euler {
        x: (t_ms / X_PERIOD_MS) as f32,
        y: (t_ms / Y_PERIOD_MS) as f32,
        z: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_closed_form() {
        for t in [0.0, 1.0, 16.6, 500.0, 2000.0, 12_345.678, 3.6e6] {
            let r = rotation_at(t);
            assert_eq!(r.x, (t / 2000.0) as f32);
            assert_eq!(r.y, (t / 1000.0) as f32);
            assert_eq!(r.z, 0.0);
        }
    }

    #[test]
    fn two_seconds_is_one_and_two_radians() {
        assert_eq!(rotation_at(2000.0), Euler::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn zero_is_identity() {
        assert_eq!(rotation_at(0.0), Euler::ZERO);
    }

    #[test]
    fn y_turns_twice_as_fast_as_x() {
        let r = rotation_at(7000.0);
        assert_eq!(r.y, 2.0 * r.x);
    }

    #[test]
    fn large_times_are_not_wrapped() {
        let r = rotation_at(100_000.0);
        assert!(r.y > std::f32::consts::TAU);
    }
}
