//! Hinged door swing.

/// Fully open hinge angle in degrees.
pub const DOOR_MAX_ANGLE: f32 = 90.0;

/// Remaining distance below which the door snaps onto its target.
pub const DOOR_SNAP_EPSILON: f32 = 0.1;

/// Hinge angle of the front-wall door.
///
/// The door is logically bistable (closed target 0°, open target 90°) but
/// the angle itself is continuous: each tick it moves a fixed step toward
/// the target without ever passing it, and snaps once it is within
/// [`DOOR_SNAP_EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorAnimation {
    angle_deg: f32,
    step_deg: f32,
}

impl DoorAnimation {
    /// A closed door that swings `step_deg` per tick.
    #[must_use]
    pub fn new(step_deg: f32) -> Self {
        Self {
            angle_deg: 0.0,
            step_deg: step_deg.abs(),
        }
    }

    /// Current hinge angle in degrees, always within `[0, 90]`.
    #[must_use]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Target angle for the given open intent.
    #[must_use]
    pub fn target_deg(requested_open: bool) -> f32 {
        if requested_open {
            DOOR_MAX_ANGLE
        } else {
            0.0
        }
    }

    /// Whether the door has reached the target for `requested_open`.
    #[must_use]
    pub fn is_at_rest(&self, requested_open: bool) -> bool {
        self.angle_deg == Self::target_deg(requested_open)
    }

    /// Change the per-tick swing; takes effect on the next tick.
    pub fn set_step(&mut self, step_deg: f32) {
        self.step_deg = step_deg.abs();
    }

    /// Advance one tick toward the target for `requested_open`.
    pub fn advance(&mut self, requested_open: bool) {
        let target = Self::target_deg(requested_open);
        let diff = target - self.angle_deg;

        if diff.abs() > DOOR_SNAP_EPSILON {
            self.angle_deg += diff.signum() * self.step_deg.min(diff.abs());
        } else {
            self.angle_deg = target;
        }
        self.angle_deg = self.angle_deg.clamp(0.0, DOOR_MAX_ANGLE);
    }
}

impl Default for DoorAnimation {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_fully_in_thirty_ticks() {
        let mut door = DoorAnimation::default();
        for _ in 0..29 {
            door.advance(true);
        }
        assert_eq!(door.angle_deg(), 87.0);
        door.advance(true);
        assert_eq!(door.angle_deg(), 90.0);
        assert!(door.is_at_rest(true));
    }

    #[test]
    fn angle_is_monotonic_and_never_overshoots() {
        let mut door = DoorAnimation::new(7.0);
        let mut last = door.angle_deg();
        for _ in 0..40 {
            door.advance(true);
            assert!(door.angle_deg() >= last);
            assert!(door.angle_deg() <= DOOR_MAX_ANGLE);
            last = door.angle_deg();
        }
        assert_eq!(door.angle_deg(), DOOR_MAX_ANGLE);

        for _ in 0..40 {
            door.advance(false);
            assert!(door.angle_deg() <= last);
            assert!(door.angle_deg() >= 0.0);
            last = door.angle_deg();
        }
        assert_eq!(door.angle_deg(), 0.0);
    }

    #[test]
    fn reversing_mid_swing_heads_back() {
        let mut door = DoorAnimation::default();
        for _ in 0..10 {
            door.advance(true);
        }
        assert_eq!(door.angle_deg(), 30.0);
        door.advance(false);
        assert_eq!(door.angle_deg(), 27.0);
    }

    #[test]
    fn idle_ticks_at_rest_are_no_ops() {
        let mut door = DoorAnimation::default();
        door.advance(false);
        assert_eq!(door.angle_deg(), 0.0);
        assert!(door.is_at_rest(false));
        assert!(!door.is_at_rest(true));
    }

    #[test]
    fn snaps_within_epsilon() {
        let mut door = DoorAnimation::new(89.95);
        door.advance(true);
        assert!((door.angle_deg() - 89.95).abs() < 1e-4);
        door.advance(true);
        assert_eq!(door.angle_deg(), 90.0);
    }
}
