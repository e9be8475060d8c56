//! Ceiling fan spin.

use serde::{Deserialize, Serialize};

/// Fan speed preset selectable at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FanSpeed {
    /// Lazy spin.
    Slow,
    /// Default spin.
    #[default]
    Normal,
    /// Fast spin.
    Fast,
}

/// Rotation of the fan hub and blades about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanAnimation {
    angle_deg: f32,
    degrees_per_tick: f32,
}

impl FanAnimation {
    /// A fan at angle zero spinning `degrees_per_tick`.
    #[must_use]
    pub fn new(degrees_per_tick: f32) -> Self {
        Self {
            angle_deg: 0.0,
            degrees_per_tick,
        }
    }

    /// Current angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Current speed in degrees per tick.
    #[must_use]
    pub fn degrees_per_tick(&self) -> f32 {
        self.degrees_per_tick
    }

    /// Switch speed. No interpolation; the next tick uses the new rate.
    pub fn set_degrees_per_tick(&mut self, degrees_per_tick: f32) {
        self.degrees_per_tick = degrees_per_tick;
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.angle_deg =
            (self.angle_deg + self.degrees_per_tick).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negatives
        if self.angle_deg >= 360.0 {
            self.angle_deg = 0.0;
        }
    }
}

impl Default for FanAnimation {
    fn default() -> Self {
        Self::new(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_full_turn(speed: f32) {
        let mut fan = FanAnimation::new(speed);
        for _ in 0..5 {
            fan.advance();
        }
        let start = fan.angle_deg();
        let ticks = (360.0 / speed).round() as u32;
        for _ in 0..ticks {
            fan.advance();
            assert!((0.0..360.0).contains(&fan.angle_deg()));
        }
        assert!(
            (fan.angle_deg() - start).abs() < 1e-3,
            "speed {speed}: expected {start}, got {}",
            fan.angle_deg()
        );
    }

    #[test]
    fn each_preset_is_periodic() {
        assert_full_turn(1.5);
        assert_full_turn(4.0);
        assert_full_turn(8.0);
    }

    #[test]
    fn speed_change_applies_on_next_tick() {
        let mut fan = FanAnimation::new(4.0);
        fan.advance();
        fan.set_degrees_per_tick(8.0);
        assert_eq!(fan.angle_deg(), 4.0);
        fan.advance();
        assert_eq!(fan.angle_deg(), 12.0);
    }

    #[test]
    fn wraps_past_full_turn() {
        let mut fan = FanAnimation::new(100.0);
        for _ in 0..4 {
            fan.advance();
        }
        assert_eq!(fan.angle_deg(), 40.0);
    }
}
