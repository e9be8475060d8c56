use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::FanSpeed;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Tick rate and per-tick rates of the door and fan animations.
pub struct AnimationOptions {
    /// Fixed update interval in milliseconds.
    #[schemars(skip)]
    pub tick_interval_ms: u64,
    /// Degrees the door swings per tick.
    #[schemars(title = "Door Step", range(min = 0.5, max = 15.0), extend("step" = 0.5))]
    pub door_step: f32,
    /// Fan rotation per tick at the slow preset, in degrees.
    #[schemars(title = "Fan Slow", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub fan_slow: f32,
    /// Fan rotation per tick at the normal preset, in degrees.
    #[schemars(title = "Fan Normal", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub fan_normal: f32,
    /// Fan rotation per tick at the fast preset, in degrees.
    #[schemars(title = "Fan Fast", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub fan_fast: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: 16,
            door_step: 3.0,
            fan_slow: 1.5,
            fan_normal: 4.0,
            fan_fast: 8.0,
        }
    }
}

impl AnimationOptions {
    /// Degrees per tick for a fan preset.
    #[must_use]
    pub fn fan_degrees_per_tick(&self, speed: FanSpeed) -> f32 {
        match speed {
            FanSpeed::Slow => self.fan_slow,
            FanSpeed::Normal => self.fan_normal,
            FanSpeed::Fast => self.fan_fast,
        }
    }
}
