//! Per-tick animation state machines.
//!
//! The door and the ceiling fan each advance exactly once per tick,
//! independently of the camera and of the current view mode.

/// Hinged door swinging toward its open/closed target.
pub mod door;
/// Ceiling fan spinning at one of three presets.
pub mod fan;

pub use door::{DoorAnimation, DOOR_MAX_ANGLE};
pub use fan::{FanAnimation, FanSpeed};
