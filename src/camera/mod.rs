//! Camera system for the walkthrough and the floor plan.
//!
//! Provides the first-person pose controller with room-bound clamping, the
//! perspective camera it drives, and the GPU uniform both views share.

/// Room extents and the eye clamp derived from them.
pub mod bounds;
/// First-person pose and per-tick controller.
pub mod controller;
/// Core camera struct, projections and GPU uniform types.
pub mod core;

pub use bounds::RoomBounds;
pub use controller::{CameraPose, FirstPersonController};
pub use self::core::{Camera, CameraBinding, CameraUniform};
