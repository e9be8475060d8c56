//! Everything that gets drawn, expressed as pure functions of session
//! state.
//!
//! The floor plan is a list of coloured pixels ([`plan_points`]); the room
//! is a transform tree ([`room_scene`]) that flattens into world-space
//! draw items and then into a lit triangle list ([`tessellate`]).

/// Lit triangle tessellation of scene shapes.
pub mod mesh;
/// Transform tree nodes and primitive shapes.
pub mod node;
/// Bresenham/midpoint floor-plan rasterisation.
pub mod plan;
/// Furnished office room layout.
pub mod room;

pub use mesh::{tessellate, RoomVertex};
pub use node::{DrawItem, SceneNode, Shape};
pub use plan::{plan_points, PlanPoint};
pub use room::room_scene;
