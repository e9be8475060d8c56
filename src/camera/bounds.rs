use glam::Vec3;

/// Room interior half-width along X, in metres.
pub const ROOM_HALF_WIDTH: f32 = 6.0;
/// Room interior half-depth along Z, in metres.
pub const ROOM_HALF_DEPTH: f32 = 8.0;
/// Floor-to-ceiling height, in metres.
pub const ROOM_HEIGHT: f32 = 3.0;

/// Axis-aligned box the walkthrough eye is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    /// Smallest allowed eye position.
    pub min: Vec3,
    /// Largest allowed eye position.
    pub max: Vec3,
}

impl RoomBounds {
    /// Keep-out distance from the walls.
    pub const WALL_MARGIN: f32 = 0.6;
    /// Lowest eye height.
    pub const MIN_EYE_HEIGHT: f32 = 0.7;
    /// Keep-out distance below the ceiling.
    pub const CEILING_MARGIN: f32 = 0.3;

    /// Bounds of the furnished office room.
    #[must_use]
    pub fn office() -> Self {
        Self {
            min: Vec3::new(
                -ROOM_HALF_WIDTH + Self::WALL_MARGIN,
                Self::MIN_EYE_HEIGHT,
                -ROOM_HALF_DEPTH + Self::WALL_MARGIN,
            ),
            max: Vec3::new(
                ROOM_HALF_WIDTH - Self::WALL_MARGIN,
                ROOM_HEIGHT - Self::CEILING_MARGIN,
                ROOM_HALF_DEPTH - Self::WALL_MARGIN,
            ),
        }
    }

    /// Clamp each component independently.
    #[must_use]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Whether `p` lies inside (inclusive).
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self::office()
    }
}
