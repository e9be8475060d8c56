use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// First-person camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 30.0, max = 100.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Distance walked per tick while a movement key is held.
    #[schemars(title = "Move Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub move_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse movement.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub look_sensitivity: f32,
    /// Maximum absolute pitch in degrees.
    #[schemars(skip)]
    pub pitch_limit: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
            move_speed: 0.10,
            look_sensitivity: 0.15,
            pitch_limit: 80.0,
        }
    }
}
