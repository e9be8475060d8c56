//! First-person walkthrough camera.

use glam::{Vec2, Vec3};

use super::bounds::RoomBounds;
use super::core::Camera;
use crate::input::{Movement, MovementFlags};
use crate::options::CameraOptions;

/// Hard ceiling on the pitch limit, whatever the options ask for.
pub const MAX_PITCH_DEG: f32 = 80.0;

/// Eye position plus look angles.
///
/// Yaw is measured about world +Y with yaw 0 looking down +Z; pitch is
/// positive when looking up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Heading in degrees, in `[0, 360)`.
    pub yaw_deg: f32,
    /// Elevation in degrees.
    pub pitch_deg: f32,
}

impl CameraPose {
    /// Standing near the front wall, facing the room centre.
    pub const INITIAL: Self = Self {
        position: Vec3::new(0.0, 1.7, 7.0),
        yaw_deg: 180.0,
        pitch_deg: -10.0,
    };

    /// Horizontal walking direction for the current yaw.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.yaw_deg.to_radians().sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    /// Horizontal strafe direction for the current yaw.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let (sin, cos) = self.yaw_deg.to_radians().sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }

    /// Unit look direction including pitch.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw_deg.to_radians().sin_cos();
        let (sp, cp) = self.pitch_deg.to_radians().sin_cos();
        Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Point one unit ahead of the eye.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.position + self.look_direction()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Advances the walkthrough pose once per tick from held movement keys and
/// accumulated mouse-look.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonController {
    pose: CameraPose,
    bounds: RoomBounds,
    move_speed: f32,
    look_sensitivity: f32,
    pitch_limit: f32,
}

impl FirstPersonController {
    /// Controller at [`CameraPose::INITIAL`] using the given tuning.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            pose: CameraPose::INITIAL,
            bounds: RoomBounds::office(),
            move_speed: options.move_speed,
            look_sensitivity: options.look_sensitivity,
            pitch_limit: options.pitch_limit.abs().min(MAX_PITCH_DEG),
        }
    }

    /// Re-read speed and sensitivity; the pose is left untouched.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.move_speed = options.move_speed;
        self.look_sensitivity = options.look_sensitivity;
        self.pitch_limit = options.pitch_limit.abs().min(MAX_PITCH_DEG);
        self.pose.pitch_deg =
            self.pose.pitch_deg.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Region the eye is confined to.
    #[must_use]
    pub fn bounds(&self) -> &RoomBounds {
        &self.bounds
    }

    /// One tick: translate for each held direction, clamp to the room,
    /// then apply the look delta (screen pixels, y down).
    pub fn advance(&mut self, movement: MovementFlags, look: Option<Vec2>) {
        self.translate(movement);
        if let Some(delta) = look {
            self.look(delta);
        }
    }

    fn translate(&mut self, movement: MovementFlags) {
        if movement.is_empty() {
            return;
        }
        let forward = self.pose.forward() * self.move_speed;
        let right = self.pose.right() * self.move_speed;
        let up = Vec3::Y * self.move_speed;

        let mut step = Vec3::ZERO;
        for m in Movement::ALL {
            if !movement.contains(m) {
                continue;
            }
            step += match m {
                Movement::Forward => forward,
                Movement::Backward => -forward,
                Movement::Left => -right,
                Movement::Right => right,
                Movement::Up => up,
                Movement::Down => -up,
            };
        }

        let moved = self.bounds.clamp(self.pose.position + step);
        self.pose.position = Vec3::select(
            moved.is_finite_mask(),
            moved,
            self.pose.position,
        );
    }

    fn look(&mut self, delta: Vec2) {
        let yaw = self.pose.yaw_deg + delta.x * self.look_sensitivity;
        if yaw.is_finite() {
            self.pose.yaw_deg = yaw.rem_euclid(360.0);
            if self.pose.yaw_deg >= 360.0 {
                self.pose.yaw_deg = 0.0;
            }
        }
        let pitch = self.pose.pitch_deg - delta.y * self.look_sensitivity;
        if pitch.is_finite() {
            self.pose.pitch_deg =
                pitch.clamp(-self.pitch_limit, self.pitch_limit);
        }
    }

    /// Write the current pose into a perspective camera.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.eye = self.pose.position;
        camera.target = self.pose.target();
        camera.up = Vec3::Y;
    }
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn held(movements: &[Movement]) -> MovementFlags {
        MovementFlags::from_slice(movements)
    }

    #[test]
    fn forward_walks_toward_room_centre() {
        let mut ctrl = FirstPersonController::default();
        for _ in 0..10 {
            ctrl.advance(held(&[Movement::Forward]), None);
        }
        let p = ctrl.pose().position;
        assert!((p.z - 6.0).abs() < EPS, "z = {}", p.z);
        assert!(p.x.abs() < EPS);
        assert_eq!(p.y, 1.7);
    }

    #[test]
    fn forward_and_right_compose_diagonally() {
        let mut ctrl = FirstPersonController::default();
        let start = ctrl.pose().position;
        let forward = ctrl.pose().forward();
        let right = ctrl.pose().right();
        ctrl.advance(held(&[Movement::Forward, Movement::Right]), None);
        let expected = start + (forward + right) * 0.10;
        assert!(ctrl.pose().position.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut ctrl = FirstPersonController::default();
        let start = ctrl.pose().position;
        ctrl.advance(
            held(&[
                Movement::Forward,
                Movement::Backward,
                Movement::Up,
                Movement::Down,
            ]),
            None,
        );
        assert!(ctrl.pose().position.abs_diff_eq(start, EPS));
    }

    #[test]
    fn position_never_leaves_the_room() {
        let mut ctrl = FirstPersonController::default();
        let sequences: [&[Movement]; 4] = [
            &[Movement::Backward, Movement::Up],
            &[Movement::Left, Movement::Down],
            &[Movement::Forward, Movement::Right],
            &[Movement::Right, Movement::Backward, Movement::Up],
        ];
        for (i, seq) in sequences.iter().enumerate() {
            for _ in 0..400 {
                ctrl.advance(held(seq), Some(Vec2::new(i as f32 * 3.0, 0.0)));
                assert!(
                    ctrl.bounds().contains(ctrl.pose().position),
                    "escaped: {:?}",
                    ctrl.pose().position
                );
            }
        }
        let b = RoomBounds::office();
        assert_eq!(b.min, Vec3::new(-5.4, 0.7, -7.4));
        assert_eq!(b.max, Vec3::new(5.4, 2.7, 7.4));
    }

    #[test]
    fn pitch_is_clamped_and_yaw_wraps() {
        let mut ctrl = FirstPersonController::default();
        ctrl.advance(MovementFlags::NONE, Some(Vec2::new(0.0, -10_000.0)));
        assert_eq!(ctrl.pose().pitch_deg, 80.0);
        ctrl.advance(MovementFlags::NONE, Some(Vec2::new(0.0, 10_000.0)));
        assert_eq!(ctrl.pose().pitch_deg, -80.0);

        // 180 + 1400 * 0.15 = 390 → 30
        ctrl.advance(MovementFlags::NONE, Some(Vec2::new(1400.0, 0.0)));
        assert!((ctrl.pose().yaw_deg - 30.0).abs() < EPS);
        ctrl.advance(MovementFlags::NONE, Some(Vec2::new(-400.0, 0.0)));
        assert!((ctrl.pose().yaw_deg - 330.0).abs() < EPS);
    }

    #[test]
    fn configured_pitch_limit_is_capped() {
        let options = CameraOptions {
            pitch_limit: 120.0,
            ..CameraOptions::default()
        };
        let mut ctrl = FirstPersonController::new(&options);
        ctrl.advance(MovementFlags::NONE, Some(Vec2::new(0.0, -10_000.0)));
        assert_eq!(ctrl.pose().pitch_deg, MAX_PITCH_DEG);

        ctrl.apply_options(&CameraOptions {
            pitch_limit: -200.0,
            ..CameraOptions::default()
        });
        ctrl.advance(MovementFlags::NONE, Some(Vec2::new(0.0, 10_000.0)));
        assert_eq!(ctrl.pose().pitch_deg, -MAX_PITCH_DEG);
    }

    #[test]
    fn non_finite_look_is_ignored() {
        let mut ctrl = FirstPersonController::default();
        let before = *ctrl.pose();
        ctrl.advance(
            MovementFlags::NONE,
            Some(Vec2::new(f32::NAN, f32::INFINITY)),
        );
        assert_eq!(*ctrl.pose(), before);
    }

    #[test]
    fn look_direction_matches_yaw_and_pitch() {
        let pose = CameraPose {
            pitch_deg: 0.0,
            ..CameraPose::INITIAL
        };
        assert!(pose.look_direction().abs_diff_eq(-Vec3::Z, EPS));
        assert!(pose.right().abs_diff_eq(-Vec3::X, EPS));

        let dir = CameraPose::INITIAL.look_direction();
        assert!((dir.length() - 1.0).abs() < EPS);
        assert!(dir.y < 0.0);
    }
}
