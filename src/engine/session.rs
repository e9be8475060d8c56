//! Window-independent interactive state: input, camera, animations.
//!
//! A [`Session`] is everything the viewer needs besides the GPU. Commands
//! mutate it immediately, [`Session::tick`] advances it by one fixed step,
//! and [`Session::frame`] turns it into something the renderer can draw.

use super::command::{Command, Control};
use crate::animation::{DoorAnimation, FanAnimation};
use crate::camera::{Camera, CameraUniform, FirstPersonController};
use crate::input::{InputState, ViewMode};
use crate::options::Options;
use crate::renderer::Frame;
use crate::scene::{plan_points, room_scene, tessellate};

/// Interactive state of one viewer window.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    options: Options,
    input: InputState,
    controller: FirstPersonController,
    camera: Camera,
    door: DoorAnimation,
    fan: FanAnimation,
    viewport: (u32, u32),
    scale_factor: f64,
}

impl Session {
    /// Fresh session for a `width`×`height` physical-pixel viewport.
    #[must_use]
    pub fn new(options: Options, width: u32, height: u32) -> Self {
        let input = InputState::new(&options.display);
        let fan = FanAnimation::new(
            options.animation.fan_degrees_per_tick(input.fan_speed()),
        );
        Self {
            controller: FirstPersonController::new(&options.camera),
            camera: Camera::new(&options.camera, width, height),
            door: DoorAnimation::new(options.animation.door_step),
            fan,
            input,
            viewport: (width, height),
            scale_factor: 1.0,
            options,
        }
    }

    /// Current tuning options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the tuning options. Pose, toggles and animation angles are
    /// kept.
    pub fn set_options(&mut self, options: Options) {
        self.controller.apply_options(&options.camera);
        self.camera.fovy = options.camera.fovy;
        self.camera.znear = options.camera.znear;
        self.camera.zfar = options.camera.zfar;
        self.door.set_step(options.animation.door_step);
        self.options = options;
    }

    /// Interactive input state.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// First-person controller.
    #[must_use]
    pub fn controller(&self) -> &FirstPersonController {
        &self.controller
    }

    /// Door animation.
    #[must_use]
    pub fn door(&self) -> &DoorAnimation {
        &self.door
    }

    /// Fan animation.
    #[must_use]
    pub fn fan(&self) -> &FanAnimation {
        &self.fan
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Physical pixels per logical pixel.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Track a display scale change. Non-positive or non-finite factors are
    /// ignored.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Apply one command immediately.
    pub fn execute(&mut self, command: Command) -> Control {
        match command {
            Command::Quit => {
                log::info!("quit requested");
                return Control::Exit;
            }
            Command::ToggleViewMode => {
                let mode = self.input.toggle_view_mode();
                log::info!("view mode: {mode:?}");
            }
            Command::TogglePlanFlag(flag) => {
                let shown = self.input.toggle_plan(flag);
                log::debug!("plan {flag:?}: {shown}");
            }
            Command::ToggleDoor => {
                let open = self.input.toggle_door();
                log::debug!("door open requested: {open}");
            }
            Command::SetFanSpeed(speed) => {
                self.input.set_fan_speed(speed);
                log::debug!("fan speed: {speed:?}");
            }
            Command::SetMovement { movement, active } => {
                self.input.set_movement(movement, active);
            }
            Command::SampleCursor { x, y } => {
                let _ = self.input.sample_mouse(x, y);
            }
            Command::Resize { width, height } => {
                self.viewport = (width, height);
                self.camera.resize(width, height);
            }
        }
        Control::Continue
    }

    /// Advance one fixed step.
    ///
    /// The fan picks up the selected preset, then both animations advance.
    /// The camera only moves in the walkthrough; in plan view the pending
    /// look delta is discarded.
    pub fn tick(&mut self) {
        self.fan.set_degrees_per_tick(
            self.options
                .animation
                .fan_degrees_per_tick(self.input.fan_speed()),
        );
        self.fan.advance();
        self.door.advance(self.input.door_requested_open());

        let look = self.input.take_mouse_delta();
        if self.input.view_mode() == ViewMode::FirstPerson3D {
            self.controller.advance(self.input.movement(), look);
        }
    }

    /// Current view drawn from the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        match self.input.view_mode() {
            ViewMode::Plan2D => {
                let (width, height) = self.logical_viewport();
                Frame::Plan {
                    camera: CameraUniform::plan(width, height),
                    points: plan_points(&self.input.plan()),
                }
            }
            ViewMode::FirstPerson3D => {
                let mut camera = self.camera.clone();
                self.controller.apply_to(&mut camera);
                let mut uniform = CameraUniform::new();
                uniform.update_view_proj(&camera);

                let scene =
                    room_scene(self.door.angle_deg(), self.fan.angle_deg());
                Frame::Room {
                    camera: uniform,
                    vertices: tessellate(&scene.flatten()),
                }
            }
        }
    }

    fn logical_viewport(&self) -> (f32, f32) {
        let (width, height) = self.viewport;
        let scale = self.scale_factor as f32;
        (width as f32 / scale, height as f32 / scale)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Options::default(), 1000, 900)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::animation::FanSpeed;
    use crate::camera::CameraPose;
    use crate::input::{Movement, PlanFlag};

    fn walkthrough() -> Session {
        let mut session = Session::default();
        let _ = session.execute(Command::ToggleViewMode);
        session
    }

    fn hold(session: &mut Session, movement: Movement, active: bool) {
        let _ = session.execute(Command::SetMovement { movement, active });
    }

    fn cursor(session: &mut Session, x: f32, y: f32) {
        let _ = session.execute(Command::SampleCursor { x, y });
    }

    #[test]
    fn quit_exits_and_everything_else_continues() {
        let mut session = Session::default();
        assert_eq!(session.execute(Command::Quit), Control::Exit);
        assert_eq!(session.execute(Command::ToggleDoor), Control::Continue);
        assert_eq!(
            session.execute(Command::SetFanSpeed(FanSpeed::Slow)),
            Control::Continue
        );
    }

    #[test]
    fn plan_view_freezes_the_camera_but_not_the_animations() {
        let mut session = Session::default();
        hold(&mut session, Movement::Forward, true);
        cursor(&mut session, 10.0, 10.0);
        cursor(&mut session, 90.0, 10.0);
        let _ = session.execute(Command::ToggleDoor);

        for _ in 0..5 {
            session.tick();
        }

        assert_eq!(*session.controller().pose(), CameraPose::INITIAL);
        assert_eq!(session.door().angle_deg(), 15.0);
        assert_eq!(session.fan().angle_deg(), 20.0);
    }

    #[test]
    fn view_round_trip_applies_no_stale_look() {
        let mut session = walkthrough();
        cursor(&mut session, 100.0, 100.0);
        cursor(&mut session, 160.0, 100.0);

        let _ = session.execute(Command::ToggleViewMode);
        cursor(&mut session, 500.0, 500.0);
        let _ = session.execute(Command::ToggleViewMode);

        // first sample after re-entry only seeds the baseline
        cursor(&mut session, 900.0, 100.0);
        session.tick();
        let pose = session.controller().pose();
        assert_eq!(pose.yaw_deg, CameraPose::INITIAL.yaw_deg);
        assert_eq!(pose.pitch_deg, CameraPose::INITIAL.pitch_deg);
    }

    #[test]
    fn look_delta_is_applied_once() {
        let mut session = walkthrough();
        cursor(&mut session, 100.0, 100.0);
        cursor(&mut session, 120.0, 100.0);
        session.tick();
        let yaw = session.controller().pose().yaw_deg;
        assert!((yaw - (180.0 + 20.0 * 0.15)).abs() < 1e-4);

        session.tick();
        assert_eq!(session.controller().pose().yaw_deg, yaw);
    }

    #[test]
    fn door_opens_fully_in_thirty_ticks() {
        let mut session = Session::default();
        let _ = session.execute(Command::ToggleDoor);
        for _ in 0..30 {
            session.tick();
        }
        assert_eq!(session.door().angle_deg(), 90.0);
        session.tick();
        assert_eq!(session.door().angle_deg(), 90.0);
    }

    #[test]
    fn fan_preset_applies_on_the_next_tick() {
        let mut session = Session::default();
        session.tick();
        assert_eq!(session.fan().angle_deg(), 4.0);

        let _ = session.execute(Command::SetFanSpeed(FanSpeed::Fast));
        assert_eq!(session.fan().angle_deg(), 4.0);
        session.tick();
        assert_eq!(session.fan().angle_deg(), 12.0);
    }

    #[test]
    fn walking_forward_moves_toward_the_room_centre() {
        let mut session = walkthrough();
        hold(&mut session, Movement::Forward, true);
        for _ in 0..10 {
            session.tick();
        }
        hold(&mut session, Movement::Forward, false);
        session.tick();

        let pos = session.controller().pose().position;
        assert!((pos.z - 6.0).abs() < 1e-3, "z = {}", pos.z);
        assert!(pos.x.abs() < 1e-3);
    }

    #[test]
    fn frame_follows_view_mode() {
        let mut session = Session::default();
        let _ = session.execute(Command::TogglePlanFlag(PlanFlag::Table));
        assert!(matches!(
            session.frame(),
            Frame::Plan { ref points, .. } if !points.is_empty()
        ));

        let _ = session.execute(Command::ToggleViewMode);
        let frame = session.frame();
        assert!(matches!(
            frame,
            Frame::Room { ref vertices, .. } if !vertices.is_empty()
        ));
        if let Frame::Room { camera, .. } = frame {
            assert_eq!(
                Vec3::from(camera.position),
                CameraPose::INITIAL.position
            );
        }
    }

    #[test]
    fn plan_projection_uses_logical_pixels() {
        let mut session = Session::new(Options::default(), 2000, 1800);
        session.set_scale_factor(2.0);
        assert_eq!(session.scale_factor(), 2.0);
        let frame = session.frame();
        assert!(matches!(frame, Frame::Plan { .. }));
        if let Frame::Plan { camera, .. } = frame {
            let m = glam::Mat4::from_cols_array_2d(&camera.view_proj);
            let corner = m.project_point3(Vec3::new(1000.0, 900.0, 0.0));
            assert!((corner.x - 1.0).abs() < 1e-5);
            assert!((corner.y - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn invalid_scale_factors_are_ignored() {
        let mut session = Session::default();
        session.set_scale_factor(1.5);
        session.set_scale_factor(0.0);
        session.set_scale_factor(-2.0);
        session.set_scale_factor(f64::NAN);
        assert_eq!(session.scale_factor(), 1.5);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut session = Session::default();
        let _ = session.execute(Command::Resize {
            width: 1600,
            height: 800,
        });
        assert_eq!(session.viewport(), (1600, 800));
        assert_eq!(session.camera.aspect, 2.0);
    }

    #[test]
    fn set_options_keeps_pose_and_retunes() {
        let mut session = walkthrough();
        hold(&mut session, Movement::Up, true);
        session.tick();
        let pose = *session.controller().pose();

        let mut options = Options::default();
        options.animation.door_step = 9.0;
        session.set_options(options);
        assert_eq!(*session.controller().pose(), pose);

        let _ = session.execute(Command::ToggleDoor);
        hold(&mut session, Movement::Up, false);
        session.tick();
        assert_eq!(session.door().angle_deg(), 9.0);
    }
}
