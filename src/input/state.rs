//! Interactive toggles and level-triggered movement held by the session.

use glam::Vec2;

use super::mouse::MouseTracker;
use super::view_mode::ViewMode;
use crate::animation::FanSpeed;
use crate::options::DisplayOptions;

/// A single movement direction bound to a held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along the look direction projected on the floor.
    Forward,
    /// Opposite of forward.
    Backward,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// World +Y.
    Up,
    /// World -Y.
    Down,
}

impl Movement {
    /// Every direction, in bit order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    fn bit(self) -> u8 {
        match self {
            Self::Forward => 1,
            Self::Backward => 1 << 1,
            Self::Left => 1 << 2,
            Self::Right => 1 << 3,
            Self::Up => 1 << 4,
            Self::Down => 1 << 5,
        }
    }
}

/// Set of currently held movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovementFlags(u8);

impl MovementFlags {
    /// No movement.
    pub const NONE: Self = Self(0);

    /// Flags with exactly the given directions held.
    #[must_use]
    pub fn from_slice(movements: &[Movement]) -> Self {
        let mut flags = Self::NONE;
        for m in movements {
            flags.set(*m, true);
        }
        flags
    }

    /// Set or clear one direction.
    pub fn set(&mut self, movement: Movement, active: bool) {
        if active {
            self.0 |= movement.bit();
        } else {
            self.0 &= !movement.bit();
        }
    }

    /// Whether `movement` is held.
    #[must_use]
    pub fn contains(self, movement: Movement) -> bool {
        self.0 & movement.bit() != 0
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// One of the three optional items on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanFlag {
    /// Door jambs on the front wall.
    Door,
    /// Windows on the back wall.
    Windows,
    /// Round meeting table.
    Table,
}

/// Visibility of the optional floor-plan items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct PlanToggles {
    /// Draw the door jambs.
    pub show_door: bool,
    /// Draw the windows.
    pub show_windows: bool,
    /// Draw the round table.
    pub show_table: bool,
}

impl PlanToggles {
    /// Flip one flag, returning its new value.
    pub fn toggle(&mut self, flag: PlanFlag) -> bool {
        let slot = match flag {
            PlanFlag::Door => &mut self.show_door,
            PlanFlag::Windows => &mut self.show_windows,
            PlanFlag::Table => &mut self.show_table,
        };
        *slot = !*slot;
        *slot
    }

    /// Whether `flag` is currently shown.
    #[must_use]
    pub fn is_shown(&self, flag: PlanFlag) -> bool {
        match flag {
            PlanFlag::Door => self.show_door,
            PlanFlag::Windows => self.show_windows,
            PlanFlag::Table => self.show_table,
        }
    }
}

impl Default for PlanToggles {
    fn default() -> Self {
        Self {
            show_door: true,
            show_windows: true,
            show_table: true,
        }
    }
}

/// Discrete and continuous input state consumed once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    movement: MovementFlags,
    pending_look: Vec2,
    mouse: MouseTracker,
    view_mode: ViewMode,
    plan: PlanToggles,
    door_requested_open: bool,
    fan_speed: FanSpeed,
}

impl InputState {
    /// Fresh state seeded from the display options.
    #[must_use]
    pub fn new(display: &DisplayOptions) -> Self {
        Self {
            movement: MovementFlags::NONE,
            pending_look: Vec2::ZERO,
            mouse: MouseTracker::default(),
            view_mode: if display.start_in_3d {
                ViewMode::FirstPerson3D
            } else {
                ViewMode::Plan2D
            },
            plan: PlanToggles {
                show_door: display.show_door,
                show_windows: display.show_windows,
                show_table: display.show_table,
            },
            door_requested_open: false,
            fan_speed: FanSpeed::default(),
        }
    }

    /// Currently held movement directions.
    #[must_use]
    pub fn movement(&self) -> MovementFlags {
        self.movement
    }

    /// Press or release one movement direction.
    pub fn set_movement(&mut self, movement: Movement, active: bool) {
        self.movement.set(movement, active);
    }

    /// Current view mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Flip the view mode. The mouse baseline is invalidated and any
    /// unconsumed look delta is dropped so re-entry never jumps.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.mouse.invalidate();
        self.pending_look = Vec2::ZERO;
        self.view_mode
    }

    /// Floor-plan item visibility.
    #[must_use]
    pub fn plan(&self) -> PlanToggles {
        self.plan
    }

    /// Flip one floor-plan item, returning its new visibility.
    pub fn toggle_plan(&mut self, flag: PlanFlag) -> bool {
        self.plan.toggle(flag)
    }

    /// Whether the door should be swinging open.
    #[must_use]
    pub fn door_requested_open(&self) -> bool {
        self.door_requested_open
    }

    /// Flip the door's open intent, returning the new intent.
    pub fn toggle_door(&mut self) -> bool {
        self.door_requested_open = !self.door_requested_open;
        self.door_requested_open
    }

    /// Selected fan preset.
    #[must_use]
    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    /// Select a fan preset.
    pub fn set_fan_speed(&mut self, speed: FanSpeed) {
        self.fan_speed = speed;
    }

    /// Feed an absolute cursor position.
    ///
    /// Outside the walkthrough the baseline is invalidated and nothing is
    /// returned. Otherwise the delta since the previous sample (if any) is
    /// returned and accumulated for the next tick.
    pub fn sample_mouse(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if !self.view_mode.is_first_person() {
            self.mouse.invalidate();
            return None;
        }
        let delta = self.mouse.sample(Vec2::new(x, y))?;
        if delta.is_finite() {
            self.pending_look += delta;
        }
        Some(delta)
    }

    /// Read and clear the look delta accumulated since the last tick.
    pub fn take_mouse_delta(&mut self) -> Option<Vec2> {
        let delta = std::mem::take(&mut self.pending_look);
        (delta != Vec2::ZERO).then_some(delta)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(&DisplayOptions::default())
    }
}
