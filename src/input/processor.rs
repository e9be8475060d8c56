//! Converts raw platform events into session commands.
//!
//! The `InputProcessor` owns the key-binding map and is the only thing
//! that sits between raw window events and
//! [`Session::execute`](crate::engine::Session::execute).

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::state::{Movement, PlanFlag};
use crate::animation::FanSpeed;
use crate::engine::command::Command;
use crate::options::KeybindingOptions;

impl KeyAction {
    /// Command produced by this action for a press (`true`) or release.
    ///
    /// Held actions report both edges; everything else only fires on
    /// press.
    #[must_use]
    pub fn to_command(self, pressed: bool) -> Option<Command> {
        if let Some(movement) = self.movement() {
            return Some(Command::SetMovement {
                movement,
                active: pressed,
            });
        }
        if !pressed {
            return None;
        }
        let cmd = match self {
            Self::Quit => Command::Quit,
            Self::ToggleViewMode => Command::ToggleViewMode,
            Self::TogglePlanDoor => Command::TogglePlanFlag(PlanFlag::Door),
            Self::TogglePlanWindows => {
                Command::TogglePlanFlag(PlanFlag::Windows)
            }
            Self::TogglePlanTable => Command::TogglePlanFlag(PlanFlag::Table),
            Self::ToggleDoor => Command::ToggleDoor,
            Self::FanSlow => Command::SetFanSpeed(FanSpeed::Slow),
            Self::FanNormal => Command::SetFanSpeed(FanSpeed::Normal),
            Self::FanFast => Command::SetFanSpeed(FanSpeed::Fast),
            Self::MoveForward
            | Self::MoveBackward
            | Self::MoveLeft
            | Self::MoveRight
            | Self::MoveUp
            | Self::MoveDown => return None,
        };
        Some(cmd)
    }

    fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::MoveLeft => Some(Movement::Left),
            Self::MoveRight => Some(Movement::Right),
            Self::MoveUp => Some(Movement::Up),
            Self::MoveDown => Some(Movement::Down),
            _ => None,
        }
    }
}

/// Converts raw window events into [`Command`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(event) {
///     if session.execute(cmd) == Control::Exit {
///         event_loop.exit();
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Process a raw input event and return zero or one commands.
    #[must_use]
    pub fn handle_event(&self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key {
                code,
                pressed,
                repeat,
            } => self.handle_key(&code, pressed, repeat),
            InputEvent::CursorMoved { x, y } => {
                Some(Command::SampleCursor { x, y })
            }
            InputEvent::Resized { width, height } => {
                Some(Command::Resize { width, height })
            }
        }
    }

    /// Key press/release. Auto-repeat presses are dropped so toggles
    /// flip once per physical press.
    fn handle_key(
        &self,
        code: &str,
        pressed: bool,
        repeat: bool,
    ) -> Option<Command> {
        if pressed && repeat {
            return None;
        }
        self.key_bindings.lookup(code)?.to_command(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(processor: &InputProcessor, code: &str) -> Option<Command> {
        processor.handle_event(InputEvent::key_pressed(code))
    }

    #[test]
    fn default_bindings_cover_the_control_table() {
        let p = InputProcessor::new();
        assert_eq!(press(&p, "Escape"), Some(Command::Quit));
        assert_eq!(press(&p, "KeyV"), Some(Command::ToggleViewMode));
        assert_eq!(
            press(&p, "Digit1"),
            Some(Command::TogglePlanFlag(PlanFlag::Door))
        );
        assert_eq!(
            press(&p, "Digit2"),
            Some(Command::TogglePlanFlag(PlanFlag::Windows))
        );
        assert_eq!(
            press(&p, "Digit3"),
            Some(Command::TogglePlanFlag(PlanFlag::Table))
        );
        assert_eq!(press(&p, "KeyO"), Some(Command::ToggleDoor));
        assert_eq!(
            press(&p, "Digit7"),
            Some(Command::SetFanSpeed(FanSpeed::Slow))
        );
        assert_eq!(
            press(&p, "Digit8"),
            Some(Command::SetFanSpeed(FanSpeed::Normal))
        );
        assert_eq!(
            press(&p, "Digit9"),
            Some(Command::SetFanSpeed(FanSpeed::Fast))
        );
        assert_eq!(
            press(&p, "KeyQ"),
            Some(Command::SetMovement {
                movement: Movement::Down,
                active: true
            })
        );
        assert_eq!(press(&p, "KeyZ"), None);
    }

    #[test]
    fn movement_keys_report_release() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::key_released("KeyW")),
            Some(Command::SetMovement {
                movement: Movement::Forward,
                active: false
            })
        );
        assert_eq!(p.handle_event(InputEvent::key_released("KeyV")), None);
    }

    #[test]
    fn auto_repeat_never_refires_toggles() {
        let p = InputProcessor::new();
        let repeat = InputEvent::Key {
            code: "KeyO".into(),
            pressed: true,
            repeat: true,
        };
        assert_eq!(p.handle_event(repeat), None);
    }

    #[test]
    fn cursor_and_resize_pass_through() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 3.0, y: 4.0 }),
            Some(Command::SampleCursor { x: 3.0, y: 4.0 })
        );
        assert_eq!(
            p.handle_event(InputEvent::Resized {
                width: 800,
                height: 600
            }),
            Some(Command::Resize {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        let p = InputProcessor::with_key_bindings(bindings);
        assert_eq!(
            p.key_bindings().lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(
            press(&p, "ArrowUp"),
            Some(Command::SetMovement {
                movement: Movement::Forward,
                active: true
            })
        );
        assert_eq!(press(&p, "KeyW"), None);
    }
}
