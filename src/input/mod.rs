//! Input handling: event types, interactive state, and the input processor
//! that converts raw window events into session commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Relative mouse-look tracking.
pub(crate) mod mouse;
/// Converts raw events into session commands.
pub mod processor;
/// Movement flags, plan toggles and the per-session input state.
pub mod state;
/// Plan vs walkthrough presentation.
pub mod view_mode;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use state::{InputState, Movement, MovementFlags, PlanFlag, PlanToggles};
pub use view_mode::ViewMode;
