//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! motion, window resize or a programmatic call, is represented as a
//! `Command`. Consumers construct commands and pass them to
//! [`Session::execute`](super::Session::execute).

use crate::animation::FanSpeed;
use crate::input::{Movement, PlanFlag};

/// A discrete or parameterized operation the session can perform.
///
/// ```ignore
/// session.execute(Command::ToggleDoor);
/// session.execute(Command::SetMovement {
///     movement: Movement::Forward,
///     active: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Terminate the viewer.
    Quit,

    // ── View ────────────────────────────────────────────────────────
    /// Switch between the floor plan and the walkthrough.
    ToggleViewMode,

    /// Show or hide one optional floor-plan item.
    TogglePlanFlag(PlanFlag),

    // ── Animation ───────────────────────────────────────────────────
    /// Flip the door's open intent.
    ToggleDoor,

    /// Select a fan speed preset.
    SetFanSpeed(FanSpeed),

    // ── Camera ──────────────────────────────────────────────────────
    /// Press or release a movement direction.
    SetMovement {
        /// Direction affected.
        movement: Movement,
        /// `true` while held.
        active: bool,
    },

    /// Absolute cursor sample for mouse-look.
    SampleCursor {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Drawable area changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Keep running.
    #[default]
    Continue,
    /// Shut down.
    Exit,
}
