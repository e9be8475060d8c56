use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_view_mode = "KeyV"
/// move_forward = "ArrowUp"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Terminate the viewer.
    Quit,
    /// Switch between the floor plan and the walkthrough.
    ToggleViewMode,
    /// Show or hide the door jambs on the plan.
    TogglePlanDoor,
    /// Show or hide the windows on the plan.
    TogglePlanWindows,
    /// Show or hide the round table on the plan.
    TogglePlanTable,
    /// Flip the door's open intent.
    ToggleDoor,
    /// Slow fan preset.
    FanSlow,
    /// Normal fan preset.
    FanNormal,
    /// Fast fan preset.
    FanFast,
    /// Walk forward while held.
    MoveForward,
    /// Walk backward while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Rise while held.
    MoveUp,
    /// Sink while held.
    MoveDown,
}
