use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Initial floor-plan toggles and view mode.
pub struct DisplayOptions {
    /// Draw the door jambs on the floor plan.
    #[schemars(title = "Show Door")]
    pub show_door: bool,
    /// Draw the windows on the floor plan.
    #[schemars(title = "Show Windows")]
    pub show_windows: bool,
    /// Draw the round meeting table on the floor plan.
    #[schemars(title = "Show Table")]
    pub show_table: bool,
    /// Start in the first-person walkthrough instead of the plan.
    #[schemars(title = "Start In 3D")]
    pub start_in_3d: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_door: true,
            show_windows: true,
            show_table: true,
            start_in_3d: false,
        }
    }
}
