//! Centralized tuning options with TOML preset support.
//!
//! Movement speed, look sensitivity, animation rates, initial display
//! toggles and key bindings are consolidated here. Options serialize
//! to/from TOML so embedders can ship presets alongside the viewer.

mod animation;
mod camera;
mod display;
mod keybindings;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DesignerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Tick rate and animation speeds.
    pub animation: AnimationOptions,
    /// Initial plan toggles and view mode.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, DesignerError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| DesignerError::OptionsParse(e.to_string()))?;
        opts.keybindings = opts.keybindings.merged_over_defaults();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DesignerError> {
        let content =
            std::fs::read_to_string(path).map_err(DesignerError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DesignerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DesignerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DesignerError::Io)?;
        }
        std::fs::write(path, content).map_err(DesignerError::Io)
    }
}
