use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleViewMode` → `"KeyV"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Quit, "Escape".into()),
            (KeyAction::ToggleViewMode, "KeyV".into()),
            (KeyAction::TogglePlanDoor, "Digit1".into()),
            (KeyAction::TogglePlanWindows, "Digit2".into()),
            (KeyAction::TogglePlanTable, "Digit3".into()),
            (KeyAction::ToggleDoor, "KeyO".into()),
            (KeyAction::FanSlow, "Digit7".into()),
            (KeyAction::FanNormal, "Digit8".into()),
            (KeyAction::FanFast, "Digit9".into()),
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveDown, "KeyQ".into()),
            (KeyAction::MoveUp, "KeyE".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Rebind `action` to `key`, replacing whatever `key` did before.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|a, k| *a == action || *k != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Layer these bindings over the defaults, so a file that rebinds
    /// one action leaves every other default key in place.
    #[must_use]
    pub fn merged_over_defaults(self) -> Self {
        let mut merged = Self::default();
        for (action, key) in self.bindings {
            merged.bind(action, key);
        }
        merged
    }
}
