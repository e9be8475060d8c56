/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`Command`](crate::engine::Command) values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(InputEvent::Key {
///     code: "KeyV".into(),
///     pressed: true,
///     repeat: false,
/// }) {
///     session.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key code in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Digit1"`, `"Escape"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Whether this press was generated by keyboard auto-repeat.
        repeat: bool,
    },
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

impl InputEvent {
    /// Convenience constructor for a non-repeat key press.
    #[must_use]
    pub fn key_pressed(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            pressed: true,
            repeat: false,
        }
    }

    /// Convenience constructor for a key release.
    #[must_use]
    pub fn key_released(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            pressed: false,
            repeat: false,
        }
    }
}
