//! Standalone office window backed by winit.
//!
//! ```no_run
//! # use office_designer::Viewer;
//! Viewer::builder()
//!     .with_title("Office")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::{Control, OfficeEngine},
    error::DesignerError,
    input::InputEvent,
    options::Options,
};

/// Default window title.
pub const DEFAULT_TITLE: &str = "Office Designer - 2D Plan + 3D Walkthrough";
/// Initial inner size in logical pixels.
pub const DEFAULT_SIZE: (u32, u32) = (1000, 900);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: DEFAULT_TITLE.into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the office floor plan and walkthrough.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or Escape is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::Viewer`] if the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), DesignerError> {
        let event_loop = EventLoop::new()
            .map_err(|e| DesignerError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DesignerError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<OfficeEngine>,
    options: Option<Options>,
    title: String,
}

impl ViewerApp {
    fn redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// Forward a translated event, exiting on request.
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        if engine.handle_input(event) == Control::Exit {
            event_loop.exit();
            return;
        }
        self.redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_SIZE.0,
                DEFAULT_SIZE.1,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let engine = pollster::block_on(OfficeEngine::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
            window.scale_factor(),
            self.options.take().unwrap_or_default(),
        ));

        let engine = match engine {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.dispatch(
                    event_loop,
                    InputEvent::Resized {
                        width: size.width,
                        height: size.height,
                    },
                );
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let inner = self.window.as_ref().map(|w| w.inner_size());
                if let Some(engine) = &mut self.engine {
                    engine.set_scale_factor(scale_factor);
                    if let Some(inner) = inner {
                        engine.resize(inner.width, inner.height);
                    }
                }
                self.redraw();
            }

            WindowEvent::RedrawRequested => {
                let inner = self.window.as_ref().map(|w| w.inner_size());
                if let Some(engine) = &mut self.engine {
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(inner) = inner {
                                engine.resize(inner.width, inner.height);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.dispatch(
                    event_loop,
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.dispatch(
                    event_loop,
                    InputEvent::Key {
                        code: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                        repeat: event.repeat,
                    },
                );
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        let ticked = engine.update(Instant::now());
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            engine.next_deadline(),
        ));
        if ticked {
            self.redraw();
        }
    }
}
