//! The office engine: session state bound to a window surface.
//!
//! [`OfficeEngine`] owns the GPU context and renderer alongside a
//! [`Session`]. Raw input goes through the [`InputProcessor`] into
//! [`Command`]s, fixed ticks are driven by a [`TickClock`], and every
//! redraw renders the [`Frame`](crate::renderer::Frame) the session
//! produces.

/// Fixed-interval tick scheduling.
pub mod clock;
/// Commands and event-loop control.
pub mod command;
/// Window-independent interactive state.
pub mod session;

pub use clock::TickClock;
pub use command::{Command, Control};
pub use session::Session;
use web_time::{Duration, Instant};

use crate::error::DesignerError;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::SceneRenderer;

/// Session, input processor, tick clock and GPU renderer for one window.
pub struct OfficeEngine {
    context: RenderContext,
    renderer: SceneRenderer,
    session: Session,
    processor: InputProcessor,
    clock: TickClock,
}

impl OfficeEngine {
    /// Create the engine for a window surface of `size` physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::Gpu`] if the surface, adapter or device
    /// cannot be created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        scale_factor: f64,
        options: Options,
    ) -> Result<Self, DesignerError> {
        let context = RenderContext::new(window, size).await?;
        let renderer = SceneRenderer::new(&context);

        let clock = TickClock::new(
            Duration::from_millis(options.animation.tick_interval_ms),
            Instant::now(),
        );
        let processor =
            InputProcessor::with_key_bindings(options.keybindings.clone());
        let (width, height) = context.size();
        let mut session = Session::new(options, width, height);
        session.set_scale_factor(scale_factor);

        log::info!(
            "office engine ready: {width}x{height} @ {scale_factor}, {:?}",
            session.input().view_mode()
        );

        Ok(Self {
            context,
            renderer,
            session,
            processor,
            clock,
        })
    }

    /// Interactive state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current tuning options.
    #[must_use]
    pub fn options(&self) -> &Options {
        self.session.options()
    }

    /// Replace the tuning options, key bindings and tick interval included.
    pub fn set_options(&mut self, options: Options) {
        self.processor.set_key_bindings(options.keybindings.clone());
        log::debug!(
            "options applied, {} key bindings",
            self.processor.key_bindings().bindings.len()
        );
        self.clock = TickClock::new(
            Duration::from_millis(options.animation.tick_interval_ms),
            Instant::now(),
        );
        self.session.set_options(options);
    }

    /// Translate a raw event and apply the resulting command, if any.
    pub fn handle_input(&mut self, event: InputEvent) -> Control {
        self.processor
            .handle_event(event)
            .map_or(Control::Continue, |cmd| self.execute(cmd))
    }

    /// Apply a command directly, bypassing key bindings.
    pub fn execute(&mut self, command: Command) -> Control {
        if let Command::Resize { width, height } = command {
            self.resize(width, height);
            return Control::Continue;
        }
        self.session.execute(command)
    }

    /// Reconfigure the surface, depth target and projection. Zero sizes
    /// (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.context.resize(width, height) {
            self.renderer.resize(&self.context);
            let _ = self.session.execute(Command::Resize { width, height });
        }
    }

    /// Track a display scale change.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.session.set_scale_factor(scale_factor);
        log::debug!("scale factor now {}", self.session.scale_factor());
    }

    /// Run every tick due at `now`. Returns `true` if any ran.
    pub fn update(&mut self, now: Instant) -> bool {
        let ticks = self.clock.ticks_due(now);
        for _ in 0..ticks {
            self.session.tick();
        }
        ticks > 0
    }

    /// Instant the event loop should wake at for the next tick.
    #[must_use]
    pub fn next_deadline(&self) -> Instant {
        self.clock.next_deadline()
    }

    /// Render and present the current frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next swapchain texture cannot
    /// be acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.session.frame();
        let output = self.context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.renderer
            .render(&self.context, &mut encoder, &view, &frame);
        self.context.submit(encoder);
        output.present();
        Ok(())
    }
}
