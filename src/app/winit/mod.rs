//! Winit-based Application Runner
//!
//! - [`App`]: Builder for configuring and launching an application
//! - [`AppHandler`]: Trait that applications implement
//! - `AppRunner`: Internal event loop handler (not exposed publicly)
//!
//! # Usage
//!
//! 1. Implement [`AppHandler`] for your application struct
//! 2. Use the [`App`] builder to configure window and context settings
//! 3. Call [`App::run`] to start the event loop
//!
//! ```rust,ignore
//! use gl_bootstrap::prelude::*;
//!
//! struct ClearOnly;
//!
//! impl AppHandler for ClearOnly {
//!     fn init(_renderer: &mut Renderer) -> Result<Self> {
//!         Ok(Self)
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     env_logger::init();
//!     App::new().run::<ClearOnly>()
//! }
//! ```

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::app::{FrameClock, FrameState};
use crate::errors::{Error, Result};
use crate::renderer::{GlContext, Renderer};
use crate::settings::Settings;

/// Trait for defining application behavior.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) - Called once after the window and context exist
/// 2. [`on_event`](Self::on_event) - Called for each window event
/// 3. [`update`](Self::update) - Called each frame before clearing
/// 4. [`draw`](Self::draw) - Called each frame between clear and swap
pub trait AppHandler: Sized + 'static {
    /// Creates GPU resources. An error here aborts startup.
    fn init(renderer: &mut Renderer) -> Result<Self>;

    /// Handles a window event before the runner does.
    ///
    /// Return `true` to consume the event. Consumed `RedrawRequested` events
    /// still produce a frame.
    #[allow(unused_variables)]
    fn on_event(&mut self, event: &WindowEvent) -> bool {
        false
    }

    #[allow(unused_variables)]
    fn update(&mut self, renderer: &mut Renderer, frame: &FrameState) {}

    /// Issues this frame's draw calls. The color buffer is already cleared.
    #[allow(unused_variables)]
    fn draw(&self, gl: &glow::Context) {}
}

/// Application builder.
///
/// ```rust,ignore
/// App::new()
///     .with_title("Hello Triangle")
///     .with_settings(Settings::default().with_clear_color(ClearColor::BLACK))
///     .run::<HelloTriangle>()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    settings: Settings,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.window.title = title.into();
        self
    }

    /// Replaces all settings. Call before [`with_title`](Self::with_title)
    /// if both are used.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the application with the specified handler.
    ///
    /// Blocks until the window is closed or startup fails.
    ///
    /// # Errors
    ///
    /// Returns the event loop error, or the first fatal error raised while
    /// creating the context, initializing the handler, or presenting a frame.
    pub fn run<H: AppHandler>(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::<H>::new(self.settings);
        event_loop.run_app(&mut runner)?;

        match runner.fatal_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Internal runner implementing winit's `ApplicationHandler`.
struct AppRunner<H: AppHandler> {
    settings: Settings,

    renderer: Option<Renderer>,
    user_state: Option<H>,

    clock: FrameClock,
    fatal_error: Option<Error>,
}

impl<H: AppHandler> AppRunner<H> {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            renderer: None,
            user_state: None,
            clock: FrameClock::start(Instant::now()),
            fatal_error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        log::error!("{err}");
        self.fatal_error = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let context = GlContext::new(event_loop, &self.settings)?;
        let mut renderer = Renderer::new(context, self.settings.clear_color);

        let viewport = renderer.viewport();
        log::info!("Viewport set to {}x{}", viewport.width, viewport.height);

        self.user_state = Some(H::init(&mut renderer)?);
        self.renderer = Some(renderer);
        self.clock = FrameClock::start(Instant::now());
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(renderer), Some(user_state)) = (&mut self.renderer, &mut self.user_state) else {
            return Ok(());
        };

        let frame = self.clock.tick(Instant::now());
        user_state.update(renderer, &frame);

        renderer.begin_frame();
        user_state.draw(renderer.gl());
        renderer.end_frame()?;

        renderer.context().window().request_redraw();
        Ok(())
    }
}

impl<H: AppHandler> ApplicationHandler for AppRunner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        log::info!(
            "Creating window and OpenGL {}.{} context...",
            self.settings.context.major,
            self.settings.context.minor
        );

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(user_state) = &mut self.user_state else {
            return;
        };

        let consumed = user_state.on_event(&event);

        let result = match event {
            WindowEvent::RedrawRequested => self.redraw(),
            _ if consumed => Ok(()),
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
                Ok(())
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = &self.renderer {
            renderer.context().window().request_redraw();
        }
    }
}
