//! GL Context
//!
//! The [`GlContext`] owns the native window, the current OpenGL context, the
//! window surface it presents to, and the loaded GL function table. It is
//! responsible for surface resize and buffer swaps.

use std::num::NonZeroU32;
use std::sync::Arc;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::errors::{Error, Result};
use crate::settings::Settings;

/// Core GL context holding the window and its rendering handles.
///
/// Fields drop in declaration order: the surface must go before the window.
pub struct GlContext {
    gl: glow::Context,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    window: Arc<Window>,
}

impl GlContext {
    /// Creates the window and a current GL context for it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No GL config matches the window (`WindowCreation`)
    /// - The native window handle is unavailable (`WindowHandle`)
    /// - The display cannot create a context or surface of the requested
    ///   version and profile, or cannot make it current (`Context`)
    /// - GL entry points are missing or the context is too old (`Loader`)
    pub fn new(event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(&settings.window.title)
            .with_inner_size(LogicalSize::new(settings.window.width, settings.window.height));

        let template = ConfigTemplateBuilder::new();
        let display_builder =
            DisplayBuilder::new().with_window_attributes(Some(window_attributes.clone()));

        let (window, gl_config) = display_builder
            .build(event_loop, template, pick_config)
            .map_err(|e| Error::WindowCreation(e.to_string()))?;

        // Some platforms only create the window once a config is chosen.
        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, window_attributes, &gl_config)?,
        };

        let (major, minor) = settings.context.version();
        let profile = if settings.context.core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };

        let raw_window_handle = window.window_handle()?.as_raw();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(Default::default())?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };

        let context = not_current.make_current(&surface)?;

        let interval = if settings.context.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("Could not set swap interval: {e}");
        }

        // glow panics while loading if glGetString is missing.
        if gl_display.get_proc_address(c"glGetString").is_null() {
            return Err(Error::Loader("glGetString is not available".to_string()));
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
        };

        let actual = gl.version();
        check_version((actual.major, actual.minor), settings.context.version())?;

        unsafe {
            log::info!(
                "OpenGL {} | {} | {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::VENDOR),
                gl.get_parameter_string(glow::RENDERER),
            );
        }

        Ok(Self {
            gl,
            context,
            surface,
            window: Arc::new(window),
        })
    }

    /// Current framebuffer size in physical pixels.
    ///
    /// May differ from the requested window size on high-DPI displays.
    #[must_use]
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Resizes the window surface. Zero-sized requests (minimized windows)
    /// are ignored.
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, w, h);
        }
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    #[inline]
    #[must_use]
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

/// Fails unless the created context is at least the requested version.
pub(crate) fn check_version(actual: (u32, u32), requested: (u8, u8)) -> Result<()> {
    let wanted = (u32::from(requested.0), u32::from(requested.1));
    if actual >= wanted {
        Ok(())
    } else {
        Err(Error::Loader(format!(
            "OpenGL {}.{} requested, context provides {}.{}",
            wanted.0, wanted.1, actual.0, actual.1
        )))
    }
}

/// Picks the config with the most samples; ties keep the first offered.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // glutin-winit returns an error before calling the picker when the
    // display has no matching configs, so the iterator is never empty.
    most_samples(configs, |config: &Config| config.num_samples())
        .expect("picker receives at least one config")
}

fn most_samples<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, config| {
        if samples(&config) > samples(&best) {
            config
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_version_is_accepted() {
        assert!(check_version((3, 3), (3, 3)).is_ok());
    }

    #[test]
    fn newer_version_is_accepted() {
        assert!(check_version((4, 6), (3, 3)).is_ok());
        assert!(check_version((4, 0), (3, 3)).is_ok());
    }

    #[test]
    fn older_version_is_a_loader_error() {
        let err = check_version((3, 2), (3, 3)).unwrap_err();
        assert!(matches!(err, Error::Loader(_)));
        assert_eq!(
            err.to_string(),
            "GL loader error: OpenGL 3.3 requested, context provides 3.2"
        );
        assert!(check_version((2, 1), (3, 3)).is_err());
    }

    #[test]
    fn most_samples_wins_and_ties_keep_first() {
        let configs = [(0, 'a'), (4, 'b'), (4, 'c'), (2, 'd')];
        let picked = most_samples(configs.into_iter(), |c| c.0);
        assert_eq!(picked, Some((4, 'b')));
    }

    #[test]
    fn no_configs_picks_nothing() {
        assert_eq!(most_samples(std::iter::empty::<(u8, char)>(), |c| c.0), None);
    }
}
