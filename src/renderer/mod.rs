//! Renderer
//!
//! The per-frame pipeline is "clear, draw, swap":
//!
//! 1. [`Renderer::begin_frame`] clears the color buffer
//! 2. The application issues its draw calls through [`Renderer::gl`]
//! 3. [`Renderer::end_frame`] swaps the back buffer to the window
//!
//! The viewport always covers the whole framebuffer and is reset whenever the
//! window is resized.

pub mod context;
pub mod mesh;
pub mod shader;

use glow::HasContext;

use crate::errors::Result;
use crate::settings::ClearColor;

pub use context::GlContext;
pub use mesh::{StaticMesh, VertexLayout};
pub use shader::{ShaderProgram, ShaderStage};

/// The region of the framebuffer GL draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// A viewport covering a framebuffer of the given physical size.
    ///
    /// Sizes beyond `i32::MAX` saturate.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Frame driver around a [`GlContext`].
pub struct Renderer {
    context: GlContext,
    clear_color: ClearColor,
    viewport: Viewport,
}

impl Renderer {
    /// Wraps a freshly created context and points the viewport at its
    /// framebuffer.
    #[must_use]
    pub fn new(context: GlContext, clear_color: ClearColor) -> Self {
        let (width, height) = context.framebuffer_size();
        let mut renderer = Self {
            context,
            clear_color,
            viewport: Viewport::from_size(width, height),
        };
        renderer.apply_viewport(renderer.viewport);
        renderer
    }

    /// Resizes the surface and the viewport to a new framebuffer size.
    ///
    /// A zero-sized framebuffer (minimized window) leaves both untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::from_size(width, height);
        if viewport.is_empty() {
            return;
        }
        self.context.resize(width, height);
        self.apply_viewport(viewport);
        log::debug!("Viewport resized to {width}x{height}");
    }

    /// Clears the color buffer to the configured clear color.
    pub fn begin_frame(&self) {
        let [r, g, b, a] = self.clear_color.to_array();
        let gl = self.context.gl();
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Presents the finished frame.
    pub fn end_frame(&self) -> Result<()> {
        self.context.swap_buffers()
    }

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    #[must_use]
    pub fn gl(&self) -> &glow::Context {
        self.context.gl()
    }

    #[inline]
    #[must_use]
    pub fn context(&self) -> &GlContext {
        &self.context
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        unsafe {
            self.context
                .gl()
                .viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
        self.viewport = viewport;
    }
}
