//! # gl_bootstrap
//!
//! A minimal OpenGL 3.3 core-profile bootstrap: open a window, create a GL
//! context, and run a "clear, draw, swap" loop.
//!
//! # Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`app`] | Frame timing and the winit application runner |
//! | [`renderer`] | GL context, shader programs, static meshes, frame driver |
//! | [`resources`] | Built-in vertex format, triangle and shader sources |
//! | [`settings`] | Window and context configuration |
//! | [`errors`] | Error type and `Result` alias |
//!
//! Application code usually only needs the [`prelude`].

pub mod app;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod settings;

pub use app::winit::{App, AppHandler};
pub use app::{FrameClock, FrameState};
pub use errors::{Error, Result};
pub use renderer::{GlContext, Renderer, ShaderProgram, StaticMesh, VertexLayout, Viewport};
pub use resources::{TRIANGLE_VERTICES, Vertex};
pub use settings::{ClearColor, ContextSettings, Settings, WindowSettings};

/// Re-exports for application entry points.
pub mod prelude {
    pub use crate::app::FrameState;
    pub use crate::app::winit::{App, AppHandler};
    pub use crate::errors::{Error, Result};
    pub use crate::renderer::{Renderer, ShaderProgram, StaticMesh, VertexLayout};
    pub use crate::resources::{
        FLAT_COLOR_FRAGMENT_SHADER, FLAT_COLOR_VERTEX_SHADER, TRIANGLE_VERTICES, Vertex,
    };
    pub use crate::settings::{ClearColor, Settings};

    pub use glow;
}
