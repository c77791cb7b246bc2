//! Window & Context Settings
//!
//! Startup configuration for the bootstrap. Everything here is plain data
//! with sensible defaults, adjusted through `with_*` builders and handed to
//! [`App::with_settings`](crate::app::winit::App::with_settings).
//!
//! ```rust,ignore
//! use gl_bootstrap::settings::{ClearColor, Settings};
//!
//! let settings = Settings::default()
//!     .with_clear_color(ClearColor::BLACK)
//!     .with_size(1024, 768);
//! ```

use glam::Vec4;

/// Default window width in logical pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default window height in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default window title.
pub const DEFAULT_TITLE: &str = "Test window";

// ---------------------------------------------------------------------------
// ClearColor
// ---------------------------------------------------------------------------

/// RGBA color the framebuffer is cleared to at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor(pub Vec4);

impl ClearColor {
    /// Opaque red.
    pub const RED: Self = Self(Vec4::new(1.0, 0.0, 0.0, 1.0));
    /// Opaque black.
    pub const BLACK: Self = Self(Vec4::new(0.0, 0.0, 0.0, 1.0));

    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(Vec4::new(r, g, b, a))
    }

    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }
}

impl Default for ClearColor {
    #[inline]
    fn default() -> Self {
        Self::RED
    }
}

// ---------------------------------------------------------------------------
// WindowSettings
// ---------------------------------------------------------------------------

/// Native window parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

// ---------------------------------------------------------------------------
// ContextSettings
// ---------------------------------------------------------------------------

/// Requested OpenGL context parameters.
///
/// The default asks for a 3.3 core-profile context. Core-profile contexts on
/// macOS are always created forward-compatible, which is the only way that
/// platform hands out anything newer than 2.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSettings {
    pub major: u8,
    pub minor: u8,
    /// Request the core profile (no deprecated fixed-function entry points).
    pub core_profile: bool,
    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            major: 3,
            minor: 3,
            core_profile: true,
            vsync: true,
        }
    }
}

impl ContextSettings {
    #[inline]
    #[must_use]
    pub fn version(&self) -> (u8, u8) {
        (self.major, self.minor)
    }

    /// The matching GLSL `#version` number, e.g. `"330"` for GL 3.3.
    #[must_use]
    pub fn version_string(&self) -> String {
        format!("{}{}0", self.major, self.minor)
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Top-level startup configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub window: WindowSettings,
    pub context: ContextSettings,
    pub clear_color: ClearColor,
}

impl Settings {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    #[must_use]
    pub fn with_clear_color(mut self, color: ClearColor) -> Self {
        self.clear_color = color;
        self
    }

    #[must_use]
    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.context.major = major;
        self.context.minor = minor;
        self
    }

    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.context.vsync = vsync;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_matches_glsl() {
        assert_eq!(ContextSettings::default().version_string(), "330");
        let gl41 = ContextSettings {
            major: 4,
            minor: 1,
            ..Default::default()
        };
        assert_eq!(gl41.version_string(), "410");
    }
}
