//! Settings Tests
//!
//! Tests for:
//! - Window defaults (800x600, "Test window")
//! - Context defaults (OpenGL 3.3 core, vsync)
//! - Clear color constants
//! - Builder methods

use gl_bootstrap::settings::{
    ClearColor, ContextSettings, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, Settings,
    WindowSettings,
};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn window_defaults() {
    let window = WindowSettings::default();
    assert_eq!(window.title, "Test window");
    assert_eq!(window.title, DEFAULT_TITLE);
    assert_eq!((window.width, window.height), (800, 600));
    assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (800, 600));
}

#[test]
fn context_defaults_to_gl33_core() {
    let context = ContextSettings::default();
    assert_eq!(context.version(), (3, 3));
    assert!(context.core_profile);
    assert!(context.vsync);
    assert_eq!(context.version_string(), "330");
}

#[test]
fn settings_default_clears_red() {
    let settings = Settings::default();
    assert_eq!(settings.clear_color, ClearColor::RED);
    assert_eq!(settings.window, WindowSettings::default());
    assert_eq!(settings.context, ContextSettings::default());
}

// ============================================================================
// ClearColor
// ============================================================================

#[test]
fn clear_color_constants() {
    assert_eq!(ClearColor::RED.to_array(), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(ClearColor::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(ClearColor::default(), ClearColor::RED);
}

#[test]
fn clear_color_new() {
    let c = ClearColor::new(0.1, 0.2, 0.3, 0.4);
    assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn builders_override_fields() {
    let settings = Settings::default()
        .with_title("Triangle")
        .with_size(1024, 768)
        .with_clear_color(ClearColor::BLACK)
        .with_gl_version(4, 1)
        .with_vsync(false);

    assert_eq!(settings.window.title, "Triangle");
    assert_eq!((settings.window.width, settings.window.height), (1024, 768));
    assert_eq!(settings.clear_color, ClearColor::BLACK);
    assert_eq!(settings.context.version(), (4, 1));
    assert!(!settings.context.vsync);
    assert!(settings.context.core_profile);
}
