//! Application Tests
//!
//! Tests for:
//! - FrameClock timing and frame counting
//! - App builder configuration
//! - Error display

use std::time::{Duration, Instant};

use gl_bootstrap::renderer::ShaderStage;
use gl_bootstrap::{App, ClearColor, Error, FrameClock, Settings};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// FrameClock
// ============================================================================

#[test]
fn first_tick_is_frame_zero() {
    let start = Instant::now();
    let mut clock = FrameClock::start(start);
    let frame = clock.tick(start);
    assert_eq!(frame.frame_count, 0);
    assert!(approx(frame.time, 0.0));
    assert!(approx(frame.dt, 0.0));
    assert_eq!(clock.frame_count(), 1);
}

#[test]
fn tick_tracks_total_and_delta_time() {
    let start = Instant::now();
    let mut clock = FrameClock::start(start);

    let first = clock.tick(start + Duration::from_millis(16));
    assert!(approx(first.time, 0.016));
    assert!(approx(first.dt, 0.016));

    let second = clock.tick(start + Duration::from_millis(50));
    assert!(approx(second.time, 0.050));
    assert!(approx(second.dt, 0.034));
    assert_eq!(second.frame_count, 1);
}

#[test]
fn tick_never_goes_backwards() {
    let start = Instant::now() + Duration::from_secs(1);
    let mut clock = FrameClock::start(start);
    let frame = clock.tick(start - Duration::from_millis(10));
    assert!(approx(frame.time, 0.0));
    assert!(approx(frame.dt, 0.0));
}

// ============================================================================
// App Builder
// ============================================================================

#[test]
fn app_defaults() {
    let app = App::new();
    assert_eq!(app.settings(), &Settings::default());
}

#[test]
fn app_with_settings_and_title() {
    let app = App::new()
        .with_settings(Settings::default().with_clear_color(ClearColor::BLACK))
        .with_title("Hello Triangle");
    assert_eq!(app.settings().window.title, "Hello Triangle");
    assert_eq!(app.settings().clear_color, ClearColor::BLACK);
    assert_eq!(app.settings().context.version(), (3, 3));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn startup_errors_carry_driver_logs() {
    let compile = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        log: "0:4: 'pos' : undeclared identifier".to_string(),
    };
    assert!(compile.to_string().contains("vertex shader"));
    assert!(compile.to_string().contains("undeclared identifier"));

    let link = Error::ProgramLink("missing main".to_string());
    assert_eq!(link.to_string(), "Error linking program: missing main");

    let loader = Error::Loader("OpenGL 3.3 requested, context provides 2.1".to_string());
    assert!(loader.to_string().starts_with("GL loader error:"));

    let validate = Error::ProgramValidate("no VAO bound".to_string());
    assert_eq!(validate.to_string(), "Error validating program: no VAO bound");
}
