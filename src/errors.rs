//! Error Types
//!
//! This module defines the error type used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`Error`] covers every startup failure mode:
//! - Event loop and window creation
//! - GL display, context and surface creation
//! - GL function loading and version checks
//! - GL object creation
//! - Shader compilation, program linking and validation
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`.

use thiserror::Error;

use crate::renderer::shader::ShaderStage;

/// The error type for the bootstrap.
///
/// None of these are recoverable: the runner logs the error, stops the event
/// loop and hands the error back to `main`, which exits with status 1.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Windowing Errors
    // ========================================================================
    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window (or the GL config backing it) could not be created.
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The native window handle was unavailable.
    #[error("Window handle error: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    // ========================================================================
    // GL Context Errors
    // ========================================================================
    /// GL display, context or surface error (glutin).
    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),

    /// GL function pointers could not be loaded, or the context that was
    /// created is older than requested.
    #[error("GL loader error: {0}")]
    Loader(String),

    /// A GL object (shader, program, buffer, vertex array) could not be created.
    #[error("Failed to create GL {kind}: {reason}")]
    ObjectCreation {
        /// What was being created
        kind: &'static str,
        /// Driver-provided reason
        reason: String,
    },

    // ========================================================================
    // Shader Errors
    // ========================================================================
    /// A shader stage failed to compile.
    #[error("Error compiling the {stage} shader: {log}")]
    ShaderCompile {
        /// The stage that failed
        stage: ShaderStage,
        /// The driver's info log
        log: String,
    },

    /// The shader program failed to link.
    #[error("Error linking program: {0}")]
    ProgramLink(String),

    /// The linked program failed validation against the current GL state.
    #[error("Error validating program: {0}")]
    ProgramValidate(String),
}

impl From<winit::error::OsError> for Error {
    fn from(err: winit::error::OsError) -> Self {
        Error::WindowCreation(err.to_string())
    }
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_compile_message_names_stage() {
        let err = Error::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error compiling the fragment shader: 0:3: syntax error"
        );
    }

    #[test]
    fn loader_message() {
        let err = Error::Loader("glGetString is not available".to_string());
        assert_eq!(err.to_string(), "GL loader error: glGetString is not available");
    }

    #[test]
    fn object_creation_message() {
        let err = Error::ObjectCreation {
            kind: "vertex array",
            reason: "out of memory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create GL vertex array: out of memory"
        );
    }
}
