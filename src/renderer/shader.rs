//! Shader Programs
//!
//! Compiles a vertex/fragment pair, links it into a program and validates the
//! result against the vertex array it will draw. Any failure is reported with
//! the driver's info log attached.

use std::fmt;

use glow::HasContext;

use crate::errors::{Error, Result};
use crate::renderer::mesh::StaticMesh;

/// Placeholder used when the driver reports a failure without a log.
const EMPTY_LOG: &str = "<no info log>";

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL shader type enum for this stage.
    #[inline]
    #[must_use]
    pub fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trims driver info logs and substitutes a placeholder for empty ones.
#[must_use]
pub fn normalize_info_log(log: &str) -> String {
    let trimmed = log.trim();
    if trimmed.is_empty() {
        EMPTY_LOG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Maps a validation status and its info log onto a result.
pub fn validation_result(valid: bool, info_log: &str) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(Error::ProgramValidate(normalize_info_log(info_log)))
    }
}

/// A linked GL program.
///
/// The program object lives until process exit; nothing deletes it.
#[derive(Debug, Clone, Copy)]
pub struct ShaderProgram {
    raw: glow::Program,
}

impl ShaderProgram {
    /// Compiles both stages and links them.
    ///
    /// Stage objects are detached and deleted once the program is linked.
    /// Call [`validate_with`](Self::validate_with) afterwards: core-profile
    /// drivers only validate against a bound vertex array.
    pub fn new(gl: &glow::Context, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        unsafe {
            let program = gl
                .create_program()
                .map_err(|reason| Error::ObjectCreation {
                    kind: "program",
                    reason,
                })?;

            let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
            let fragment = compile_stage(gl, ShaderStage::Fragment, fragment_src)?;

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);

            for shader in [vertex, fragment] {
                gl.detach_shader(program, shader);
                gl.delete_shader(shader);
            }

            if !linked {
                let log = normalize_info_log(&gl.get_program_info_log(program));
                gl.delete_program(program);
                return Err(Error::ProgramLink(log));
            }

            log::debug!("Shader program linked");
            Ok(Self { raw: program })
        }
    }

    /// Validates the program against the current GL state.
    pub fn validate(&self, gl: &glow::Context) -> Result<()> {
        unsafe {
            gl.validate_program(self.raw);
            let valid = gl.get_program_validate_status(self.raw);
            let info_log = if valid {
                String::new()
            } else {
                gl.get_program_info_log(self.raw)
            };
            validation_result(valid, &info_log)
        }
    }

    /// Validates with `mesh`'s vertex array bound, then unbinds it.
    pub fn validate_with(&self, gl: &glow::Context, mesh: &StaticMesh) -> Result<()> {
        mesh.bind(gl);
        let result = self.validate(gl);
        StaticMesh::unbind(gl);
        if result.is_ok() {
            log::debug!("Shader program validated");
        }
        result
    }

    /// Makes this the active program for subsequent draw calls.
    #[inline]
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.raw)) };
    }

    #[inline]
    pub fn unbind(gl: &glow::Context) {
        unsafe { gl.use_program(None) };
    }
}

fn compile_stage(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::Shader> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_type())
            .map_err(|reason| Error::ObjectCreation {
                kind: "shader",
                reason,
            })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = normalize_info_log(&gl.get_shader_info_log(shader));
            gl.delete_shader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_maps_to_gl_enum() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn stage_display() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn info_log_is_trimmed() {
        assert_eq!(
            normalize_info_log("  ERROR: 0:1: 'x' : undeclared identifier\n"),
            "ERROR: 0:1: 'x' : undeclared identifier"
        );
    }

    #[test]
    fn passing_validation_is_ok() {
        assert!(validation_result(true, "").is_ok());
    }

    #[test]
    fn failing_validation_carries_log() {
        let err = validation_result(false, "Validation Failed: No vertex array object bound.\n")
            .unwrap_err();
        assert!(matches!(err, Error::ProgramValidate(_)));
        assert_eq!(
            err.to_string(),
            "Error validating program: Validation Failed: No vertex array object bound."
        );
    }

    #[test]
    fn failing_validation_without_log() {
        let err = validation_result(false, "").unwrap_err();
        assert_eq!(err.to_string(), format!("Error validating program: {EMPTY_LOG}"));
    }

    #[test]
    fn empty_info_log_gets_placeholder() {
        assert_eq!(normalize_info_log(""), EMPTY_LOG);
        assert_eq!(normalize_info_log(" \n\t"), EMPTY_LOG);
    }
}
