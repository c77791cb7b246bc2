//! Static Vertex Data
//!
//! [`StaticMesh`] pairs one vertex array object with one vertex buffer that is
//! filled once at startup and never modified. The buffer feeds the vertex
//! array, which is bound for the duration of each draw call.

use std::mem::size_of;

use bytemuck::Pod;
use glow::HasContext;

use crate::errors::{Error, Result};
use crate::resources::Vertex;

/// Describes how a vertex type maps onto attribute location 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub location: u32,
    /// Float components per vertex.
    pub components: i32,
    /// Byte distance between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the attribute within a vertex.
    pub offset: i32,
}

impl VertexLayout {
    /// Layout of the position-only [`Vertex`].
    #[must_use]
    pub const fn position() -> Self {
        Self {
            location: 0,
            components: 3,
            stride: size_of::<Vertex>() as i32,
            offset: 0,
        }
    }
}

/// GPU-resident, immutable triangle list.
///
/// The vertex array and the buffer it references live until process exit.
#[derive(Debug)]
pub struct StaticMesh {
    vao: glow::VertexArray,
    vertex_count: i32,
}

impl StaticMesh {
    /// Creates the vertex array and buffer and uploads `vertices` with
    /// `STATIC_DRAW`. Both objects are unbound again before returning.
    pub fn upload<V: Pod>(gl: &glow::Context, vertices: &[V], layout: VertexLayout) -> Result<Self> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|reason| Error::ObjectCreation {
                    kind: "vertex array",
                    reason,
                })?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer().map_err(|reason| Error::ObjectCreation {
                kind: "buffer",
                reason,
            })?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                layout.location,
                layout.components,
                glow::FLOAT,
                false,
                layout.stride,
                layout.offset,
            );
            gl.enable_vertex_attrib_array(layout.location);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            log::debug!(
                "Uploaded {} vertices ({} bytes)",
                vertices.len(),
                std::mem::size_of_val(vertices)
            );

            Ok(Self {
                vao,
                vertex_count: vertices.len() as i32,
            })
        }
    }

    #[inline]
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(Some(self.vao)) };
    }

    #[inline]
    pub fn unbind(gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(None) };
    }

    /// Issues one `TRIANGLES` draw call covering every uploaded vertex.
    pub fn draw(&self, gl: &glow::Context) {
        self.bind(gl);
        unsafe { gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count) };
        Self::unbind(gl);
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}
