//! Built-in Resources
//!
//! The hardcoded data the triangle demo uploads at startup: the vertex
//! format, the triangle itself, and a flat-color shader pair.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single vertex: position only.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
}

impl Vertex {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }
}

/// Bottom-left, bottom-right, top-center in normalized device coordinates.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(-1.0, -1.0, 0.0),
    Vertex::new(1.0, -1.0, 0.0),
    Vertex::new(0.0, 1.0, 0.0),
];

/// Passes attribute 0 through, shrunk to 40% on x and y so the triangle
/// sits inside the window.
pub const FLAT_COLOR_VERTEX_SHADER: &str = r"#version 330 core

layout (location = 0) in vec3 pos;

void main()
{
    gl_Position = vec4(0.4 * pos.x, 0.4 * pos.y, pos.z, 1.0);
}
";

/// Paints every fragment opaque red.
pub const FLAT_COLOR_FRAGMENT_SHADER: &str = r"#version 330 core

out vec4 colour;

void main()
{
    colour = vec4(1.0, 0.0, 0.0, 1.0);
}
";
