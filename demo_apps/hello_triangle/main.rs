use gl_bootstrap::prelude::*;

/// Hello Triangle
///
/// One static triangle and one flat-color shader, both created at startup.
struct HelloTriangle {
    mesh: StaticMesh,
    program: ShaderProgram,
}

impl AppHandler for HelloTriangle {
    fn init(renderer: &mut Renderer) -> Result<Self> {
        let gl = renderer.gl();

        let mesh = StaticMesh::upload(gl, &TRIANGLE_VERTICES, VertexLayout::position())?;
        let program = ShaderProgram::new(gl, FLAT_COLOR_VERTEX_SHADER, FLAT_COLOR_FRAGMENT_SHADER)?;
        program.validate_with(gl, &mesh)?;

        log::info!("Triangle uploaded ({} vertices)", mesh.vertex_count());

        Ok(Self { mesh, program })
    }

    fn draw(&self, gl: &glow::Context) {
        self.program.bind(gl);
        self.mesh.draw(gl);
        ShaderProgram::unbind(gl);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    App::new()
        .with_settings(Settings::default().with_clear_color(ClearColor::BLACK))
        .run::<HelloTriangle>()
}
