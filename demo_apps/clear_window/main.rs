use gl_bootstrap::prelude::*;

/// Clear Window
///
/// No GPU resources: the runner clears to the configured red and swaps.
struct ClearWindow;

impl AppHandler for ClearWindow {
    fn init(_renderer: &mut Renderer) -> Result<Self> {
        Ok(Self)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    App::new()
        .with_settings(Settings::default().with_clear_color(ClearColor::RED))
        .run::<ClearWindow>()
}
