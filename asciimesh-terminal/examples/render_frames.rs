/// Example: Print a few frames of a spinning mesh as plain text
///
/// Usage: cargo run --example render_frames -- [path/to/file.obj] [frames]

use std::env;
use std::io;
use asciimesh_core::{obj, Mesh, Scene, Viewport};
use asciimesh_terminal::{App, CancellationToken, RenderConfig, TextSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(path) => obj::load_obj(path)?,
        None => {
            eprintln!("No OBJ file provided, using default cube...");
            Mesh::cube(2.0)
        }
    };
    let frames = match args.get(2) {
        Some(n) => n.parse()?,
        None => 4,
    };

    let config = RenderConfig {
        yaw_step: 0.3,
        max_frames: Some(frames),
        ..RenderConfig::default()
    };
    let mut app = App::new(Scene::new(mesh)?, Viewport::new(60, 24), config);
    let mut sink = TextSink::new(io::stdout().lock());
    app.run(&mut sink, &CancellationToken::new())?;

    Ok(())
}
