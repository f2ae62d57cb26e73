//! asciimesh - spin an OBJ mesh as shaded ASCII art in the terminal
//!
//! Controls:
//!   - Q / ESC / Ctrl-C: Quit
//!
//! Usage:
//!   asciimesh [MESH]               - Render MESH (default Torus.obj) until quit
//!   asciimesh MESH --frames 100    - Stop after 100 frames
//!   asciimesh MESH --headless      - Write frames to stdout as plain text
//!   asciimesh MESH --export out.obj - Re-save the loaded mesh and exit

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use asciimesh_core::{obj, Scene};
use asciimesh_terminal::{terminal_viewport, App, CancellationToken, RenderConfig, TerminalSink, TextSink};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
#[command(name = "asciimesh")]
#[command(version)]
#[command(about = "Rotate a triangle mesh as shaded ASCII art in the terminal")]
struct Cli {
    /// OBJ file to render
    #[arg(default_value = "Torus.obj")]
    mesh: PathBuf,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    frames: Option<u64>,

    /// Cap the frame rate (unlimited when omitted)
    #[arg(long, value_name = "FPS")]
    fps: Option<u32>,

    /// Yaw added per frame, in radians
    #[arg(long, default_value_t = 0.001, allow_negative_numbers = true)]
    yaw_step: f32,

    /// Pitch added per frame, in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch_step: f32,

    /// Write the loaded mesh to this path and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Print frames to stdout as plain text instead of drawing full-screen
    #[arg(long)]
    headless: bool,

    /// Set logging level (trace, debug, info, warn, error); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mesh = obj::load_obj(&cli.mesh)
        .with_context(|| format!("Failed to load mesh {}", cli.mesh.display()))?;

    if let Some(path) = &cli.export {
        obj::save_obj(&mesh, path).with_context(|| format!("Failed to export mesh to {}", path.display()))?;
        return Ok(());
    }

    let scene = Scene::new(mesh).context("Mesh cannot be rendered")?;
    let config = RenderConfig {
        pitch_step: cli.pitch_step,
        yaw_step: cli.yaw_step,
        target_fps: cli.fps,
        max_frames: cli.frames,
    };
    let mut app = App::new(scene, terminal_viewport(), config);
    let cancel = CancellationToken::new();

    if cli.headless {
        let mut sink = TextSink::new(io::stdout().lock());
        app.run(&mut sink, &cancel)?;
    } else {
        let mut sink = TerminalSink::new().context("Failed to set up the terminal")?;
        app.run(&mut sink, &cancel)?;
    }

    Ok(())
}

/// Log to stderr; defaults to warnings so full-screen output stays clean
fn init_logging(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
