/// Terminal-based ASCII rasterizer for rotating meshes
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

use asciimesh_core::{Scene, Viewport};

pub mod framebuffer;
pub mod renderer;
pub mod sink;

pub use framebuffer::FrameBuffer;
pub use renderer::AsciiRenderer;
pub use sink::{terminal_viewport, FrameSink, SinkEvent, TerminalSink, TextSink};

/// Shared stop flag, checked once per frame by [`App::run`]
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Animation settings for the render loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Pitch added after every frame (radians)
    pub pitch_step: f32,
    /// Yaw added after every frame (radians)
    pub yaw_step: f32,
    /// Frame rate cap; `None` renders as fast as the sink accepts frames
    pub target_fps: Option<u32>,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pitch_step: 0.0,
            yaw_step: 0.001,
            target_fps: None,
            max_frames: None,
        }
    }
}

impl RenderConfig {
    fn frame_time(&self) -> Option<Duration> {
        self.target_fps
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_secs(1) / fps)
    }
}

/// Owns the scene and renderer and drives them frame by frame
pub struct App {
    scene: Scene,
    renderer: AsciiRenderer,
    config: RenderConfig,
}

impl App {
    pub fn new(scene: Scene, viewport: Viewport, config: RenderConfig) -> Self {
        Self {
            scene,
            renderer: AsciiRenderer::new(viewport),
            config,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &AsciiRenderer {
        &self.renderer
    }

    /// Render, present, then advance the rotation
    pub fn step<S: FrameSink>(&mut self, sink: &mut S) -> io::Result<()> {
        self.renderer.render(&self.scene);
        sink.present(self.renderer.frame())?;
        self.scene.advance(self.config.pitch_step, self.config.yaw_step);
        Ok(())
    }

    /// Run until cancelled, the sink asks to quit, or the frame limit is hit.
    /// Returns the number of frames presented.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S, cancel: &CancellationToken) -> io::Result<u64> {
        let frame_time = self.config.frame_time();
        let mut frames = 0u64;

        info!(
            width = self.renderer.viewport().width,
            height = self.renderer.viewport().height,
            faces = self.scene.mesh().face_count(),
            "render loop started"
        );

        while !cancel.is_cancelled() {
            if self.config.max_frames.is_some_and(|max| frames >= max) {
                break;
            }

            let frame_start = Instant::now();

            match sink.poll()? {
                Some(SinkEvent::Quit) => {
                    debug!("quit requested");
                    cancel.cancel();
                    break;
                }
                Some(SinkEvent::Resized(viewport)) => self.renderer.resize(viewport),
                None => {}
            }

            self.step(sink)?;
            frames += 1;
            trace!(frame = frames, yaw = self.scene.rotation().yaw, "frame presented");

            if let Some(frame_time) = frame_time {
                let elapsed = frame_start.elapsed();
                if elapsed < frame_time {
                    std::thread::sleep(frame_time - elapsed);
                }
            }
        }

        info!(frames, "render loop stopped");
        Ok(frames)
    }
}
