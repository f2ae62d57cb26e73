/// ASCII rasterizer for terminal rendering
use asciimesh_core::shading::{default_light, shade_for_normal};
use asciimesh_core::{Scene, ScreenTriangle, Viewport};
use nalgebra::{Unit, Vector3};
use tracing::trace;

use crate::framebuffer::FrameBuffer;

/// Rasterizes projected mesh triangles into a depth-tested character grid
pub struct AsciiRenderer {
    frame: FrameBuffer,
    light: Unit<Vector3<f32>>,
}

impl AsciiRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            frame: FrameBuffer::new(viewport),
            light: default_light(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.frame.viewport()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.frame.resize(viewport);
    }

    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Draw one frame of the scene at its current rotation.
    /// Returns the number of triangles that reached the rasterizer.
    pub fn render(&mut self, scene: &Scene) -> usize {
        self.frame.clear();

        let viewport = self.frame.viewport();
        let mut drawn = 0;
        for triangle in scene.screen_triangles(viewport) {
            if self.render_triangle(&triangle) {
                drawn += 1;
            }
        }

        trace!(drawn, faces = scene.mesh().face_count(), "frame rasterized");
        drawn
    }

    fn render_triangle(&mut self, triangle: &ScreenTriangle) -> bool {
        // Zero-area triangles have no normal and cover no cells
        let Some(normal) = triangle.normal() else {
            return false;
        };
        if triangle.is_degenerate() {
            return false;
        }

        let shade = shade_for_normal(&normal, &self.light);
        self.rasterize_triangle(triangle, shade);
        true
    }

    /// Fill every cell whose barycentric weights are all non-negative,
    /// keeping the larger interpolated depth. Returns the cells written.
    pub fn rasterize_triangle(&mut self, triangle: &ScreenTriangle, shade: char) -> usize {
        let (width, height) = (self.frame.width(), self.frame.height());
        if width == 0 || height == 0 || triangle.is_degenerate() {
            return 0;
        }
        if !triangle.vertices.iter().all(|v| v.iter().all(|c| c.is_finite())) {
            return 0;
        }

        let [v0, v1, v2] = triangle.vertices;

        // Bounding box, clipped to the grid
        let min_x = v0.x.min(v1.x).min(v2.x).max(0.0) as i64;
        let max_x = v0.x.max(v1.x).max(v2.x).min((width - 1) as f32) as i64;
        let min_y = v0.y.min(v1.y).min(v2.y).max(0.0) as i64;
        let max_y = v0.y.max(v1.y).max(v2.y).min((height - 1) as f32) as i64;

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let Some((a, b, c)) = triangle.barycentric(x as f32, y as f32) else {
                    return written;
                };

                if a >= 0.0 && b >= 0.0 && c >= 0.0 {
                    let depth = a * v0.z + b * v1.z + c * v2.z;
                    if self.frame.plot(x as usize, y as usize, depth, shade) {
                        written += 1;
                    }
                }
            }
        }
        written
    }
}
