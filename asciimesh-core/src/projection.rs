/// Camera placement, perspective projection and screen-space triangles
use nalgebra::{Matrix4, Point3, Vector3};

use crate::bounds::BoundingBox;
use crate::transform::Transform;

/// Depths closer to zero than this cannot be perspective-divided
const MIN_DEPTH: f32 = 1e-6;

/// Triangles with a smaller doubled screen area cover no cells
const MIN_AREA: f32 = 1e-6;

/// Output grid dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Used when the host terminal cannot report its size
    pub const DEFAULT: Viewport = Viewport {
        width: 80,
        height: 30,
    };

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Perspective-divide a view-space point into screen space.
    ///
    /// The returned `z` keeps the view-space depth for depth testing.
    /// Returns `None` when the depth is zero or the result is not finite.
    pub fn project(&self, point: &Point3<f32>) -> Option<Point3<f32>> {
        if point.z.abs() < MIN_DEPTH {
            return None;
        }

        let half_w = (self.width / 2) as f32;
        let half_h = (self.height / 2) as f32;

        let screen = Point3::new(
            half_w + half_w * point.x / point.z,
            half_h - half_h * point.y / point.z,
            point.z,
        );

        screen.iter().all(|c| c.is_finite()).then_some(screen)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Implicit camera at the origin looking down +z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Pivot the mesh rotates about
    pub center: Point3<f32>,
    /// How far the mesh is pushed along +z
    pub distance: f32,
}

impl Camera {
    pub fn new(center: Point3<f32>, distance: f32) -> Self {
        Self { center, distance }
    }

    /// Pivot on the box center, pushed back by the box size
    pub fn from_bounds(bounds: &BoundingBox) -> Self {
        Self::new(bounds.center, bounds.size)
    }

    /// Model-view matrix: recenter, rotate, translate back, push away from the camera
    pub fn view_matrix(&self, rotation: &Matrix4<f32>) -> Matrix4<f32> {
        let offset = self.center.coords;
        let recenter = Transform::translation_matrix(&-offset);
        let restore = Transform::translation_matrix(&offset);
        let push = Transform::translation_matrix(&Vector3::new(0.0, 0.0, self.distance));

        push * restore * rotation * recenter
    }
}

/// A projected triangle: x and y in cells, z in view-space depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub vertices: [Point3<f32>; 3],
}

impl ScreenTriangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Barycentric denominator; twice the signed screen-space area
    pub fn signed_area(&self) -> f32 {
        let [v0, v1, v2] = self.vertices;
        (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y)
    }

    pub fn is_degenerate(&self) -> bool {
        let area = self.signed_area();
        !area.is_finite() || area.abs() < MIN_AREA
    }

    /// Barycentric weights of the point `(x, y)`, or `None` for a zero-area triangle
    pub fn barycentric(&self, x: f32, y: f32) -> Option<(f32, f32, f32)> {
        if self.is_degenerate() {
            return None;
        }

        let [v0, v1, v2] = self.vertices;
        let denom = self.signed_area();

        let a = ((v1.y - v2.y) * (x - v2.x) + (v2.x - v1.x) * (y - v2.y)) / denom;
        let b = ((v2.y - v0.y) * (x - v2.x) + (v0.x - v2.x) * (y - v2.y)) / denom;
        let c = 1.0 - a - b;

        Some((a, b, c))
    }

    /// Unit face normal computed from the projected coordinates
    pub fn normal(&self) -> Option<Vector3<f32>> {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(&(v2 - v0)).try_normalize(f32::EPSILON)
    }
}
