/// Flat shading against a single directional light
use nalgebra::{Unit, Vector3};

/// Glyphs ordered from darkest to brightest
pub const SHADE_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Glyph for cells no triangle covers
pub const BLANK: char = ' ';

/// Light shining down and toward the viewer
pub fn default_light() -> Unit<Vector3<f32>> {
    Unit::new_normalize(Vector3::new(0.0, 0.5, 0.5))
}

/// Ramp index for a light intensity in `[-1, 1]`, truncated and clamped to the ramp
pub fn shade_index(intensity: f32) -> usize {
    let scaled = (SHADE_RAMP.len() as f32 * intensity) as i32;
    scaled.clamp(0, SHADE_RAMP.len() as i32 - 1) as usize
}

pub fn shade_for_normal(normal: &Vector3<f32>, light: &Unit<Vector3<f32>>) -> char {
    SHADE_RAMP[shade_index(normal.dot(light.as_ref()))]
}
