/// Rotation state and transformation matrices
use nalgebra::{Matrix4, Vector3};
use std::f32::consts::TAU;

/// Pitch and yaw angles (in radians) carried from frame to frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Rotation about the horizontal axis
    pub pitch: f32,
    /// Rotation about the vertical axis
    pub yaw: f32,
}

impl RotationState {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    pub fn zero() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    ///
    /// Both angles stay in `[0, 2π)` so small steps keep registering
    /// after any number of frames.
    pub fn advance(&mut self, d_pitch: f32, d_yaw: f32) {
        self.pitch = (self.pitch + d_pitch).rem_euclid(TAU);
        self.yaw = (self.yaw + d_yaw).rem_euclid(TAU);
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Combined yaw-then-pitch rotation, expanded in closed form.
    ///
    /// In the row-vector convention `v' = v * M` the rows of `M` are
    ///
    /// ```text
    /// [ cosB         0     -sinB       0 ]
    /// [ sinA*sinB    cosA   sinA*cosB  0 ]
    /// [ cosA*sinB   -sinA   cosA*cosB  0 ]
    /// [ 0            0      0          1 ]
    /// ```
    ///
    /// nalgebra multiplies column vectors, so the returned matrix is the
    /// transpose of `M` and `transform_vector` yields the same product.
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let (sin_a, cos_a) = rotation.pitch.sin_cos();
        let (sin_b, cos_b) = rotation.yaw.sin_cos();

        Matrix4::new(
            cos_b, sin_a * sin_b, cos_a * sin_b, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            -sin_b, sin_a * cos_b, cos_a * cos_b, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.pitch, 0.0);
        assert_eq!(state.yaw, 0.0);

        state.advance(0.0, 0.001);
        state.advance(0.2, 0.001);
        assert!((state.pitch - 0.2).abs() < 1e-6);
        assert!((state.yaw - 0.002).abs() < 1e-6);
    }

    #[test]
    fn test_advance_wraps_into_one_turn() {
        let mut state = RotationState::new(0.0, TAU - 0.0005);
        state.advance(0.0, 0.001);
        assert!((state.yaw - 0.0005).abs() < 1e-5);

        state.advance(-0.001, 0.0);
        assert!((state.pitch - (TAU - 0.001)).abs() < 1e-5);
        assert!((0.0..TAU).contains(&state.pitch));
    }

    #[test]
    fn test_small_steps_keep_moving_after_large_angles() {
        // A plain f32 sum stops changing here: 0.001 is below half an ulp of 32768
        let mut state = RotationState::new(0.0, 32768.0);
        state.advance(0.0, 0.001);
        let before = state.yaw;
        state.advance(0.0, 0.001);
        assert!(state.yaw < TAU);
        assert!((state.yaw - before - 0.001).abs() < 1e-4);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&RotationState::zero());
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let vectors = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.3, -2.0, 5.5),
            Vector3::new(-7.0, 1.25, -0.5),
        ];

        for step in 0..24 {
            let a = step as f32 * 0.37 - 4.0;
            let b = step as f32 * -0.61 + 2.5;
            let matrix = Transform::rotation_matrix(&RotationState::new(a, b));

            for v in &vectors {
                let rotated = matrix.transform_vector(v);
                assert!((rotated.norm() - v.norm()).abs() < 1e-4 * v.norm().max(1.0));
            }
        }
    }

    #[test]
    fn test_rotation_has_no_translation() {
        let matrix = Transform::rotation_matrix(&RotationState::new(0.7, -1.3));
        let fourth_row = matrix.row(3);
        assert_eq!(fourth_row[0], 0.0);
        assert_eq!(fourth_row[1], 0.0);
        assert_eq!(fourth_row[2], 0.0);
        assert_eq!(fourth_row[3], 1.0);
        assert_eq!(matrix.transform_point(&nalgebra::Point3::origin()), nalgebra::Point3::origin());
    }

    #[test]
    fn test_yaw_matches_row_vector_product() {
        // Quarter turn of yaw: row vector (1, 0, 0) times M is (cosB, 0, -sinB)
        let matrix = Transform::rotation_matrix(&RotationState::new(0.0, std::f32::consts::FRAC_PI_2));
        let rotated = matrix.transform_vector(&Vector3::new(1.0, 0.0, 0.0));
        assert!((rotated - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_pitch_matches_row_vector_product() {
        // Row vector (0, 1, 0) times M is (sinA*sinB, cosA, sinA*cosB)
        let matrix = Transform::rotation_matrix(&RotationState::new(std::f32::consts::FRAC_PI_2, 0.0));
        let rotated = matrix.transform_vector(&Vector3::new(0.0, 1.0, 0.0));
        assert!((rotated - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }
}
