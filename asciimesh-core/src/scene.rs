/// Explicit rendering context: the mesh plus everything that positions it
use crate::bounds::BoundingBox;
use crate::error::{MeshError, Result};
use crate::geometry::Mesh;
use crate::projection::{Camera, ScreenTriangle, Viewport};
use crate::transform::{RotationState, Transform};

#[derive(Debug, Clone)]
pub struct Scene {
    mesh: Mesh,
    bounds: BoundingBox,
    camera: Camera,
    rotation: RotationState,
}

impl Scene {
    /// Camera placed from the mesh's bounding box
    pub fn new(mesh: Mesh) -> Result<Self> {
        let bounds = Self::bounds_of(&mesh)?;
        let camera = Camera::from_bounds(&bounds);
        Ok(Self {
            mesh,
            bounds,
            camera,
            rotation: RotationState::zero(),
        })
    }

    pub fn with_camera(mesh: Mesh, camera: Camera) -> Result<Self> {
        let bounds = Self::bounds_of(&mesh)?;
        Ok(Self {
            mesh,
            bounds,
            camera,
            rotation: RotationState::zero(),
        })
    }

    fn bounds_of(mesh: &Mesh) -> Result<BoundingBox> {
        if mesh.is_empty() {
            return Err(MeshError::Empty);
        }
        BoundingBox::from_points(mesh.vertices()).ok_or(MeshError::Empty)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }

    pub fn advance(&mut self, d_pitch: f32, d_yaw: f32) {
        self.rotation.advance(d_pitch, d_yaw);
    }

    /// Every face transformed by the current rotation and projected into the
    /// viewport. Faces with a vertex at zero depth are dropped.
    pub fn screen_triangles(&self, viewport: Viewport) -> impl Iterator<Item = ScreenTriangle> + '_ {
        let rotation = Transform::rotation_matrix(&self.rotation);
        let view = self.camera.view_matrix(&rotation);

        self.mesh.faces().iter().filter_map(move |face| {
            let [a, b, c] = self.mesh.triangle(face);
            Some(ScreenTriangle::new(
                viewport.project(&view.transform_point(&a))?,
                viewport.project(&view.transform_point(&b))?,
                viewport.project(&view.transform_point(&c))?,
            ))
        })
    }
}
