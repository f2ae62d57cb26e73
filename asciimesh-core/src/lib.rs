/// asciimesh core library - mesh loading, transformation and projection
///
/// Everything here is independent of the terminal: OBJ parsing, the bounding
/// box and camera placement, the rotation matrix, perspective projection and
/// flat shading.

pub mod bounds;
pub mod error;
pub mod geometry;
pub mod obj;
pub mod projection;
pub mod scene;
pub mod shading;
pub mod transform;

// Re-export commonly used types
pub use bounds::BoundingBox;
pub use error::{MeshError, Result};
pub use geometry::{Face, Mesh, Vertex};
pub use projection::{Camera, ScreenTriangle, Viewport};
pub use scene::Scene;
pub use transform::{RotationState, Transform};
