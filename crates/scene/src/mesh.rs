use crate::geometry::BoxGeometry;
use glam::Mat4;
use serde::{Deserialize, Serialize};
use tumble_common::{Euler, Transform};

/// Shading model applied to a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    /// Colours each fragment by its view-space normal, mapped from [-1, 1] to [0, 1].
    #[default]
    Normal,
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
        }
    }
}

/// A renderable object: fixed geometry, fixed material, mutable transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub geometry: BoxGeometry,
    pub material: Material,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: BoxGeometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }

    pub fn rotation(&self) -> Euler {
        self.transform.rotation
    }

    pub fn set_rotation(&mut self, rotation: Euler) {
        self.transform.rotation = rotation;
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mesh_has_identity_transform() {
        let mesh = Mesh::new(BoxGeometry::cube(0.2), Material::Normal);
        assert_eq!(mesh.rotation(), Euler::ZERO);
        assert_eq!(mesh.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn set_rotation_changes_model_matrix() {
        let mut mesh = Mesh::new(BoxGeometry::cube(0.2), Material::Normal);
        mesh.set_rotation(Euler::new(1.0, 2.0, 0.0));
        assert_eq!(mesh.rotation(), Euler::new(1.0, 2.0, 0.0));
        assert_ne!(mesh.model_matrix(), Mat4::IDENTITY);
    }
}
