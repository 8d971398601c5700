use crate::animation::rotation_at;
use crate::camera::PerspectiveCamera;
use crate::geometry::BoxGeometry;
use crate::mesh::{Material, Mesh};
use crate::scene::Scene;
use glam::Vec3;
use tumble_common::{Euler, ObjectId, Viewport, ViewportError};

pub const FOV_DEGREES: f32 = 70.0;
pub const NEAR: f32 = 0.01;
pub const FAR: f32 = 10.0;
pub const CAMERA_DISTANCE: f32 = 1.0;
pub const CUBE_SIZE: f32 = 0.2;

/// Everything the render loop needs: camera, scene, and the id of the cube.
#[derive(Debug, Clone)]
pub struct SceneBootstrap {
    pub camera: PerspectiveCamera,
    pub scene: Scene,
    pub mesh: ObjectId,
}

/// Build the camera and a scene holding one normal-shaded cube.
///
/// Performs no validation. A zero height produces an infinite aspect, and a
/// 0x0 viewport a `NaN` one; see [`try_bootstrap`] to reject those up front.
pub fn bootstrap(viewport: Viewport) -> SceneBootstrap {
    let mut camera = PerspectiveCamera::new(FOV_DEGREES, viewport.aspect(), NEAR, FAR);
    camera.position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);

    let mut scene = Scene::new();
    let mesh = scene.add(Mesh::new(BoxGeometry::cube(CUBE_SIZE), Material::Normal));

    tracing::debug!(%viewport, aspect = camera.aspect, "scene bootstrapped");

    SceneBootstrap {
        camera,
        scene,
        mesh,
    }
}

/// [`bootstrap`], but fails on a zero-sized viewport.
pub fn try_bootstrap(viewport: Viewport) -> Result<SceneBootstrap, ViewportError> {
    Ok(bootstrap(viewport.validate()?))
}

impl SceneBootstrap {
    /// Set the cube's rotation for loop time `t_ms`. Returns the applied rotation.
    pub fn apply_rotation(&mut self, t_ms: f64) -> Euler {
        let rotation = rotation_at(t_ms);
        if let Some(mesh) = self.scene.get_mut(self.mesh) {
            mesh.set_rotation(rotation);
        }
        rotation
    }

    /// Current rotation of the cube, or `None` if it was removed from the scene.
    pub fn rotation(&self) -> Option<Euler> {
        self.scene.get(self.mesh).map(Mesh::rotation)
    }

    /// Recompute the camera aspect for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
    }
}
