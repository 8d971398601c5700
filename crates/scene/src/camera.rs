use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera with a fixed orientation looking down -Z.
///
/// Built once at bootstrap; the only mutation is the initial position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(50.0, 1.0, 0.1, 2000.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::NEG_Z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_projection_is_finite() {
        let mut cam = PerspectiveCamera::new(70.0, 800.0 / 600.0, 0.01, 10.0);
        cam.position.z = 1.0;
        let vp = cam.view_projection();
        assert!(vp.is_finite());
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let mut cam = PerspectiveCamera::new(70.0, 1.5, 0.01, 10.0);
        cam.position = Vec3::new(0.0, 0.0, 1.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        // wgpu depth range is [0, 1].
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn points_behind_far_plane_are_clipped() {
        let mut cam = PerspectiveCamera::new(70.0, 1.0, 0.01, 10.0);
        cam.position.z = 1.0;
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, -20.0, 1.0);
        assert!(clip.z / clip.w > 1.0);
    }
}
