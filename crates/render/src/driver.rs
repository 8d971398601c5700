use crate::renderer::{FrameOutcome, Renderer};
use tumble_common::{Euler, Viewport};
use tumble_scene::SceneBootstrap;

/// Render Loop Driver.
///
/// One `tick` per display refresh: set the cube rotation from loop time, then
/// render the scene through the camera. Holds no other per-frame state.
pub struct RenderLoop<R: Renderer> {
    boot: SceneBootstrap,
    renderer: R,
    frames: u64,
    /// Loop time at which to log the active backend once.
    backend_report_at: Option<f64>,
}

impl<R: Renderer> RenderLoop<R> {
    pub fn new(boot: SceneBootstrap, renderer: R) -> Self {
        Self {
            boot,
            renderer,
            frames: 0,
            backend_report_at: None,
        }
    }

    /// Log the renderer's backend on the first tick at or after `delay_ms`.
    pub fn schedule_backend_report(&mut self, delay_ms: f64) {
        self.backend_report_at = Some(delay_ms);
    }

    /// Advance to loop time `t_ms` and render one frame. Skipped frames are
    /// not counted.
    pub fn tick(&mut self, t_ms: f64) -> R::Output {
        let rotation = self.boot.apply_rotation(t_ms);
        tracing::trace!(t_ms, rx = rotation.x, ry = rotation.y, "frame");

        let output = self.renderer.render(&self.boot.scene, &self.boot.camera);
        if output.presented() {
            self.frames += 1;
        }

        if self.backend_report_at.is_some_and(|at| t_ms >= at) {
            self.backend_report_at = None;
            tracing::info!("{}", self.renderer.backend_info());
        }
        output
    }

    /// Follow a host resize: camera aspect and surface size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.boot.resize(viewport);
        self.renderer.set_size(viewport);
        tracing::debug!(%viewport, "render loop resized");
    }

    /// Match the drawable to the host without touching the camera, so the
    /// picture stretches instead of reframing.
    pub fn resize_surface(&mut self, viewport: Viewport) {
        self.renderer.set_size(viewport);
        tracing::debug!(%viewport, "surface resized, aspect kept");
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn rotation(&self) -> Option<Euler> {
        self.boot.rotation()
    }

    pub fn bootstrap(&self) -> &SceneBootstrap {
        &self.boot
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn has_pending_backend_report(&self) -> bool {
        self.backend_report_at.is_some()
    }

    /// Stop the loop and give back the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendInfo;
    use crate::error::RenderError;
    use crate::host::SurfaceId;
    use crate::renderer::DebugTextRenderer;
    use tumble_scene::{PerspectiveCamera, Scene};

    /// Drops every frame whose number is in `skip`, like a lost swapchain.
    struct SkippingRenderer {
        inner: DebugTextRenderer,
        calls: u64,
        skip: Vec<u64>,
    }

    impl Renderer for SkippingRenderer {
        type Output = Result<(), RenderError>;

        fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output {
            self.calls += 1;
            if self.skip.contains(&self.calls) {
                return Err(RenderError::SurfaceLost);
            }
            self.inner.render(scene, camera);
            Ok(())
        }

        fn set_size(&mut self, viewport: Viewport) {
            self.inner.set_size(viewport);
        }

        fn size(&self) -> Viewport {
            self.inner.size()
        }

        fn surface(&self) -> SurfaceId {
            self.inner.surface()
        }

        fn backend_info(&self) -> BackendInfo {
            self.inner.backend_info()
        }
    }

    fn render_loop() -> RenderLoop<DebugTextRenderer> {
        let vp = Viewport::new(800, 600);
        RenderLoop::new(tumble_scene::bootstrap(vp), DebugTextRenderer::new(vp))
    }

    #[test]
    fn tick_rotates_then_renders() {
        let mut rl = render_loop();
        let out = rl.tick(2000.0);
        assert!(out.contains("rot=(1.0000, 2.0000, 0.0000)"));
        assert_eq!(rl.rotation(), Some(Euler::new(1.0, 2.0, 0.0)));
        assert_eq!(rl.frames_rendered(), 1);
    }

    #[test]
    fn same_timestamp_twice_is_idempotent() {
        let mut rl = render_loop();
        rl.tick(750.0);
        let first = rl.rotation();
        rl.tick(750.0);
        assert_eq!(rl.rotation(), first);
        assert_eq!(rl.frames_rendered(), 2);
    }

    #[test]
    fn backend_report_fires_once_after_delay() {
        let mut rl = render_loop();
        rl.schedule_backend_report(1000.0);
        rl.tick(16.0);
        assert!(rl.has_pending_backend_report());
        rl.tick(1001.0);
        assert!(!rl.has_pending_backend_report());
    }

    #[test]
    fn skipped_frames_are_not_counted() {
        let vp = Viewport::new(800, 600);
        let renderer = SkippingRenderer {
            inner: DebugTextRenderer::new(vp),
            calls: 0,
            skip: vec![2, 3],
        };
        let mut rl = RenderLoop::new(tumble_scene::bootstrap(vp), renderer);
        assert!(rl.tick(0.0).is_ok());
        assert!(rl.tick(16.0).is_err());
        assert!(rl.tick(32.0).is_err());
        assert!(rl.tick(48.0).is_ok());
        assert_eq!(rl.frames_rendered(), 2);
        assert_eq!(rl.renderer().inner.frames(), 2);
        // Rotation still follows loop time on skipped ticks.
        assert_eq!(rl.rotation(), Some(tumble_scene::rotation_at(48.0)));
    }

    #[test]
    fn resize_surface_keeps_camera_aspect() {
        let mut rl = render_loop();
        rl.resize_surface(Viewport::new(1000, 500));
        assert!((rl.bootstrap().camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(rl.renderer().size(), Viewport::new(1000, 500));
    }

    #[test]
    fn resize_updates_camera_and_renderer() {
        let mut rl = render_loop();
        rl.resize(Viewport::new(1000, 500));
        assert_eq!(rl.bootstrap().camera.aspect, 2.0);
        assert_eq!(rl.renderer().size(), Viewport::new(1000, 500));
    }
}
