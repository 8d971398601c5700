use crate::backend::{Backend, RendererOptions};
use crate::driver::RenderLoop;
use crate::error::SetupError;
use crate::expr;
use crate::host::{SurfaceHost, SurfaceId};
use crate::renderer::Renderer;
use tumble_common::{DemoConfig, Variant, Viewport};

/// A running demo: the render loop plus the surface it put on the host.
pub struct Mounted<R: Renderer> {
    render_loop: RenderLoop<R>,
    surface: SurfaceId,
    track_resize: bool,
}

/// What unmounting released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    pub surface: SurfaceId,
    pub frames_rendered: u64,
    /// Whether the host still had the surface attached.
    pub detached: bool,
}

/// Run setup once: bootstrap the scene, acquire a renderer, attach its surface.
///
/// The scene is built before the backend is awaited. Nothing is attached to
/// the host unless acquisition succeeds, and no frame can render before this
/// returns.
pub async fn mount<B, H>(
    config: &DemoConfig,
    backend: &mut B,
    host: &mut H,
) -> Result<Mounted<B::Renderer>, SetupError>
where
    B: Backend,
    H: SurfaceHost,
{
    let viewport = if config.reject_degenerate_viewport {
        config.viewport.validate()?
    } else {
        config.viewport
    };

    let boot = tumble_scene::bootstrap(viewport);

    if config.variant == Variant::Diagnostic {
        log_diagnostics(backend);
    }

    let mut renderer = backend
        .acquire(RendererOptions {
            viewport,
            antialias: config.antialias,
        })
        .await?;
    renderer.set_size(viewport);

    let surface = renderer.surface();
    host.attach(surface, viewport);
    tracing::info!(%viewport, variant = %config.variant, "render loop started");

    let mut render_loop = RenderLoop::new(boot, renderer);
    if config.variant == Variant::Diagnostic {
        render_loop.schedule_backend_report(config.backend_report_delay_ms);
    }

    Ok(Mounted {
        render_loop,
        surface,
        track_resize: config.track_resize,
    })
}

fn log_diagnostics<B: Backend>(backend: &B) {
    tracing::info!(available = backend.is_available(), "GPU backend capability check");
    let demo = expr::sqrt(expr::float(2.0));
    match demo.eval() {
        Some(value) => tracing::info!("{} = {value}", demo.to_wgsl()),
        None => tracing::info!("{}", demo.to_wgsl()),
    }
}

impl<R: Renderer> Mounted<R> {
    /// One display refresh at loop time `t_ms`.
    pub fn frame(&mut self, t_ms: f64) -> R::Output {
        self.render_loop.tick(t_ms)
    }

    /// Host resized. The drawable always follows the host; the camera aspect
    /// only does when the config enabled resize tracking.
    /// Returns whether the camera was reframed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !self.track_resize {
            self.render_loop.resize_surface(viewport);
            return false;
        }
        self.render_loop.resize(viewport);
        true
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn render_loop(&self) -> &RenderLoop<R> {
        &self.render_loop
    }

    /// Stop the loop, detach the surface and release the renderer.
    pub fn unmount<H: SurfaceHost>(self, host: &mut H) -> Teardown {
        let frames_rendered = self.render_loop.frames_rendered();
        let detached = host.detach(self.surface);
        drop(self.render_loop.into_renderer());
        tracing::info!(frames_rendered, detached, "render loop stopped");
        Teardown {
            surface: self.surface,
            frames_rendered,
            detached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DebugBackend;
    use crate::host::PageRoot;
    use tumble_common::Euler;

    fn config() -> DemoConfig {
        DemoConfig {
            viewport: Viewport::new(800, 600),
            ..DemoConfig::default()
        }
    }

    #[test]
    fn mount_attaches_one_surface() {
        let mut page = PageRoot::new();
        let mounted = pollster::block_on(mount(&config(), &mut DebugBackend::new(), &mut page))
            .unwrap();
        assert_eq!(page.attached(), vec![mounted.surface()]);
        assert_eq!(page.viewport_of(mounted.surface()), Some(Viewport::new(800, 600)));
        assert_eq!(mounted.render_loop().frames_rendered(), 0);
    }

    #[test]
    fn first_frames_follow_rotation_law() {
        let mut page = PageRoot::new();
        let mut mounted =
            pollster::block_on(mount(&config(), &mut DebugBackend::new(), &mut page)).unwrap();
        mounted.frame(0.0);
        assert_eq!(mounted.render_loop().rotation(), Some(Euler::ZERO));
        let aspect = mounted.render_loop().bootstrap().camera.aspect;
        assert!((aspect - 800.0 / 600.0).abs() < 1e-6);
        mounted.frame(2000.0);
        assert_eq!(mounted.render_loop().rotation(), Some(Euler::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn backend_unavailable_attaches_nothing() {
        let mut page = PageRoot::new();
        let result = pollster::block_on(mount(
            &config(),
            &mut DebugBackend::unavailable(),
            &mut page,
        ));
        assert!(matches!(result, Err(SetupError::BackendUnavailable(_))));
        assert!(page.attached().is_empty());
    }

    #[test]
    fn unmount_before_first_frame_renders_nothing() {
        let mut page = PageRoot::new();
        let mounted =
            pollster::block_on(mount(&config(), &mut DebugBackend::new(), &mut page)).unwrap();
        let surface = mounted.surface();
        let teardown = mounted.unmount(&mut page);
        assert_eq!(teardown.frames_rendered, 0);
        assert_eq!(teardown.surface, surface);
        assert!(teardown.detached);
        assert!(page.attached().is_empty());
    }

    #[test]
    fn unmount_counts_frames() {
        let mut page = PageRoot::new();
        let mut mounted =
            pollster::block_on(mount(&config(), &mut DebugBackend::new(), &mut page)).unwrap();
        for t in [0.0, 16.7, 33.3] {
            mounted.frame(t);
        }
        assert_eq!(mounted.unmount(&mut page).frames_rendered, 3);
    }

    #[test]
    fn degenerate_viewport_passes_through_by_default() {
        let mut page = PageRoot::new();
        let cfg = DemoConfig {
            viewport: Viewport::new(800, 0),
            ..DemoConfig::default()
        };
        let mounted = pollster::block_on(mount(&cfg, &mut DebugBackend::new(), &mut page)).unwrap();
        assert!(mounted.render_loop().bootstrap().camera.aspect.is_infinite());
    }

    #[test]
    fn degenerate_viewport_rejected_when_configured() {
        let mut page = PageRoot::new();
        let cfg = DemoConfig {
            viewport: Viewport::new(0, 600),
            reject_degenerate_viewport: true,
            ..DemoConfig::default()
        };
        let result = pollster::block_on(mount(&cfg, &mut DebugBackend::new(), &mut page));
        assert!(matches!(result, Err(SetupError::InvalidViewport(_))));
        assert!(page.attached().is_empty());
    }

    #[test]
    fn resize_is_frozen_by_default() {
        let mut page = PageRoot::new();
        let mut mounted =
            pollster::block_on(mount(&config(), &mut DebugBackend::new(), &mut page)).unwrap();
        assert!(!mounted.resize(Viewport::new(1000, 500)));
        let aspect = mounted.render_loop().bootstrap().camera.aspect;
        assert!((aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(mounted.render_loop().renderer().size(), Viewport::new(1000, 500));
    }

    #[test]
    fn resize_tracked_when_enabled() {
        let mut page = PageRoot::new();
        let cfg = DemoConfig {
            track_resize: true,
            ..config()
        };
        let mut mounted = pollster::block_on(mount(&cfg, &mut DebugBackend::new(), &mut page)).unwrap();
        assert!(mounted.resize(Viewport::new(1000, 500)));
        assert_eq!(mounted.render_loop().bootstrap().camera.aspect, 2.0);
    }

    #[test]
    fn diagnostic_variant_schedules_backend_report() {
        let mut page = PageRoot::new();
        let cfg = DemoConfig {
            variant: Variant::Diagnostic,
            ..config()
        };
        let mut mounted = pollster::block_on(mount(&cfg, &mut DebugBackend::new(), &mut page)).unwrap();
        assert!(mounted.render_loop().has_pending_backend_report());
        mounted.frame(999.0);
        assert!(mounted.render_loop().has_pending_backend_report());
        mounted.frame(1000.0);
        assert!(!mounted.render_loop().has_pending_backend_report());
    }
}
