use crate::backend::{BackendInfo, BackendKind};
use crate::host::SurfaceId;
use tumble_common::Viewport;
use tumble_scene::{PerspectiveCamera, Scene};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene and the camera, then produces output. It never
/// mutates the scene; the render loop owns that.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output: FrameOutcome;

    /// Render one frame of the scene from the camera's point of view.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output;

    /// Size the output surface.
    fn set_size(&mut self, viewport: Viewport);

    fn size(&self) -> Viewport;

    /// The drawable this renderer presents into.
    fn surface(&self) -> SurfaceId;

    /// Which backend is actually driving this renderer.
    fn backend_info(&self) -> BackendInfo;
}

/// Whether a render call put a frame on screen.
pub trait FrameOutcome {
    fn presented(&self) -> bool;
}

impl FrameOutcome for String {
    fn presented(&self) -> bool {
        true
    }
}

/// An `Err` means the frame was skipped.
impl<E> FrameOutcome for Result<(), E> {
    fn presented(&self) -> bool {
        self.is_ok()
    }
}

/// Debug text renderer: stands in for a GPU backend in headless runs.
///
/// Produces one human-readable line block per frame describing what a GPU
/// renderer would draw.
#[derive(Debug)]
pub struct DebugTextRenderer {
    surface: SurfaceId,
    viewport: Viewport,
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            surface: SurfaceId::new(),
            viewport,
            frames: 0,
        }
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> String {
        self.frames += 1;
        let mut out = format!(
            "=== Frame {} ({}) ===\nObjects: {}\nCamera: pos=({:.2}, {:.2}, {:.2}) fov={:.0} aspect={:.4}\n",
            self.frames,
            self.viewport,
            scene.len(),
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.fov_degrees,
            camera.aspect,
        );
        for (id, mesh) in scene.objects() {
            let r = mesh.rotation();
            out.push_str(&format!(
                "  [{}] {} rot=({:.4}, {:.4}, {:.4})\n",
                id.short(),
                mesh.material,
                r.x,
                r.y,
                r.z
            ));
        }
        out
    }

    fn set_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn size(&self) -> Viewport {
        self.viewport
    }

    fn surface(&self) -> SurfaceId {
        self.surface
    }

    fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            name: "debug-text".into(),
            kind: BackendKind::Software,
        }
    }
}
