use serde::{Deserialize, Serialize};
use tumble_common::Viewport;
use uuid::Uuid;

/// Identifies the drawable output surface a renderer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(pub Uuid);

impl SurfaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// The host's root visual container: where a renderer's surface is shown.
pub trait SurfaceHost {
    /// Insert a surface into the visual tree.
    fn attach(&mut self, surface: SurfaceId, viewport: Viewport);

    /// Remove a surface. Returns false if it was not attached.
    fn detach(&mut self, surface: SurfaceId) -> bool;

    /// Surfaces currently attached, in insertion order.
    fn attached(&self) -> Vec<SurfaceId>;
}

/// In-memory host used by headless runs and tests.
#[derive(Debug, Default)]
pub struct PageRoot {
    children: Vec<(SurfaceId, Viewport)>,
}

impl PageRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport_of(&self, surface: SurfaceId) -> Option<Viewport> {
        self.children
            .iter()
            .find(|(id, _)| *id == surface)
            .map(|(_, vp)| *vp)
    }
}

impl SurfaceHost for PageRoot {
    fn attach(&mut self, surface: SurfaceId, viewport: Viewport) {
        self.children.push((surface, viewport));
    }

    fn detach(&mut self, surface: SurfaceId) -> bool {
        let before = self.children.len();
        self.children.retain(|(id, _)| *id != surface);
        self.children.len() != before
    }

    fn attached(&self) -> Vec<SurfaceId> {
        self.children.iter().map(|(id, _)| *id).collect()
    }
}
