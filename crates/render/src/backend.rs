use crate::error::SetupError;
use crate::renderer::{DebugTextRenderer, Renderer};
use std::future::Future;
use tumble_common::Viewport;

/// Broad class of the backend behind a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Modern GPU API (Vulkan, Metal, DX12, WebGPU).
    Primary,
    /// Compatibility API (GL / WebGL).
    Fallback,
    /// CPU rasteriser or no GPU at all.
    Software,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Fallback => f.write_str("fallback"),
            Self::Software => f.write_str("software"),
        }
    }
}

/// Name and class of an acquired backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    pub name: String,
    pub kind: BackendKind,
}

impl std::fmt::Display for BackendInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} backend ({})", self.name, self.kind)
    }
}

/// Options fixed when the renderer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    /// Initial output size. The caller re-sizes after acquisition.
    pub viewport: Viewport,
    pub antialias: bool,
}

/// Source of renderers bound to a graphics backend.
pub trait Backend {
    type Renderer: Renderer;

    /// Whether the host can provide this backend at all.
    fn is_available(&self) -> bool;

    /// Acquire the backend and create a renderer on it.
    ///
    /// This is the one suspension point of setup. Fails with
    /// [`SetupError::BackendUnavailable`] when no adapter or device can be had.
    fn acquire(
        &mut self,
        options: RendererOptions,
    ) -> impl Future<Output = Result<Self::Renderer, SetupError>>;
}

/// Backend producing [`DebugTextRenderer`]s.
#[derive(Debug, Clone)]
pub struct DebugBackend {
    available: bool,
}

impl DebugBackend {
    pub fn new() -> Self {
        Self { available: true }
    }

    /// A backend whose acquisition always fails.
    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl Default for DebugBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for DebugBackend {
    type Renderer = DebugTextRenderer;

    fn is_available(&self) -> bool {
        self.available
    }

    async fn acquire(&mut self, options: RendererOptions) -> Result<DebugTextRenderer, SetupError> {
        if !self.available {
            return Err(SetupError::BackendUnavailable(
                "debug backend disabled".into(),
            ));
        }
        Ok(DebugTextRenderer::new(options.viewport))
    }
}
