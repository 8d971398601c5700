use tumble_common::ViewportError;

/// Errors that stop setup before the first frame.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("GPU backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("invalid viewport: {0}")]
    InvalidViewport(#[from] ViewportError),
    #[error("surface creation failed: {0}")]
    Surface(String),
}

/// Errors from rendering a single frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("surface lost or outdated")]
    SurfaceLost,
    #[error("timed out acquiring the next frame")]
    Timeout,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("render error: {0}")]
    Other(String),
}

impl RenderError {
    /// Fatal errors end the loop; everything else skips one frame.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::OutOfMemory)
    }
}
