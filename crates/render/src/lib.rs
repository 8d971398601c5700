//! Rendering Adapter: renderer-agnostic interface and the render loop.
//!
//! # Invariants
//! - Renderers never mutate the scene; only the loop sets the cube rotation.
//! - Nothing is attached to the host until a renderer has been acquired.
//! - No frame renders before setup returns a [`Mounted`] loop.
//!
//! # Headless
//! [`DebugBackend`] and [`DebugTextRenderer`] stand in for a GPU backend so the
//! whole lifecycle runs without a display. Swap in a wgpu backend without
//! changing consumers.

pub mod backend;
pub mod clock;
pub mod driver;
pub mod error;
pub mod expr;
pub mod host;
pub mod lifecycle;
mod renderer;

pub use backend::{Backend, BackendInfo, BackendKind, DebugBackend, RendererOptions};
pub use clock::LoopClock;
pub use driver::RenderLoop;
pub use error::{RenderError, SetupError};
pub use host::{PageRoot, SurfaceHost, SurfaceId};
pub use lifecycle::{Mounted, Teardown, mount};
pub use renderer::{DebugTextRenderer, FrameOutcome, Renderer};

pub fn crate_info() -> &'static str {
    "tumble-render v0.1.0"
}
