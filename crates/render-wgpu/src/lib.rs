//! wgpu render backend.
//!
//! Draws every mesh in the scene as an instanced box shaded by the normal
//! material, optionally with 4x MSAA, into a window surface or an offscreen
//! texture.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Acquisition failure is reported as `SetupError::BackendUnavailable`, never a panic.

mod backend;
mod gpu;
mod shaders;

pub use backend::{AdapterReport, WgpuBackend, backend_info, classify};
pub use gpu::WgpuRenderer;
pub use shaders::normal_material_shader;
