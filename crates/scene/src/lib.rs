//! Scene Bootstrap: camera, scene graph with a single cube, time-driven rotation.
//!
//! # Invariants
//! - The cube's rotation at loop time `t` is exactly `(t / 2000, t / 1000, 0)`.
//! - Rotation is derived from `t`, never accumulated across frames.
//! - Nothing here touches the GPU; renderers only read the scene.

pub mod animation;
pub mod bootstrap;
pub mod camera;
pub mod geometry;
pub mod mesh;
pub mod scene;

pub use animation::rotation_at;
pub use bootstrap::{SceneBootstrap, bootstrap, try_bootstrap};
pub use camera::PerspectiveCamera;
pub use geometry::{BoxGeometry, GeometryData, Vertex};
pub use mesh::{Material, Mesh};
pub use scene::Scene;
