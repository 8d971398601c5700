//! Shared value types for the tumble workspace.

pub mod config;
pub mod types;
pub mod viewport;

pub use config::{ConfigError, DemoConfig, Variant};
pub use types::{Euler, ObjectId, Transform};
pub use viewport::{Viewport, ViewportError};
