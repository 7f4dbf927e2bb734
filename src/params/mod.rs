//! Parameter definitions with units and documented semantics.
//!
//! Simulation parameters live in `surface`; everything the interactive
//! host needs (window, camera, snapshots) lives alongside.

mod camera;
mod render;
mod surface;

// Re-export all types
pub use camera::OrbitCamera;
pub use render::{RenderConfig, SnapshotConfig};
pub use surface::SurfaceParams;
