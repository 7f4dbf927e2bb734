//! Interactive liquid surface simulated as a damped heightfield.
//!
//! Frame order: ripple injections, one integrator step, vertex refresh.

mod grid;
mod integrator;
mod mesh;
mod ripple;
mod system;

// Re-export public types
pub use grid::HeightGrid;
pub use integrator::step;
pub use mesh::{build_topology, SurfaceMesh, Vertex};
pub use ripple::{clamp_normalized, inject_at, inject_stroke, stroke_points, DragStroke};
pub use system::{SurfaceStats, SurfaceSystem};
