//! High-level liquid surface: configure, disturb, tick, read geometry.

use glam::{Vec2, Vec3};
use log::{debug, info};

use super::grid::HeightGrid;
use super::integrator;
use super::mesh::{SurfaceMesh, Vertex};
use super::ripple::{self, DragStroke};
use crate::error::ConfigResult;
use crate::params::SurfaceParams;

/// Summary of the current heightfield (diagnostics)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStats {
    pub min_height: f32,
    pub max_height: f32,
    /// Largest absolute vertical velocity
    pub peak_speed: f32,
}

/// Liquid surface simulation owning grid state, drag state and mesh
///
/// Per frame the host calls, in order: zero or more `inject_*`, one
/// `tick`, then reads `vertices()`.
pub struct SurfaceSystem {
    params: SurfaceParams,
    grid: HeightGrid,
    mesh: SurfaceMesh,
    stroke: DragStroke,
}

impl SurfaceSystem {
    /// Create a surface at rest
    pub fn new(params: SurfaceParams) -> ConfigResult<Self> {
        params.validate()?;
        let grid = HeightGrid::new(params.width, params.height, params.initial_height);
        let mut mesh = SurfaceMesh::new(params.width, params.height);
        mesh.refresh_vertices(&grid, params.scale);

        info!(
            "Surface configured: {}x{} samples, rest height {}",
            params.width, params.height, params.initial_height
        );

        Ok(Self {
            params,
            grid,
            mesh,
            stroke: DragStroke::new(),
        })
    }

    /// Re-initialize with new parameters (full reset)
    ///
    /// On error the current surface is left untouched.
    pub fn configure(&mut self, params: SurfaceParams) -> ConfigResult<()> {
        params.validate()?;
        self.grid
            .reinitialize(params.width, params.height, params.initial_height);
        if self.mesh.rebuild(params.width, params.height) {
            debug!("Rebuilt topology: {} indices", self.mesh.indices().len());
        }
        self.stroke.reset();
        self.params = params;
        self.refresh_mesh();

        info!(
            "Surface reconfigured: {}x{} samples, rest height {}",
            self.params.width, self.params.height, self.params.initial_height
        );
        Ok(())
    }

    /// Reset to rest with the current parameters
    pub fn reset(&mut self) {
        self.grid.reinitialize(
            self.params.width,
            self.params.height,
            self.params.initial_height,
        );
        self.stroke.reset();
        self.refresh_mesh();
    }

    /// Advance by a live frame delta, clamped to `[0, max_step_s]`
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt } else { 0.0 };
        let clamped = dt.clamp(0.0, self.params.max_step_s);
        if clamped != dt {
            debug!("Frame delta {:.4}s clamped to {:.4}s", dt, clamped);
        }
        self.advance(clamped);
    }

    /// Advance by the fixed nominal step (host without a live clock)
    pub fn tick_nominal(&mut self) {
        self.advance(self.params.nominal_step_s);
    }

    fn advance(&mut self, dt: f32) {
        integrator::step(&mut self.grid, &self.params, dt);
        self.refresh_mesh();
    }

    fn refresh_mesh(&mut self) {
        self.mesh.refresh_vertices(&self.grid, self.params.scale);
        self.mesh.recompute_normals();
    }

    /// Single radial splash at a normalized coordinate
    pub fn inject_at(&mut self, position: Vec2, force_scale: f32) {
        ripple::inject_at(&mut self.grid, &self.params, position, force_scale);
    }

    /// Feed one frame of pointer input into the drag stroke
    ///
    /// # Arguments
    /// * `position` - Normalized hit coordinate, `None` when the pointer misses the surface
    /// * `is_held` - Whether the pointer button is down
    ///
    /// # Returns
    /// Number of ripple injections performed
    pub fn inject_stroke(&mut self, position: Option<Vec2>, is_held: bool) -> usize {
        if self.stroke.set_held(is_held) {
            debug!("Drag {}", if is_held { "started" } else { "ended" });
        }
        if !is_held {
            return 0;
        }

        match position {
            Some(position) => {
                ripple::inject_stroke(&mut self.grid, &self.params, &mut self.stroke, position)
            }
            None => {
                self.stroke.lose_contact();
                0
            }
        }
    }

    /// Map a surface-local point (mesh space) to clamped normalized coordinates
    pub fn normalize_local(&self, local: Vec3) -> Vec2 {
        let (extent_x, extent_z) = self.mesh.extent();
        ripple::clamp_normalized(Vec2::new(local.x / extent_x, local.z / extent_z))
    }

    /// Mesh extent in local units (X, Z)
    pub fn local_extent(&self) -> Vec2 {
        let (x, z) = self.mesh.extent();
        Vec2::new(x, z)
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.mesh.vertices()
    }

    pub fn indices(&self) -> &[u32] {
        self.mesh.indices()
    }

    /// Owned copy of the vertex buffer for a renderer on another thread
    pub fn vertex_snapshot(&self) -> Vec<Vertex> {
        self.mesh.vertices().to_vec()
    }

    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }

    pub fn stroke(&self) -> &DragStroke {
        &self.stroke
    }

    pub fn stats(&self) -> SurfaceStats {
        let (min_height, max_height) = self
            .grid
            .heights()
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            });
        let peak_speed = self
            .grid
            .velocities()
            .iter()
            .fold(0.0_f32, |peak, &v| peak.max(v.abs()));

        SurfaceStats {
            min_height,
            max_height,
            peak_speed,
        }
    }
}
