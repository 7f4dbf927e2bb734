//! Render geometry derived from the height grid.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::grid::HeightGrid;

/// Vertex data for the surface mesh (position + normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Triangle indices for a `width x depth` sample grid
///
/// Two triangles per quad. For quad origin `i = z * width + x` the
/// triangles are `(i, i+width, i+1)` and `(i+1, i+width, i+width+1)`, which
/// face +Y with counter-clockwise winding.
pub fn build_topology(width: usize, depth: usize) -> Vec<u32> {
    let quads = width.saturating_sub(1) * depth.saturating_sub(1);
    let mut indices = Vec::with_capacity(quads * 6);

    for z in 0..depth.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let top_left = (z * width + x) as u32;
            let top_right = top_left + 1;
            let bottom_left = top_left + width as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                top_right,
                top_right,
                bottom_left,
                bottom_right,
            ]);
        }
    }

    indices
}

/// Surface mesh: vertex buffer refreshed every frame, topology built once
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    width: usize,
    depth: usize,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Create a flat mesh with one vertex slot per sample
    pub fn new(width: usize, depth: usize) -> Self {
        let mut mesh = Self {
            width: 0,
            depth: 0,
            vertices: Vec::new(),
            indices: Vec::new(),
        };
        mesh.rebuild(width, depth);
        mesh
    }

    /// Rebuild topology if the dimensions changed
    ///
    /// Returns true if the index buffer was regenerated.
    pub fn rebuild(&mut self, width: usize, depth: usize) -> bool {
        if width == self.width && depth == self.depth && !self.vertices.is_empty() {
            return false;
        }

        self.width = width;
        self.depth = depth;
        self.indices = build_topology(width, depth);
        self.vertices.clear();
        for z in 0..depth {
            for x in 0..width {
                self.vertices.push(Vertex {
                    position: [x as f32, 0.0, z as f32],
                    normal: [0.0, 1.0, 0.0],
                });
            }
        }
        true
    }

    /// Copy scaled heights into vertex positions
    ///
    /// X and Z stay the raw sample indices (unit spacing).
    pub fn refresh_vertices(&mut self, grid: &HeightGrid, scale: f32) {
        debug_assert_eq!(grid.width(), self.width);
        debug_assert_eq!(grid.depth(), self.depth);

        for (vertex, &h) in self.vertices.iter_mut().zip(grid.heights()) {
            vertex.position[1] = h * scale;
        }
    }

    /// Recompute per-vertex normals from central height differences
    ///
    /// Edge vertices fall back to one-sided differences.
    pub fn recompute_normals(&mut self) {
        let (width, depth) = (self.width, self.depth);
        if width < 2 || depth < 2 {
            return;
        }

        let height = |x: usize, z: usize| self.vertices[x + z * width].position[1];
        let mut normals = Vec::with_capacity(self.vertices.len());

        for z in 0..depth {
            let (z0, z1) = (z.saturating_sub(1), (z + 1).min(depth - 1));
            for x in 0..width {
                let (x0, x1) = (x.saturating_sub(1), (x + 1).min(width - 1));
                let dhdx = (height(x1, z) - height(x0, z)) / (x1 - x0) as f32;
                let dhdz = (height(x, z1) - height(x, z0)) / (z1 - z0) as f32;
                normals.push(Vec3::new(-dhdx, 1.0, -dhdz).normalize());
            }
        }

        for (vertex, normal) in self.vertices.iter_mut().zip(normals) {
            vertex.normal = normal.to_array();
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Extent of the mesh in local units (X, Z)
    pub fn extent(&self) -> (f32, f32) {
        (
            self.width.saturating_sub(1) as f32,
            self.depth.saturating_sub(1) as f32,
        )
    }
}
