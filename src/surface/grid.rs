//! Height and velocity storage for the liquid heightfield.
//!
//! Both fields are flat row-major buffers indexed `x + z * width`, the same
//! order the mesh builder writes vertices in.

/// Heightfield state: one height and one vertical velocity per sample
///
/// Grids narrower than 3 samples on either axis have no interior; the
/// integrator and ripple injector leave them untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    width: usize,
    depth: usize,
    heights: Vec<f32>,
    velocities: Vec<f32>,
}

impl HeightGrid {
    /// Allocate a grid at rest: all heights `initial_height`, all velocities zero
    pub fn new(width: usize, depth: usize, initial_height: f32) -> Self {
        let count = width * depth;
        Self {
            width,
            depth,
            heights: vec![initial_height; count],
            velocities: vec![0.0; count],
        }
    }

    /// Reset to rest state, reallocating only when dimensions change
    pub fn reinitialize(&mut self, width: usize, depth: usize, initial_height: f32) {
        let count = width * depth;
        self.width = width;
        self.depth = depth;
        self.heights.clear();
        self.heights.resize(count, initial_height);
        self.velocities.clear();
        self.velocities.resize(count, 0.0);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample count along Z (the configured grid "height")
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn index(&self, x: usize, z: usize) -> usize {
        x + z * self.width
    }

    /// True for samples not on the outer ring
    #[inline]
    pub fn is_interior(&self, x: usize, z: usize) -> bool {
        x >= 1 && z >= 1 && x + 1 < self.width && z + 1 < self.depth
    }

    #[inline]
    pub fn height_at(&self, x: usize, z: usize) -> f32 {
        self.heights[self.index(x, z)]
    }

    #[inline]
    pub fn velocity_at(&self, x: usize, z: usize) -> f32 {
        self.velocities[self.index(x, z)]
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Split borrow used by the integrator (read heights, write velocities)
    pub(crate) fn fields_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.heights, &mut self.velocities)
    }

    /// Add to one sample's velocity; boundary samples are ignored
    #[inline]
    pub fn add_velocity(&mut self, x: usize, z: usize, delta: f32) {
        if self.is_interior(x, z) {
            let idx = self.index(x, z);
            self.velocities[idx] += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_at_rest() {
        let grid = HeightGrid::new(7, 5, 1.25);
        assert_eq!(grid.heights().len(), 35);
        assert_eq!(grid.velocities().len(), 35);
        assert!(grid.heights().iter().all(|&h| h == 1.25));
        assert!(grid.velocities().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_reinitialize_resets_and_resizes() {
        let mut grid = HeightGrid::new(4, 4, 0.0);
        grid.add_velocity(1, 1, 3.0);
        grid.reinitialize(6, 3, -2.0);

        assert_eq!(grid.width(), 6);
        assert_eq!(grid.depth(), 3);
        assert_eq!(grid.heights().len(), 18);
        assert!(grid.heights().iter().all(|&h| h == -2.0));
        assert!(grid.velocities().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_row_major_indexing() {
        let grid = HeightGrid::new(5, 4, 0.0);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(4, 0), 4);
        assert_eq!(grid.index(0, 1), 5);
        assert_eq!(grid.index(3, 2), 13);
    }

    #[test]
    fn test_boundary_velocity_is_ignored() {
        let mut grid = HeightGrid::new(4, 4, 0.0);
        grid.add_velocity(0, 2, 1.0);
        grid.add_velocity(3, 1, 1.0);
        grid.add_velocity(2, 3, 1.0);
        assert!(grid.velocities().iter().all(|&v| v == 0.0));

        grid.add_velocity(1, 2, 1.0);
        assert_eq!(grid.velocity_at(1, 2), 1.0);
    }

    #[test]
    fn test_two_by_two_has_no_interior() {
        let grid = HeightGrid::new(2, 2, 0.0);
        for z in 0..2 {
            for x in 0..2 {
                assert!(!grid.is_interior(x, z));
            }
        }
    }
}
