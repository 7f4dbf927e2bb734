//! Damped scalar wave update over the interior of a height grid.

use super::grid::HeightGrid;
use crate::params::SurfaceParams;

/// Updates per second the damping factor is expressed against
const DAMPING_BASELINE_HZ: f32 = 60.0;

/// Advance the heightfield by `dt` seconds
///
/// Two full passes: velocities are computed from the untouched heights,
/// then heights are advanced from the new velocities. Boundary samples are
/// never written.
pub fn step(grid: &mut HeightGrid, params: &SurfaceParams, dt: f32) {
    let width = grid.width();
    let depth = grid.depth();
    if width < 3 || depth < 3 {
        return;
    }

    let speed_dt = params.wave_speed * dt;
    let decay = params.ripple_damping.powf(dt * DAMPING_BASELINE_HZ);
    let (heights, velocities) = grid.fields_mut();

    // Pass 1: velocities from a fully unmutated height snapshot
    for z in 1..depth - 1 {
        let row = z * width;
        for x in 1..width - 1 {
            let i = row + x;
            let avg = (heights[i - 1] + heights[i + 1] + heights[i - width] + heights[i + width])
                * 0.25;
            let force = avg - heights[i];
            velocities[i] = (velocities[i] + force * speed_dt) * decay;
        }
    }

    // Pass 2: integrate heights
    for z in 1..depth - 1 {
        let row = z * width;
        for x in 1..width - 1 {
            let i = row + x;
            heights[i] += velocities[i] * speed_dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: usize, depth: usize) -> SurfaceParams {
        SurfaceParams {
            width,
            height: depth,
            ..Default::default()
        }
    }

    #[test]
    fn test_flat_surface_stays_flat() {
        let p = params(8, 8);
        let mut grid = HeightGrid::new(8, 8, 0.5);
        for _ in 0..100 {
            step(&mut grid, &p, 1.0 / 60.0);
        }
        assert!(grid.heights().iter().all(|&h| h == 0.5));
        assert!(grid.velocities().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_velocity_moves_height() {
        let p = params(5, 5);
        let mut grid = HeightGrid::new(5, 5, 0.0);
        grid.add_velocity(2, 2, 1.0);
        step(&mut grid, &p, 1.0 / 60.0);

        let expected_v = p.ripple_damping;
        assert!((grid.velocity_at(2, 2) - expected_v).abs() < 1e-6);
        let expected_h = expected_v * p.wave_speed / 60.0;
        assert!((grid.height_at(2, 2) - expected_h).abs() < 1e-6);
    }

    #[test]
    fn test_velocities_use_pre_step_heights() {
        // A raised sample next to flat neighbours: each neighbour's force
        // must see the original peak, not a peak lowered mid-pass.
        let p = SurfaceParams {
            ripple_damping: 1.0,
            ..params(5, 5)
        };
        let mut grid = HeightGrid::new(5, 5, 0.0);
        let (heights, _) = grid.fields_mut();
        heights[2 + 2 * 5] = 4.0;

        let dt = 1.0 / 60.0;
        step(&mut grid, &p, dt);

        let neighbour_v = (4.0 / 4.0) * p.wave_speed * dt;
        for (x, z) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            assert!((grid.velocity_at(x, z) - neighbour_v).abs() < 1e-6);
        }
        let peak_v = -4.0 * p.wave_speed * dt;
        assert!((grid.velocity_at(2, 2) - peak_v).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_untouched() {
        let p = params(6, 6);
        let mut grid = HeightGrid::new(6, 6, 0.0);
        {
            let (heights, _) = grid.fields_mut();
            heights[1 + 6] = 2.0;
        }
        for _ in 0..50 {
            step(&mut grid, &p, 1.0 / 60.0);
        }
        for z in 0..6 {
            for x in 0..6 {
                if !grid.is_interior(x, z) {
                    assert_eq!(grid.height_at(x, z), 0.0);
                    assert_eq!(grid.velocity_at(x, z), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_grid_is_noop() {
        let p = params(2, 2);
        let mut grid = HeightGrid::new(2, 2, 1.0);
        step(&mut grid, &p, 1.0);
        assert!(grid.heights().iter().all(|&h| h == 1.0));
    }

    #[test]
    fn test_damping_is_frame_rate_independent() {
        // Pure decay (no neighbours differ): two half steps == one full step
        let p = SurfaceParams {
            wave_speed: 0.0,
            ..params(3, 3)
        };
        let mut a = HeightGrid::new(3, 3, 0.0);
        let mut b = HeightGrid::new(3, 3, 0.0);
        a.add_velocity(1, 1, 1.0);
        b.add_velocity(1, 1, 1.0);

        step(&mut a, &p, 1.0 / 30.0);
        step(&mut b, &p, 1.0 / 60.0);
        step(&mut b, &p, 1.0 / 60.0);

        assert!((a.velocity_at(1, 1) - b.velocity_at(1, 1)).abs() < 1e-6);
    }
}
