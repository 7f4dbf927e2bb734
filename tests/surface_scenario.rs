//! End-to-end behaviour of the liquid surface through its public API.

use glam::Vec2;
use ripplesurf::params::SurfaceParams;
use ripplesurf::surface::{build_topology, SurfaceSystem};

fn boundary_samples(width: usize, depth: usize) -> Vec<(usize, usize)> {
    let mut samples = Vec::new();
    for z in 0..depth {
        for x in 0..width {
            if x == 0 || z == 0 || x == width - 1 || z == depth - 1 {
                samples.push((x, z));
            }
        }
    }
    samples
}

#[test]
fn center_splash_on_ten_by_ten() {
    let params = SurfaceParams {
        width: 10,
        height: 10,
        initial_height: 0.0,
        ..Default::default()
    };
    let expected = params.ripple_strength * 10.0 * 1.0_f32.min(params.max_drag_splash_force);
    let mut surface = SurfaceSystem::new(params).unwrap();

    surface.inject_at(Vec2::new(0.5, 0.5), 1.0);
    let v = surface.grid().velocity_at(5, 5);
    assert!(v > 0.0);
    assert!((v - expected).abs() < 1e-6);

    surface.tick(1.0 / 60.0);
    assert!(surface.grid().height_at(5, 5) > 0.0);
}

#[test]
fn configure_leaves_surface_at_rest() {
    for (width, depth, rest) in [(2, 2, 0.0), (3, 7, 1.5), (40, 25, -2.0)] {
        let surface = SurfaceSystem::new(SurfaceParams {
            width,
            height: depth,
            initial_height: rest,
            ..Default::default()
        })
        .unwrap();
        assert!(surface.grid().heights().iter().all(|&h| h == rest));
        assert!(surface.grid().velocities().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn boundary_never_changes() {
    let mut surface = SurfaceSystem::new(SurfaceParams {
        width: 20,
        height: 14,
        initial_height: 0.75,
        ..Default::default()
    })
    .unwrap();

    let edges = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.5),
        Vec2::new(0.03, 0.97),
        Vec2::new(0.5, 0.0),
    ];
    for frame in 0..300 {
        surface.inject_at(edges[frame % edges.len()], 2.0);
        surface.tick(1.0 / 60.0);
    }

    let grid = surface.grid();
    for (x, z) in boundary_samples(20, 14) {
        assert_eq!(grid.height_at(x, z), 0.75);
        assert_eq!(grid.velocity_at(x, z), 0.0);
    }
}

fn assert_stays_bounded(dt: f32) {
    let mut surface = SurfaceSystem::new(SurfaceParams::default()).unwrap();
    surface.inject_at(Vec2::splat(0.5), 1.0);

    let initial_peak = surface.stats().peak_speed;
    for _ in 0..10_000 {
        surface.tick(dt);
        let stats = surface.stats();
        assert!(stats.min_height.is_finite() && stats.max_height.is_finite());
    }

    let stats = surface.stats();
    assert!(stats.peak_speed <= initial_peak);
    assert!(stats.max_height.abs() < 1.0 && stats.min_height.abs() < 1.0);
}

#[test]
fn stays_bounded_over_ten_thousand_steps() {
    assert_stays_bounded(1.0 / 60.0);
}

#[test]
fn stays_bounded_at_largest_allowed_step() {
    assert_stays_bounded(SurfaceParams::default().max_step_s);
}

#[test]
fn oversized_steps_are_clamped() {
    let params = SurfaceParams {
        width: 24,
        height: 24,
        ..Default::default()
    };
    let max_step = params.max_step_s;
    let mut clamped = SurfaceSystem::new(params.clone()).unwrap();
    let mut reference = SurfaceSystem::new(params).unwrap();
    clamped.inject_at(Vec2::splat(0.5), 1.0);
    reference.inject_at(Vec2::splat(0.5), 1.0);

    for _ in 0..50 {
        clamped.tick(2.0);
        reference.tick(max_step);
    }

    assert_eq!(clamped.grid(), reference.grid());
}

#[test]
fn stroke_counts_follow_density_rule() {
    let params = SurfaceParams {
        width: 48,
        height: 32,
        ..Default::default()
    };
    let mut surface = SurfaceSystem::new(params).unwrap();

    let a = Vec2::new(0.2, 0.2);
    let b = Vec2::new(0.7, 0.4);

    assert_eq!(surface.inject_stroke(Some(a), true), 1);
    assert_eq!(surface.inject_stroke(Some(a), true), 0);

    let count = surface.inject_stroke(Some(b), true);
    let bound = (a.distance(b) * 48.0 * 2.0).ceil() as usize + 1;
    assert!(count >= 1 && count <= bound, "count {} bound {}", count, bound);
}

#[test]
fn topology_is_stable_across_reconfigure() {
    let params = SurfaceParams {
        width: 12,
        height: 9,
        ..Default::default()
    };
    let mut surface = SurfaceSystem::new(params.clone()).unwrap();
    let before = surface.indices().to_vec();
    surface.configure(params).unwrap();

    assert_eq!(surface.indices(), &before[..]);
    assert_eq!(before, build_topology(12, 9));
}
