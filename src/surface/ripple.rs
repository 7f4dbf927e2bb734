//! Pointer-driven disturbances: single splashes and drag strokes.
//!
//! Injections add a linear radial falloff to the velocity field. A drag
//! stroke is sampled once per frame by the host and re-densified here into
//! evenly spaced injections, so stroke density depends on grid resolution
//! rather than on frame rate or pointer speed.

use glam::Vec2;
use log::{trace, warn};

use super::grid::HeightGrid;
use crate::params::SurfaceParams;

/// Clamp a normalized coordinate into the unit square
///
/// Fast drags can report hits just outside the surface; those are pulled
/// back onto the edge instead of being rejected.
#[inline]
pub fn clamp_normalized(position: Vec2) -> Vec2 {
    position.clamp(Vec2::ZERO, Vec2::ONE)
}

/// Add a radial velocity impulse centred on a normalized coordinate
///
/// # Arguments
/// * `position` - Normalized surface coordinate, clamped to `[0,1]²`
/// * `force_scale` - Multiplier, clamped to `[0, max_drag_splash_force]`
pub fn inject_at(grid: &mut HeightGrid, params: &SurfaceParams, position: Vec2, force_scale: f32) {
    if !position.is_finite() || !force_scale.is_finite() {
        warn!(
            "Ignoring ripple with non-finite input: position={:?}, force={}",
            position, force_scale
        );
        return;
    }

    let width = grid.width();
    let depth = grid.depth();
    if width < 3 || depth < 3 {
        return;
    }

    let position = clamp_normalized(position);
    let cx = (position.x * (width - 1) as f32).round() as isize;
    let cz = (position.y * (depth - 1) as f32).round() as isize;

    let force = force_scale.clamp(0.0, params.max_drag_splash_force);
    let radius = params.radius_samples() as f32;
    let mut strength = params.ripple_strength * depth as f32 * force;
    if let Some(ceiling) = params.max_ripple_strength {
        strength = strength.min(ceiling);
    }

    let reach = radius.ceil() as isize;
    for dz in -reach..=reach {
        let z = cz + dz;
        if z < 1 || z >= depth as isize - 1 {
            continue;
        }
        for dx in -reach..=reach {
            let x = cx + dx;
            if x < 1 || x >= width as isize - 1 {
                continue;
            }
            let distance = ((dx * dx + dz * dz) as f32).sqrt();
            if distance <= radius {
                grid.add_velocity(x as usize, z as usize, strength * (1.0 - distance / radius));
            }
        }
    }

    trace!(
        "Ripple at ({}, {}) radius={} strength={:.4}",
        cx,
        cz,
        radius,
        strength
    );
}

/// Transient state of one pointer drag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragStroke {
    pub is_dragging: bool,
    pub last_position: Option<Vec2>,
}

impl DragStroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the held/released signal; any transition starts a fresh stroke
    ///
    /// Returns true if the signal changed.
    pub fn set_held(&mut self, held: bool) -> bool {
        if held == self.is_dragging {
            return false;
        }
        self.is_dragging = held;
        self.last_position = None;
        true
    }

    /// Pointer no longer hits the surface; next contact starts over
    pub fn lose_contact(&mut self) {
        self.last_position = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Evenly spaced points after `from`, ending exactly at `to`
///
/// Count is `ceil(distance * max(width, height) * 2)`, at least one.
pub fn stroke_points(from: Vec2, to: Vec2, params: &SurfaceParams) -> Vec<Vec2> {
    let distance = from.distance(to);
    let steps = ((distance * params.stroke_density()).ceil() as usize).max(1);
    (1..=steps)
        .map(|i| from.lerp(to, i as f32 / steps as f32))
        .collect()
}

/// Advance a drag stroke to the pointer's current position
///
/// Returns the number of injections performed this frame.
pub fn inject_stroke(
    grid: &mut HeightGrid,
    params: &SurfaceParams,
    stroke: &mut DragStroke,
    current: Vec2,
) -> usize {
    if !current.is_finite() {
        warn!("Ignoring stroke sample with non-finite position {:?}", current);
        stroke.lose_contact();
        return 0;
    }
    let current = clamp_normalized(current);

    let Some(last) = stroke.last_position.replace(current) else {
        inject_at(grid, params, current, 1.0);
        return 1;
    };

    let distance = last.distance(current);
    if distance <= params.stroke_epsilon {
        return 0;
    }

    let force = distance * params.drag_force_per_unit;
    let points = stroke_points(last, current, params);
    for &point in &points {
        inject_at(grid, params, point, force);
    }
    trace!(
        "Stroke {:?} -> {:?}: {} injections, force={:.3}",
        last,
        current,
        points.len(),
        force
    );
    points.len()
}
